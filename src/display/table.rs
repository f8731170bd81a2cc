use crate::display::report::{RankRow, Report};
use console::{measure_text_width, pad_str, style, Alignment};
use std::fmt::Write;

const HEADERS: [&str; 5] = ["Class", "Collects from", "Collected", "Ceded", "Usable"];
const ALIGN: [Alignment; 5] = [Alignment::Left, Alignment::Left, Alignment::Right, Alignment::Right, Alignment::Right];

/// Renders the per-rank summary table, base rank first.
pub fn format_table(report: &Report) -> String {
    let rows: Vec<[String; 5]> = report.ranks.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(measure_text_width);
    for cells in &rows {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(measure_text_width(cell));
        }
    }

    let rule = {
        let mut line = String::from("+");
        for w in widths {
            line.push_str(&"-".repeat(w + 2));
            line.push('+');
        }
        line
    };
    let total_width = measure_text_width(&rule);

    let mut out = String::new();
    let title = style(&report.title).italic().to_string();
    let _ = writeln!(out, "{}", pad_str(&title, total_width, Alignment::Center, None).trim_end());
    let _ = writeln!(out, "{}", rule);

    let header: Vec<String> = HEADERS.iter().map(|h| style(h).bold().to_string()).collect();
    let _ = writeln!(out, "{}", format_line(&header, &widths, &[Alignment::Left; 5]));
    let _ = writeln!(out, "{}", rule);

    for mut cells in rows {
        cells[0] = style(&cells[0]).bold().to_string();
        let _ = writeln!(out, "{}", format_line(&cells, &widths, &ALIGN));
    }
    let _ = writeln!(out, "{}", rule);
    out
}

fn row_cells(row: &RankRow) -> [String; 5] {
    let collects_from = match &row.collects_from {
        Some(previous) => format!("{} {}", row.direct_subordinate_count, previous),
        None => row.direct_subordinate_count.to_string(),
    };
    [
        row.name.clone(),
        collects_from,
        format!("{:.2}", row.collected),
        format!("{:.2}", row.ceded),
        format!("{:.2}", row.usable),
    ]
}

fn format_line(cells: &[String], widths: &[usize; 5], align: &[Alignment; 5]) -> String {
    let mut line = String::from("|");
    for ((cell, &w), &a) in cells.iter().zip(widths).zip(align) {
        let _ = write!(line, " {} |", pad_str(cell, w, a, None));
    }
    line
}
