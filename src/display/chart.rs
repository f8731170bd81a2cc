//! chart.rs
//! Stacked bar chart of usable (bottom) and ceded (top) resource per rank.

use crate::config::Palette;
use crate::display::report::ChartSeries;
use console::{measure_text_width, pad_str, Alignment, Style, Term};
use std::fmt::Write;

pub const USABLE_GLYPH: char = '█';
pub const CEDED_GLYPH: char = '▓';

/// Share of the terminal the chart occupies, in percent.
pub const WIDTH_PERCENT: usize = 95;
pub const HEIGHT_PERCENT: usize = 70;

/// Chart size for the current terminal. Falls back to console's default
/// size when stdout is not a terminal.
pub fn terminal_plot_size() -> (usize, usize) {
    let (rows, cols) = Term::stdout().size();
    scaled_size(rows, cols)
}

pub fn scaled_size(rows: u16, cols: u16) -> (usize, usize) {
    (usize::from(cols) * WIDTH_PERCENT / 100, usize::from(rows) * HEIGHT_PERCENT / 100)
}

/// Renders the chart into `width` x `height` character cells.
///
/// Rows are spent on a legend, the plot area, an axis rule and a label line;
/// the plot keeps at least one row and one column per bar however small the
/// requested size.
pub fn render_chart(series: &ChartSeries, palette: Option<Palette>, width: usize, height: usize) -> String {
    let (usable_style, ceded_style) = match palette {
        Some(p) => (Style::new().color256(p.usable), Style::new().color256(p.ceded)),
        None => (Style::new(), Style::new()),
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} Usable  {} Ceded",
        usable_style.apply_to(USABLE_GLYPH),
        ceded_style.apply_to(CEDED_GLYPH)
    );

    let n = series.len();
    if n == 0 {
        return out;
    }

    let max_total = series
        .usable
        .iter()
        .zip(&series.ceded)
        .map(|(u, c)| u + c)
        .fold(0.0_f64, f64::max);
    let scale = if max_total > 0.0 { max_total } else { 1.0 };

    let top_label = format!("{:.2}", max_total);
    let gutter = measure_text_width(&top_label).max(1);
    let plot_width = width.saturating_sub(gutter + 2).max(n);
    let slot = plot_width / n;
    let bar = slot.saturating_sub(1).max(1);
    let rows = height.saturating_sub(3).max(1);

    // (usable rows, total rows) per bar
    let heights: Vec<(usize, usize)> = series
        .usable
        .iter()
        .zip(&series.ceded)
        .map(|(&u, &c)| {
            let total = ((u + c) / scale * rows as f64).round() as usize;
            let usable = ((u / scale * rows as f64).round() as usize).min(total);
            (usable, total)
        })
        .collect();

    for r in 0..rows {
        let level = rows - r;
        let axis_label = if r == 0 {
            top_label.as_str()
        } else if r == rows - 1 {
            "0"
        } else {
            ""
        };
        let _ = write!(out, "{} |", pad_str(axis_label, gutter, Alignment::Right, None));

        for &(usable, total) in &heights {
            let cell = if level <= usable {
                usable_style.apply_to(USABLE_GLYPH.to_string().repeat(bar)).to_string()
            } else if level <= total {
                ceded_style.apply_to(CEDED_GLYPH.to_string().repeat(bar)).to_string()
            } else {
                " ".repeat(bar)
            };
            let _ = write!(out, "{}{}", cell, " ".repeat(slot - bar));
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{} +{}", " ".repeat(gutter), "-".repeat(slot * n));

    let _ = write!(out, "{}  ", " ".repeat(gutter));
    for label in &series.labels {
        let _ = write!(out, "{}", pad_str(label, slot, Alignment::Center, Some("")));
    }
    out.push('\n');
    out
}
