//! Read-only presenters over an evaluated hierarchy.
pub mod chart;
pub mod report;
pub mod table;

pub use chart::{render_chart, terminal_plot_size};
pub use report::{ChartSeries, RankRow, Report};
pub use table::format_table;
