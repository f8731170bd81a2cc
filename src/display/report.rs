use crate::chain::Hierarchy;
use serde::Serialize;

/// One table row per rank, base to apex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankRow {
    pub name: String,
    pub direct_subordinate_count: u32,
    /// Name of the rank processed just before this one (the next lower rank).
    pub collects_from: Option<String>,
    pub collected: f64,
    pub ceded: f64,
    pub usable: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: String,
    pub ranks: Vec<RankRow>,
}

impl Report {
    pub fn from_hierarchy(hierarchy: &Hierarchy) -> Self {
        let mut previous: Option<&str> = None;
        let mut ranks = Vec::with_capacity(hierarchy.len());

        for view in hierarchy.ranks() {
            ranks.push(RankRow {
                name: view.name.to_string(),
                direct_subordinate_count: view.direct_subordinate_count,
                collects_from: previous.map(str::to_string),
                collected: view.flow.collected,
                ceded: view.flow.ceded,
                usable: view.flow.usable,
            });
            previous = Some(view.name);
        }

        Self { title: hierarchy.title().to_string(), ranks }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Parallel, position-indexed series for the bar chart (base = 1 .. apex = N).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub usable: Vec<f64>,
    pub ceded: Vec<f64>,
}

pub const LABEL_WIDTH: usize = 4;

impl ChartSeries {
    pub fn from_hierarchy(hierarchy: &Hierarchy) -> Self {
        let mut series = Self { labels: Vec::new(), usable: Vec::new(), ceded: Vec::new() };
        for view in hierarchy.ranks() {
            series.labels.push(view.name.chars().take(LABEL_WIDTH).collect());
            series.usable.push(view.flow.usable);
            series.ceded.push(view.flow.ceded);
        }
        series
    }

    pub fn len(&self) -> usize { self.labels.len() }

    pub fn is_empty(&self) -> bool { self.labels.is_empty() }
}
