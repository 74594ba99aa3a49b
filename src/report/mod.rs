use serde::Serialize;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct ThresholdSummary {
    pub score: i32,
    pub label: String,
    pub at_or_above: u64,
    pub share: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSummary {
    pub tool: String,
    pub tool_version: String,
    pub profile: String,
    pub input: String,
    pub output: String,
    pub source_rows: usize,
    pub rows: usize,
    pub dropped_rows: usize,
    pub total: u64,
    pub max_count: u64,
    pub percentile: f64,
    pub percentile_score: i32,
    pub thresholds: Vec<ThresholdSummary>,
}

pub fn share(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
