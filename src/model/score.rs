use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreRow {
    pub score: i32,
    pub count: u64,
    pub cumulative_count: u64,
}

impl ScoreRow {
    pub fn new(score: i32, count: u64, cumulative_count: u64) -> Self {
        Self {
            score,
            count,
            cumulative_count,
        }
    }
}

/// Score bands in the order they were stored in the source file.
///
/// The order is never normalized: which end of the distribution is "first"
/// is decided by the data, and percentile lookups follow it.
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    pub rows: Vec<ScoreRow>,
}

impl ScoreTable {
    pub fn new(rows: Vec<ScoreRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total population, taken as the largest cumulative count.
    pub fn total(&self) -> u64 {
        self.rows
            .iter()
            .map(|r| r.cumulative_count)
            .max()
            .unwrap_or(0)
    }

    pub fn max_count(&self) -> u64 {
        self.rows.iter().map(|r| r.count).max().unwrap_or(0)
    }

    pub fn score_bounds(&self) -> Option<(i32, i32)> {
        let min = self.rows.iter().map(|r| r.score).min()?;
        let max = self.rows.iter().map(|r| r.score).max()?;
        Some((min, max))
    }

    /// True when cumulative counts never decrease in traversal order.
    pub fn is_cumulative_monotonic(&self) -> bool {
        self.rows
            .windows(2)
            .all(|w| w[0].cumulative_count <= w[1].cumulative_count)
    }

    pub fn count_at_or_above(&self, score: i32) -> u64 {
        self.rows
            .iter()
            .filter(|r| r.score >= score)
            .map(|r| r.count)
            .sum()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/score.rs"]
mod tests;
