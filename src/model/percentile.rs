use thiserror::Error;

use crate::model::score::ScoreRow;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PercentileError {
    #[error("percentile lookup on an empty score table")]
    EmptyInput,
    #[error("no score band reaches cumulative count {target}")]
    NoThresholdReached { target: f64 },
    #[error("percentile {0} is outside (0, 100]")]
    InvalidPercentile(f64),
}

/// Score of the first row, in traversal order, whose cumulative count reaches
/// `percentile` percent of the total population.
///
/// The total is the largest cumulative count. No interpolation happens
/// between bands; ties go to whichever row comes first.
pub fn percentile_score(rows: &[ScoreRow], percentile: f64) -> Result<i32, PercentileError> {
    if rows.is_empty() {
        return Err(PercentileError::EmptyInput);
    }
    if !percentile.is_finite() || percentile <= 0.0 || percentile > 100.0 {
        return Err(PercentileError::InvalidPercentile(percentile));
    }

    let total = rows.iter().map(|r| r.cumulative_count).max().unwrap_or(0);
    let target = total as f64 * percentile / 100.0;

    rows.iter()
        .find(|r| r.cumulative_count as f64 >= target)
        .map(|r| r.score)
        .ok_or(PercentileError::NoThresholdReached { target })
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/percentile.rs"]
mod tests;
