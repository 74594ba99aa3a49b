use std::path::Path;

use tracing::{debug, warn};

use crate::input::score_label::{ScoreLabel, parse_count, parse_score_label};
use crate::input::{InputError, RawScoreRecord, read_score_records};
use crate::model::profile::ChartProfile;
use crate::model::score::{ScoreRow, ScoreTable};

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub table: ScoreTable,
    pub source_rows: usize,
    pub dropped_rows: usize,
}

pub fn run_stage1(path: &Path, profile: &ChartProfile) -> Result<Stage1Output, InputError> {
    let records = read_score_records(path, &profile.columns)?;
    let out = build_table(&records, profile)?;
    if out.table.is_empty() {
        warn!("no score bands left in {}", path.display());
    } else if !out.table.is_cumulative_monotonic() {
        warn!(
            "cumulative counts in {} decrease somewhere; percentile lookup follows file order",
            path.display()
        );
    }
    Ok(out)
}

pub fn build_table(
    records: &[RawScoreRecord],
    profile: &ChartProfile,
) -> Result<Stage1Output, InputError> {
    let mut rows = Vec::with_capacity(records.len());
    let mut dropped_rows = 0usize;

    for rec in records {
        let parse_err = |msg: String| InputError::Parse {
            line: rec.line,
            msg,
        };
        let label = parse_score_label(&rec.label, profile.score_sentinels).map_err(parse_err)?;
        let score = match label {
            ScoreLabel::Absent => {
                debug!("dropping line {} without a score label", rec.line);
                dropped_rows += 1;
                continue;
            }
            ScoreLabel::Score(s) => s,
        };
        let count = parse_count(&rec.count).map_err(parse_err)?;
        let cumulative_count = parse_count(&rec.cumulative).map_err(parse_err)?;
        rows.push(ScoreRow::new(score, count, cumulative_count));
    }

    Ok(Stage1Output {
        table: ScoreTable::new(rows),
        source_rows: records.len(),
        dropped_rows,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_table.rs"]
mod tests;
