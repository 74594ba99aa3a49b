use std::path::Path;

use crate::model::profile::ChartProfile;
use crate::model::score::ScoreTable;
use crate::pipeline::stage1_table::Stage1Output;
use crate::pipeline::stage2_layout::ChartLayout;
use crate::report::{ChartSummary, ThresholdSummary, share};

pub struct Stage4Input<'a> {
    pub stage1: &'a Stage1Output,
    pub layout: &'a ChartLayout,
    pub profile: &'a ChartProfile,
    pub input_path: &'a Path,
    pub output_path: &'a Path,
}

pub fn run_stage4(input: &Stage4Input<'_>) -> ChartSummary {
    let table = &input.stage1.table;
    ChartSummary {
        tool: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        profile: input.profile.name.to_string(),
        input: input.input_path.display().to_string(),
        output: input.output_path.display().to_string(),
        source_rows: input.stage1.source_rows,
        rows: table.len(),
        dropped_rows: input.stage1.dropped_rows,
        total: table.total(),
        max_count: input.layout.max_count,
        percentile: input.layout.percentile,
        percentile_score: input.layout.percentile_score,
        thresholds: threshold_summaries(table, input.profile),
    }
}

fn threshold_summaries(table: &ScoreTable, profile: &ChartProfile) -> Vec<ThresholdSummary> {
    let total = table.total();
    profile
        .thresholds
        .iter()
        .map(|t| {
            let at_or_above = table.count_at_or_above(t.score);
            ThresholdSummary {
                score: t.score,
                label: t.label.to_string(),
                at_or_above,
                share: share(at_or_above, total),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_summary.rs"]
mod tests;
