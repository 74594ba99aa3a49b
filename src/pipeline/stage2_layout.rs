use crate::model::color::Rgb;
use crate::model::percentile::{PercentileError, percentile_score};
use crate::model::profile::ChartProfile;
use crate::model::score::ScoreTable;

/// A bar mirrored around x = 0, spanning `[-half_width, half_width]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub score: i32,
    pub half_width: u64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: Rgb,
    /// Outline drawn around the label box, if any.
    pub edge: Option<Rgb>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub y: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
    pub bar_height: f64,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub x_ticks: Vec<(f64, String)>,
    pub reference_lines: Vec<ReferenceLine>,
    pub annotations: Vec<Annotation>,
    pub percentile: f64,
    pub percentile_score: i32,
    pub max_count: u64,
}

pub fn run_stage2(
    table: &ScoreTable,
    profile: &ChartProfile,
    percentile: f64,
) -> Result<ChartLayout, PercentileError> {
    let marker_score = percentile_score(&table.rows, percentile)?;
    let max_count = table.max_count();
    let m = max_count as f64;
    let style = &profile.style;

    let colors = profile.gradient.colors(table.len());
    let bars = table
        .rows
        .iter()
        .zip(colors)
        .map(|(row, color)| Bar {
            score: row.score,
            half_width: row.count,
            color,
        })
        .collect::<Vec<_>>();

    let half_span = max_count.max(1) as f64 * profile.xlim_factor;

    let mut reference_lines = Vec::with_capacity(profile.thresholds.len() + 1);
    let mut annotations = Vec::with_capacity(profile.thresholds.len() + 1);
    let boxed = profile.draw_median_line;

    for t in &profile.thresholds {
        reference_lines.push(ReferenceLine {
            y: t.score as f64,
            color: t.color,
        });
        let text = if profile.threshold_label_with_score {
            format!("{} ({})", t.label, t.score)
        } else {
            t.label.to_string()
        };
        annotations.push(Annotation {
            x: m * profile.threshold_label_x,
            y: t.score as f64 + profile.text_y_offset,
            text,
            color: t.color,
            edge: boxed.then_some(t.color),
        });
    }

    if profile.draw_median_line {
        reference_lines.push(ReferenceLine {
            y: marker_score as f64,
            color: style.text,
        });
    }
    annotations.push(Annotation {
        x: -m * profile.median_label_x,
        y: marker_score as f64 + profile.text_y_offset,
        text: marker_label(profile, percentile, marker_score),
        color: style.text,
        edge: boxed.then_some(style.text),
    });

    let y_range = y_bounds(table, profile, marker_score);

    Ok(ChartLayout {
        title: profile.title.to_string(),
        x_label: profile.x_label.to_string(),
        y_label: profile.y_label.to_string(),
        bars,
        bar_height: style.bar_height,
        x_range: (-half_span, half_span),
        y_range,
        x_ticks: mirrored_ticks(max_count),
        reference_lines,
        annotations,
        percentile,
        percentile_score: marker_score,
        max_count,
    })
}

/// Ticks at `-m, -m/2, 0, m/2, m`, labelled with absolute counts.
pub fn mirrored_ticks(max_count: u64) -> Vec<(f64, String)> {
    let half = max_count / 2;
    [
        (-(max_count as f64), max_count),
        (-(half as f64), half),
        (0.0, 0),
        (half as f64, half),
        (max_count as f64, max_count),
    ]
    .into_iter()
    .map(|(x, label)| (x, label.to_string()))
    .collect()
}

fn marker_label(profile: &ChartProfile, percentile: f64, score: i32) -> String {
    let name = if percentile == 50.0 {
        profile.median_label.to_string()
    } else {
        format!("P{percentile}")
    };
    if profile.median_label_with_score {
        format!("{name}: {score}")
    } else {
        name
    }
}

fn y_bounds(table: &ScoreTable, profile: &ChartProfile, marker_score: i32) -> (f64, f64) {
    let mut lo = marker_score as f64;
    let mut hi = marker_score as f64;
    if let Some((min, max)) = table.score_bounds() {
        lo = lo.min(min as f64);
        hi = hi.max(max as f64);
    }
    for t in &profile.thresholds {
        lo = lo.min(t.score as f64);
        hi = hi.max(t.score as f64);
    }
    lo -= profile.style.bar_height;
    hi += profile.style.bar_height + profile.text_y_offset;
    let pad = ((hi - lo) * 0.02).max(1.0);
    (lo - pad, hi + pad)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_layout.rs"]
mod tests;
