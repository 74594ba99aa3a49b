/// Interpreted score-column cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreLabel {
    /// The source left the cell empty; the row is not part of the table.
    Absent,
    Score(i32),
}

/// Parses a score cell such as `"650"`, `"650分"`, `"650-655"` or an exact
/// sentinel label for an open-ended band.
///
/// Ranges resolve to their lower bound.
pub fn parse_score_label(raw: &str, sentinels: &[(&str, i32)]) -> Result<ScoreLabel, String> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(ScoreLabel::Absent);
    }
    if let Some(&(_, score)) = sentinels.iter().find(|(label, _)| *label == s) {
        return Ok(ScoreLabel::Score(score));
    }

    let head = match s.split_once('-') {
        Some((lo, _)) if !lo.trim().is_empty() => lo.trim(),
        _ => s,
    };
    let digits = head.trim_end_matches('分').trim();
    digits
        .parse::<i32>()
        .map(ScoreLabel::Score)
        .map_err(|_| format!("unrecognized score label {raw:?}"))
}

/// Parses a count cell. Empty cells count as zero and integral floats such
/// as `"12.0"` are accepted.
pub fn parse_count(raw: &str) -> Result<u64, String> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(0);
    }
    if let Ok(v) = s.parse::<u64>() {
        return Ok(v);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 => {
            Ok(v as u64)
        }
        _ => Err(format!("invalid count {raw:?}")),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/score_label.rs"]
mod tests;
