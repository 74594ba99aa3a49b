use crate::report::ChartSummary;

pub fn render_summary_text(s: &ChartSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Score distribution ({})\n", s.profile));
    out.push_str(&format!("Input: {}\n", s.input));
    out.push_str(&format!("Output: {}\n", s.output));
    out.push_str(&format!(
        "Rows: {} ({} dropped of {})\n",
        s.rows, s.dropped_rows, s.source_rows
    ));
    out.push_str(&format!("Total: {}\n", s.total));
    out.push_str(&format!(
        "P{} score: {}\n",
        s.percentile, s.percentile_score
    ));
    for t in &s.thresholds {
        out.push_str(&format!(
            "  {} {}: {} at or above ({:.2}%)\n",
            t.label,
            t.score,
            t.at_or_above,
            t.share * 100.0
        ));
    }
    out
}
