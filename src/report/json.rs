use std::fs;
use std::path::Path;

use crate::report::ChartSummary;

pub fn render_summary_json(summary: &ChartSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

pub fn write_summary_json(path: &Path, summary: &ChartSummary) -> std::io::Result<()> {
    let mut text = render_summary_json(summary)?;
    text.push('\n');
    fs::write(path, text)
}
