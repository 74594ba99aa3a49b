use super::*;
use crate::report::json::render_summary_json;
use crate::report::text::render_summary_text;

fn summary() -> ChartSummary {
    ChartSummary {
        tool: "scoreviz".to_string(),
        tool_version: "0.1.0".to_string(),
        profile: "gaokao".to_string(),
        input: "in.csv".to_string(),
        output: "out.png".to_string(),
        source_rows: 5,
        rows: 4,
        dropped_rows: 1,
        total: 80,
        max_count: 30,
        percentile: 50.0,
        percentile_score: 540,
        thresholds: vec![ThresholdSummary {
            score: 539,
            label: "本科第一批".to_string(),
            at_or_above: 40,
            share: 0.5,
        }],
    }
}

#[test]
fn test_share() {
    assert_eq!(share(1, 4), 0.25);
    assert_eq!(share(3, 0), 0.0);
}

#[test]
fn test_json_contains_keys() {
    let json = render_summary_json(&summary()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["percentile_score"], 540);
    assert_eq!(v["thresholds"][0]["label"], "本科第一批");
    assert_eq!(v["dropped_rows"], 1);
}

#[test]
fn test_text_lists_thresholds() {
    let text = render_summary_text(&summary());
    assert!(text.contains("P50 score: 540"));
    assert!(text.contains("本科第一批 539: 40 at or above (50.00%)"));
    assert!(text.contains("Rows: 4 (1 dropped of 5)"));
}
