use super::*;
use crate::model::score::ScoreRow;
use crate::pipeline::stage2_layout::run_stage2;

#[test]
fn test_summary_counts_population_above_thresholds() {
    let stage1 = Stage1Output {
        table: ScoreTable::new(vec![
            ScoreRow::new(560, 10, 10),
            ScoreRow::new(540, 30, 40),
            ScoreRow::new(500, 25, 65),
            ScoreRow::new(480, 15, 80),
        ]),
        source_rows: 5,
        dropped_rows: 1,
    };
    let profile = ChartProfile::gaokao();
    let layout = run_stage2(&stage1.table, &profile, 50.0).unwrap();

    let summary = run_stage4(&Stage4Input {
        stage1: &stage1,
        layout: &layout,
        profile: &profile,
        input_path: Path::new("data/in.csv"),
        output_path: Path::new("out/chart.png"),
    });

    assert_eq!(summary.tool, "scoreviz");
    assert_eq!(summary.total, 80);
    assert_eq!(summary.percentile_score, 540);
    assert_eq!(summary.rows, 4);
    assert_eq!(summary.dropped_rows, 1);
    assert_eq!(summary.thresholds.len(), 4);
    assert_eq!(summary.thresholds[0].at_or_above, 40);
    assert_eq!(summary.thresholds[0].share, 0.5);
    assert_eq!(summary.thresholds[3].at_or_above, 80);
}
