use super::*;

fn table() -> ScoreTable {
    ScoreTable::new(vec![
        ScoreRow::new(650, 3, 3),
        ScoreRow::new(640, 7, 10),
        ScoreRow::new(630, 12, 22),
        ScoreRow::new(620, 0, 22),
    ])
}

#[test]
fn test_total_uses_largest_cumulative() {
    assert_eq!(table().total(), 22);
    assert_eq!(ScoreTable::default().total(), 0);
}

#[test]
fn test_max_count_and_bounds() {
    let t = table();
    assert_eq!(t.max_count(), 12);
    assert_eq!(t.score_bounds(), Some((620, 650)));
    assert_eq!(ScoreTable::default().score_bounds(), None);
}

#[test]
fn test_monotonic_detection() {
    assert!(table().is_cumulative_monotonic());
    let broken = ScoreTable::new(vec![ScoreRow::new(1, 5, 5), ScoreRow::new(2, 1, 4)]);
    assert!(!broken.is_cumulative_monotonic());
}

#[test]
fn test_count_at_or_above() {
    let t = table();
    assert_eq!(t.count_at_or_above(640), 10);
    assert_eq!(t.count_at_or_above(700), 0);
    assert_eq!(t.count_at_or_above(0), 22);
}
