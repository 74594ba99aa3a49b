use super::*;

fn rows() -> Vec<ScoreRow> {
    vec![
        ScoreRow::new(100, 5, 5),
        ScoreRow::new(200, 5, 10),
        ScoreRow::new(300, 10, 20),
    ]
}

#[test]
fn test_median_is_first_row_reaching_half() {
    assert_eq!(percentile_score(&rows(), 50.0), Ok(200));
}

#[test]
fn test_full_percentile_returns_last_row() {
    assert_eq!(percentile_score(&rows(), 100.0), Ok(300));

    let descending = vec![
        ScoreRow::new(700, 1, 1),
        ScoreRow::new(650, 4, 5),
        ScoreRow::new(600, 9, 14),
        ScoreRow::new(550, 2, 16),
    ];
    assert_eq!(percentile_score(&descending, 100.0), Ok(550));
}

#[test]
fn test_small_target_returns_first_row() {
    assert_eq!(percentile_score(&rows(), 25.0), Ok(100));
    assert_eq!(percentile_score(&rows(), 0.5), Ok(100));
}

#[test]
fn test_exact_boundary_is_inclusive() {
    let r = vec![
        ScoreRow::new(10, 2, 2),
        ScoreRow::new(20, 2, 4),
        ScoreRow::new(30, 4, 8),
    ];
    assert_eq!(percentile_score(&r, 50.0), Ok(20));
    assert_eq!(percentile_score(&r, 50.1), Ok(30));
}

#[test]
fn test_traversal_order_is_respected() {
    // High-to-low table: the first band reached is the top end.
    let r = vec![
        ScoreRow::new(650, 10, 10),
        ScoreRow::new(600, 10, 20),
        ScoreRow::new(550, 20, 40),
    ];
    assert_eq!(percentile_score(&r, 50.0), Ok(600));
}

#[test]
fn test_total_is_max_cumulative_not_last() {
    let r = vec![
        ScoreRow::new(1, 10, 10),
        ScoreRow::new(2, 10, 20),
        ScoreRow::new(3, 0, 0),
    ];
    assert_eq!(percentile_score(&r, 100.0), Ok(2));
}

#[test]
fn test_empty_input_fails() {
    assert_eq!(percentile_score(&[], 50.0), Err(PercentileError::EmptyInput));
}

#[test]
fn test_invalid_percentile_fails() {
    assert_eq!(
        percentile_score(&rows(), 0.0),
        Err(PercentileError::InvalidPercentile(0.0))
    );
    assert_eq!(
        percentile_score(&rows(), 100.5),
        Err(PercentileError::InvalidPercentile(100.5))
    );
    assert!(matches!(
        percentile_score(&rows(), f64::NAN),
        Err(PercentileError::InvalidPercentile(_))
    ));
}

#[test]
fn test_all_zero_population_returns_first_row() {
    let r = vec![ScoreRow::new(5, 0, 0), ScoreRow::new(6, 0, 0)];
    assert_eq!(percentile_score(&r, 50.0), Ok(5));
}
