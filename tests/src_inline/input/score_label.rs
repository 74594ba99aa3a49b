use super::*;

const SENTINELS: &[(&str, i32)] = &[("650分及以上", 650), ("400分以下路", 399)];

#[test]
fn test_plain_and_suffixed_scores() {
    assert_eq!(parse_score_label("612", &[]), Ok(ScoreLabel::Score(612)));
    assert_eq!(parse_score_label(" 612分 ", &[]), Ok(ScoreLabel::Score(612)));
}

#[test]
fn test_range_resolves_to_lower_bound() {
    assert_eq!(parse_score_label("700-750", &[]), Ok(ScoreLabel::Score(700)));
    assert_eq!(parse_score_label("600分-610分", &[]), Ok(ScoreLabel::Score(600)));
}

#[test]
fn test_sentinels() {
    assert_eq!(
        parse_score_label("650分及以上", SENTINELS),
        Ok(ScoreLabel::Score(650))
    );
    assert_eq!(
        parse_score_label("400分以下路", SENTINELS),
        Ok(ScoreLabel::Score(399))
    );
    // Without the sentinel table the same label is rejected.
    assert!(parse_score_label("650分及以上", &[]).is_err());
}

#[test]
fn test_empty_is_absent() {
    assert_eq!(parse_score_label("", SENTINELS), Ok(ScoreLabel::Absent));
    assert_eq!(parse_score_label("   ", &[]), Ok(ScoreLabel::Absent));
}

#[test]
fn test_garbage_is_rejected() {
    assert!(parse_score_label("abc", &[]).is_err());
    assert!(parse_score_label("-", &[]).is_err());
    assert!(parse_score_label("12.5", &[]).is_err());
}

#[test]
fn test_parse_count() {
    assert_eq!(parse_count("42"), Ok(42));
    assert_eq!(parse_count(""), Ok(0));
    assert_eq!(parse_count("12.0"), Ok(12));
    assert!(parse_count("12.5").is_err());
    assert!(parse_count("-3").is_err());
    assert!(parse_count("many").is_err());
}
