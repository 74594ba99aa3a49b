use super::*;

#[test]
fn test_gaokao_thresholds_in_descending_order() {
    let p = ChartProfile::gaokao();
    let scores: Vec<i32> = p.thresholds.iter().map(|t| t.score).collect();
    assert_eq!(scores, vec![539, 495, 459, 150]);
    assert!(p.threshold_label_with_score);
    assert!(!p.draw_median_line);
    assert!(p.score_sentinels.is_empty());
}

#[test]
fn test_zhongkao_overrides_layout() {
    let p = ChartProfile::zhongkao();
    assert_eq!(p.name, "zhongkao");
    assert_eq!(p.thresholds.len(), 3);
    assert!(p.draw_median_line);
    assert!(p.gradient.reversed);
    assert_eq!(p.xlim_factor, 1.3);
    assert_eq!(p.style.figure_size, (9.0, 16.0));
    // Shared colors come from the base style.
    assert_eq!(p.style.background, Rgb::new(0xFF, 0xF9, 0xE6));
    assert_eq!(p.columns.cumulative, "累计人数");
}

#[test]
fn test_for_kind_selects_profile() {
    assert_eq!(ChartProfile::for_kind(ProfileKind::Gaokao).name, "gaokao");
    assert_eq!(ChartProfile::for_kind(ProfileKind::Zhongkao).name, "zhongkao");
}

#[test]
fn test_pixel_scaling() {
    let style = ChartProfile::zhongkao().style;
    assert_eq!(style.pixel_size(), (2700, 4800));
    assert_eq!(style.px(72.0), 300);
    assert_eq!(style.px(0.0), 1);
}

#[test]
fn test_reversed_gradient() {
    let g = ChartProfile::zhongkao().gradient;
    let colors = g.colors(4);
    assert_eq!(colors[0], RD_PU.sample(0.8));
    assert_eq!(colors[3], RD_PU.sample(0.1));
}
