use super::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_path(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("scoreviz_render_{}_{}", std::process::id(), id));
    dir.join(name)
}

#[test]
fn test_dash_segments_cover_span() {
    let segs = dash_segments(0.0, 10.0, 2.0, 1.0);
    assert_eq!(
        segs,
        vec![(0.0, 2.0), (3.0, 5.0), (6.0, 8.0), (9.0, 10.0)]
    );
}

#[test]
fn test_dash_segments_degenerate_inputs() {
    assert!(dash_segments(0.0, 10.0, 0.0, 1.0).is_empty());
    assert!(dash_segments(5.0, 5.0, 1.0, 1.0).is_empty());
    assert!(dash_segments(0.0, 1.0, f64::NAN, 1.0).is_empty());
}

#[test]
fn test_ensure_parent_dir_creates_nested_dirs() {
    let path = temp_path("a/b/chart.png");
    ensure_parent_dir(&path).unwrap();
    assert!(path.parent().unwrap().is_dir());
    ensure_parent_dir(Path::new("chart.png")).unwrap();
}

#[test]
fn test_rgb_conversion() {
    let c = rgb(Rgb::new(1, 2, 3));
    assert_eq!((c.0, c.1, c.2), (1, 2, 3));
}

#[test]
fn test_render_chart_writes_png_at_figure_size() {
    use crate::model::profile::ChartProfile;
    use crate::model::score::{ScoreRow, ScoreTable};
    use crate::pipeline::stage2_layout::run_stage2;

    let mut profile = ChartProfile::gaokao();
    profile.style.dpi = 10.0;
    let table = ScoreTable::new(vec![
        ScoreRow::new(600, 5, 5),
        ScoreRow::new(540, 20, 25),
        ScoreRow::new(460, 30, 55),
        ScoreRow::new(200, 10, 65),
    ]);
    let layout = run_stage2(&table, &profile, 50.0).unwrap();
    let out = temp_path("deep/dir/gaokao.png");

    render_chart(&layout, &profile.style, profile.show_spines, &out).unwrap();

    // 14x18 inches at 10 dpi
    assert_eq!(image::image_dimensions(&out).unwrap(), (140, 180));
}
