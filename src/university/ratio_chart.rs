use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::model::color::{REDS, Rgb};
use crate::pipeline::stage3_render::{
    RenderError, dash_segments, drawing_err, ensure_parent_dir, rgb,
};
use crate::university::dataset::UniversityRecord;

pub const TOP_N: usize = 20;
const FONT: &str = "sans-serif";
const MEAN_LINE: Rgb = Rgb::new(52, 73, 94);
const GRID: Rgb = Rgb::new(189, 195, 199);

#[derive(Debug, Clone, PartialEq)]
pub struct RatioBar {
    pub name: String,
    pub ratio: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone)]
pub struct RatioChartLayout {
    pub title: String,
    pub bars: Vec<RatioBar>,
    /// Mean over every record, not just the plotted ones.
    pub mean: f64,
    pub y_max: f64,
}

/// First `TOP_N` records in their given order, coloured on the Reds scale
/// across the plotted ratio range.
pub fn build_ratio_chart(records: &[UniversityRecord]) -> RatioChartLayout {
    let top = &records[..records.len().min(TOP_N)];
    let min = top.iter().map(|r| r.ratio).fold(f64::INFINITY, f64::min);
    let max = top.iter().map(|r| r.ratio).fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let bars = top
        .iter()
        .map(|r| RatioBar {
            name: r.name.clone(),
            ratio: r.ratio,
            color: if span > 0.0 {
                REDS.sample((r.ratio - min) / span)
            } else {
                REDS.sample(1.0)
            },
        })
        .collect();

    let mean = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| r.ratio).sum::<f64>() / records.len() as f64
    };
    let y_top = max.max(mean).max(0.0);

    RatioChartLayout {
        title: format!("2024年高校研究生与本科生比例排名（前{TOP_N}名）"),
        bars,
        mean,
        y_max: if y_top > 0.0 { y_top * 1.15 } else { 1.0 },
    }
}

pub fn render_ratio_chart(layout: &RatioChartLayout, out: &Path) -> Result<(), RenderError> {
    ensure_parent_dir(out)?;

    let root = BitMapBackend::new(out, (1400, 700)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_err)?;

    let n = layout.bars.len().max(1) as f64;
    let mut chart = ChartBuilder::on(&root)
        .caption(&layout.title, (FONT, 20.0).into_font())
        .margin_top(40)
        .margin_left(40)
        .margin_right(80)
        .x_label_area_size(130)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0f64..n, 0.0f64..layout.y_max)
        .map_err(drawing_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(rgb(GRID).mix(0.2))
        .light_line_style(TRANSPARENT)
        .x_label_formatter(&|_: &f64| String::new())
        .y_label_formatter(&|y: &f64| format!("{y:.1}"))
        .label_style((FONT, 12.0).into_font())
        .axis_desc_style((FONT, 14.0).into_font())
        .x_desc("院校名称")
        .y_desc("研究生与本科生比例")
        .draw()
        .map_err(drawing_err)?;

    chart
        .draw_series(layout.bars.iter().enumerate().map(|(i, bar)| {
            let x = i as f64;
            Rectangle::new([(x + 0.1, 0.0), (x + 0.9, bar.ratio)], rgb(bar.color).filled())
        }))
        .map_err(drawing_err)?;

    let value_font = (FONT, 12.0)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    let name_font = (FONT, 12.0)
        .into_font()
        .transform(FontTransform::Rotate90)
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for (i, bar) in layout.bars.iter().enumerate() {
        let center = i as f64 + 0.5;
        let (px, py) = chart.backend_coord(&(center, bar.ratio));
        root.draw(&Text::new(
            format!("{:.2}", bar.ratio),
            (px, py - 4),
            value_font.clone(),
        ))
        .map_err(drawing_err)?;
        let (bx, by) = chart.backend_coord(&(center, 0.0));
        root.draw(&Text::new(bar.name.clone(), (bx, by + 8), name_font.clone()))
            .map_err(drawing_err)?;
    }

    let stroke = rgb(MEAN_LINE).mix(0.5).stroke_width(2);
    chart
        .draw_series(
            dash_segments(0.0, n, n / 100.0, n / 200.0)
                .into_iter()
                .map(|(a, b)| PathElement::new(vec![(a, layout.mean), (b, layout.mean)], stroke)),
        )
        .map_err(drawing_err)?;
    let (mx, my) = chart.backend_coord(&(n, layout.mean));
    root.draw(&Text::new(
        "平均值",
        (mx + 6, my),
        (FONT, 12.0)
            .into_font()
            .color(&rgb(MEAN_LINE))
            .pos(Pos::new(HPos::Left, VPos::Center)),
    ))
    .map_err(drawing_err)?;

    root.present().map_err(drawing_err)?;
    Ok(())
}
