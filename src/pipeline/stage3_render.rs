use std::fs;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;

use crate::model::color::Rgb;
use crate::model::profile::StyleConfig;
use crate::pipeline::stage2_layout::{Annotation, ChartLayout};

const FONT: &str = "sans-serif";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("drawing failed: {0}")]
    Drawing(String),
}

pub fn drawing_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Drawing(e.to_string())
}

pub fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Splits `[x0, x1]` into dash intervals of length `dash` separated by `gap`.
pub fn dash_segments(x0: f64, x1: f64, dash: f64, gap: f64) -> Vec<(f64, f64)> {
    let mut out = Vec::new();
    if !(dash > 0.0) || gap < 0.0 || x1 <= x0 {
        return out;
    }
    let mut x = x0;
    while x < x1 {
        out.push((x, (x + dash).min(x1)));
        x += dash + gap;
    }
    out
}

pub fn render_chart(
    layout: &ChartLayout,
    style: &StyleConfig,
    show_spines: bool,
    out: &Path,
) -> Result<(), RenderError> {
    ensure_parent_dir(out)?;

    let root = BitMapBackend::new(out, style.pixel_size()).into_drawing_area();
    let background = rgb(style.background);
    let text = rgb(style.text);
    root.fill(&background).map_err(drawing_err)?;

    let title_font = (FONT, style.px(style.title_size) as f64, FontStyle::Bold)
        .into_font()
        .color(&text);
    let desc_font = (FONT, style.px(style.axis_label_size) as f64, FontStyle::Bold)
        .into_font()
        .color(&text);
    let tick_font = (FONT, style.px(style.tick_label_size) as f64)
        .into_font()
        .color(&text);

    let label_area = style.px(style.tick_label_size + style.axis_label_size) * 2;
    let mut chart = ChartBuilder::on(&root)
        .caption(&layout.title, title_font)
        .margin(style.px(style.title_pad))
        .x_label_area_size(label_area)
        .y_label_area_size(label_area)
        .build_cartesian_2d(
            layout.x_range.0..layout.x_range.1,
            layout.y_range.0..layout.y_range.1,
        )
        .map_err(drawing_err)?;

    let axis_style = if show_spines {
        rgb(style.spine).stroke_width(style.px(style.spine_width))
    } else {
        TRANSPARENT.stroke_width(0)
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(rgb(style.grid).mix(style.grid_alpha))
        .light_line_style(TRANSPARENT)
        .axis_style(axis_style)
        .x_label_formatter(&|_: &f64| String::new())
        .y_label_formatter(&|y: &f64| format!("{y:.0}"))
        .label_style(tick_font.clone())
        .axis_desc_style(desc_font)
        .x_desc(layout.x_label.as_str())
        .y_desc(layout.y_label.as_str())
        .draw()
        .map_err(drawing_err)?;

    let half = layout.bar_height / 2.0;
    chart
        .draw_series(layout.bars.iter().map(|bar| {
            let w = bar.half_width as f64;
            let y = bar.score as f64;
            Rectangle::new(
                [(-w, y - half), (w, y + half)],
                rgb(bar.color).mix(style.bar_alpha).filled(),
            )
        }))
        .map_err(drawing_err)?;

    let (x0, x1) = layout.x_range;
    let dash = (x1 - x0) / 80.0;
    for line in &layout.reference_lines {
        let stroke = rgb(line.color)
            .mix(style.line_alpha)
            .stroke_width(style.px(style.line_width));
        chart
            .draw_series(
                dash_segments(x0, x1, dash, dash / 2.0)
                    .into_iter()
                    .map(|(a, b)| PathElement::new(vec![(a, line.y), (b, line.y)], stroke)),
            )
            .map_err(drawing_err)?;
    }

    let tick_pad = style.px(style.annotation_pad) as i32;
    for (x, label) in &layout.x_ticks {
        let (px, py) = chart.backend_coord(&(*x, layout.y_range.0));
        root.draw(&Text::new(
            label.clone(),
            (px, py + tick_pad),
            tick_font.pos(Pos::new(HPos::Center, VPos::Top)),
        ))
        .map_err(drawing_err)?;
    }

    for a in &layout.annotations {
        let anchor = chart.backend_coord(&(a.x, a.y));
        draw_annotation(&root, a, anchor, style)?;
    }

    root.present().map_err(drawing_err)?;
    Ok(())
}

fn draw_annotation(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    a: &Annotation,
    (px, py): (i32, i32),
    style: &StyleConfig,
) -> Result<(), RenderError> {
    let color = rgb(a.color);
    let font = (FONT, style.px(style.annotation_size) as f64, FontStyle::Bold)
        .into_font()
        .color(&color);
    // Boxed labels sit above their anchor; plain ones are centred on it.
    let vpos = if a.edge.is_some() {
        VPos::Bottom
    } else {
        VPos::Center
    };
    let (w, h) = root
        .estimate_text_size(&a.text, &font)
        .map_err(drawing_err)?;
    let (w, h) = (w as i32, h as i32);
    let pad = style.px(style.annotation_pad) as i32;
    let top = match vpos {
        VPos::Bottom => py - h,
        _ => py - h / 2,
    };
    let corners = [(px - pad, top - pad), (px + w + pad, top + h + pad)];

    root.draw(&Rectangle::new(
        corners,
        rgb(style.background).mix(0.95).filled(),
    ))
    .map_err(drawing_err)?;
    if let Some(edge) = a.edge {
        root.draw(&Rectangle::new(
            corners,
            rgb(edge).stroke_width(style.px(1.5)),
        ))
        .map_err(drawing_err)?;
    }
    root.draw(&Text::new(
        a.text.clone(),
        (px, py),
        font.pos(Pos::new(HPos::Left, vpos)),
    ))
    .map_err(drawing_err)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_render.rs"]
mod tests;
