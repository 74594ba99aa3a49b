use crate::model::color::{Colormap, RD_PU, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    Gaokao,
    Zhongkao,
}

#[derive(Debug, Clone)]
pub struct StyleConfig {
    pub background: Rgb,
    pub text: Rgb,
    pub grid: Rgb,
    pub spine: Rgb,

    // Sizes are in points; the renderer scales them by dpi.
    pub title_size: f64,
    pub axis_label_size: f64,
    pub tick_label_size: f64,
    pub annotation_size: f64,

    pub spine_width: f64,
    pub grid_alpha: f64,
    pub line_alpha: f64,
    pub line_width: f64,

    pub title_pad: f64,
    pub annotation_pad: f64,

    pub bar_height: f64,
    pub bar_alpha: f64,

    /// Width and height in inches.
    pub figure_size: (f64, f64),
    pub dpi: f64,
}

impl StyleConfig {
    pub fn px(&self, points: f64) -> u32 {
        (points * self.dpi / 72.0).round().max(1.0) as u32
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.figure_size.0 * self.dpi).round().max(1.0) as u32,
            (self.figure_size.1 * self.dpi).round().max(1.0) as u32,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub score: i32,
    pub label: &'static str,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnNames {
    pub score: &'static str,
    pub count: &'static str,
    pub cumulative: &'static str,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            score: "分数",
            count: "人数",
            cumulative: "累计人数",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Gradient {
    pub map: Colormap,
    pub start: f64,
    pub end: f64,
    pub reversed: bool,
}

impl Gradient {
    pub fn colors(&self, n: usize) -> Vec<Rgb> {
        let mut colors = self.map.linspace(self.start, self.end, n);
        if self.reversed {
            colors.reverse();
        }
        colors
    }
}

/// Everything that differs between the score-distribution chart variants.
#[derive(Debug, Clone)]
pub struct ChartProfile {
    pub name: &'static str,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub columns: ColumnNames,
    /// Exact score labels for open-ended bands.
    pub score_sentinels: &'static [(&'static str, i32)],
    pub thresholds: Vec<Threshold>,
    pub gradient: Gradient,

    /// Half-width of the x axis as a multiple of the largest count.
    pub xlim_factor: f64,
    pub threshold_label_x: f64,
    pub threshold_label_with_score: bool,
    pub median_label_x: f64,
    pub median_label: &'static str,
    pub median_label_with_score: bool,
    pub draw_median_line: bool,
    pub text_y_offset: f64,
    pub show_spines: bool,

    pub style: StyleConfig,
}

impl ChartProfile {
    pub fn for_kind(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Gaokao => Self::gaokao(),
            ProfileKind::Zhongkao => Self::zhongkao(),
        }
    }

    /// College entrance exam, one row per score band, high score first.
    pub fn gaokao() -> Self {
        Self {
            name: "gaokao",
            title: "高考分数分布图",
            x_label: "人数",
            y_label: "分数",
            columns: ColumnNames::default(),
            score_sentinels: &[],
            thresholds: vec![
                Threshold {
                    score: 539,
                    label: "本科第一批",
                    color: Rgb::new(0xFF, 0x6B, 0x6B),
                },
                Threshold {
                    score: 495,
                    label: "本科线",
                    color: Rgb::new(0xFF, 0x8F, 0x00),
                },
                Threshold {
                    score: 459,
                    label: "本科第二批",
                    color: Rgb::new(0x4C, 0xAF, 0x50),
                },
                Threshold {
                    score: 150,
                    label: "专科批",
                    color: Rgb::new(0x21, 0x96, 0xF3),
                },
            ],
            gradient: Gradient {
                map: RD_PU,
                start: 0.2,
                end: 0.7,
                reversed: false,
            },
            xlim_factor: 1.2,
            threshold_label_x: 0.82,
            threshold_label_with_score: true,
            median_label_x: 1.15,
            median_label: "中位数",
            median_label_with_score: true,
            draw_median_line: false,
            text_y_offset: 0.0,
            show_spines: true,
            style: StyleConfig {
                background: Rgb::new(0xFF, 0xF9, 0xE6),
                text: Rgb::new(0x2F, 0x4F, 0x4F),
                grid: Rgb::new(0x66, 0x66, 0x66),
                spine: Rgb::new(0x66, 0x66, 0x66),
                title_size: 36.0,
                axis_label_size: 20.0,
                tick_label_size: 16.0,
                annotation_size: 18.0,
                spine_width: 1.5,
                grid_alpha: 0.2,
                line_alpha: 0.8,
                line_width: 2.5,
                title_pad: 30.0,
                annotation_pad: 5.0,
                bar_height: 0.9,
                bar_alpha: 0.8,
                figure_size: (14.0, 18.0),
                dpi: 300.0,
            },
        }
    }

    /// Middle-school exam, portrait 9:16 layout with a drawn median line.
    pub fn zhongkao() -> Self {
        let base = Self::gaokao();
        Self {
            name: "zhongkao",
            title: "中考分数分布图",
            score_sentinels: &[("650分及以上", 650), ("400分以下路", 399)],
            thresholds: vec![
                Threshold {
                    score: 545,
                    label: "省重点高中",
                    color: Rgb::new(0xFF, 0x6B, 0x6B),
                },
                Threshold {
                    score: 506,
                    label: "普通高中",
                    color: Rgb::new(0x4C, 0xAF, 0x50),
                },
                Threshold {
                    score: 485,
                    label: "职普融通",
                    color: Rgb::new(0x21, 0x96, 0xF3),
                },
            ],
            gradient: Gradient {
                map: RD_PU,
                start: 0.1,
                end: 0.8,
                reversed: true,
            },
            xlim_factor: 1.3,
            threshold_label_x: 0.85,
            threshold_label_with_score: false,
            median_label_x: 1.2,
            median_label_with_score: false,
            draw_median_line: true,
            text_y_offset: 5.0,
            show_spines: false,
            style: StyleConfig {
                title_size: 48.0,
                axis_label_size: 32.0,
                tick_label_size: 24.0,
                annotation_size: 24.0,
                spine_width: 2.0,
                grid_alpha: 0.15,
                line_alpha: 0.9,
                line_width: 2.0,
                title_pad: 40.0,
                annotation_pad: 4.0,
                bar_height: 1.0,
                bar_alpha: 0.85,
                figure_size: (9.0, 16.0),
                ..base.style.clone()
            },
            ..base
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profile.rs"]
mod tests;
