#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

/// Sequential colormap defined by evenly spaced anchor colors.
#[derive(Debug, Clone, Copy)]
pub struct Colormap {
    pub anchors: &'static [Rgb],
}

pub const RD_PU: Colormap = Colormap {
    anchors: &[
        Rgb::new(0xff, 0xf7, 0xf3),
        Rgb::new(0xfd, 0xe0, 0xdd),
        Rgb::new(0xfc, 0xc5, 0xc0),
        Rgb::new(0xfa, 0x9f, 0xb5),
        Rgb::new(0xf7, 0x68, 0xa1),
        Rgb::new(0xdd, 0x34, 0x97),
        Rgb::new(0xae, 0x01, 0x7e),
        Rgb::new(0x7a, 0x01, 0x77),
        Rgb::new(0x49, 0x00, 0x6a),
    ],
};

pub const REDS: Colormap = Colormap {
    anchors: &[
        Rgb::new(0xff, 0xf5, 0xf0),
        Rgb::new(0xfe, 0xe0, 0xd2),
        Rgb::new(0xfc, 0xbb, 0xa1),
        Rgb::new(0xfc, 0x92, 0x72),
        Rgb::new(0xfb, 0x6a, 0x4a),
        Rgb::new(0xef, 0x3b, 0x2c),
        Rgb::new(0xcb, 0x18, 0x1d),
        Rgb::new(0xa5, 0x0f, 0x15),
        Rgb::new(0x67, 0x00, 0x0d),
    ],
};

impl Colormap {
    /// Color at `t` in [0, 1]; values outside are clamped.
    pub fn sample(&self, t: f64) -> Rgb {
        let n = self.anchors.len();
        if n == 0 {
            return Rgb::BLACK;
        }
        if n == 1 || !t.is_finite() {
            return self.anchors[0];
        }
        let pos = t.clamp(0.0, 1.0) * (n - 1) as f64;
        let idx = pos.floor() as usize;
        if idx >= n - 1 {
            return self.anchors[n - 1];
        }
        self.anchors[idx].lerp(self.anchors[idx + 1], pos - idx as f64)
    }

    /// `n` colors at evenly spaced positions from `start` to `end` inclusive.
    pub fn linspace(&self, start: f64, end: f64, n: usize) -> Vec<Rgb> {
        match n {
            0 => Vec::new(),
            1 => vec![self.sample(start)],
            _ => {
                let step = (end - start) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        if i == n - 1 {
                            self.sample(end)
                        } else {
                            self.sample(start + step * i as f64)
                        }
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/color.rs"]
mod tests;
