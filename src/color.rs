// Simple color struct with a fractional alpha, created from an unsigned 32 representing RRGGBBAA
// or from components, rendered as a css rgba() string for the 2d context

use serde::Deserialize;

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "Color::opaque")]
    pub alpha: f64,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Color {
        Color { r, g, b, alpha }
    }

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color {
            r,
            g,
            b,
            alpha: a as f64 / 255.0,
        }
    }

    // Same hue, different opacity. Alpha is clamped to [0, 1]
    pub fn with_alpha(self, alpha: f64) -> Color {
        Color {
            alpha: alpha.max(0.0).min(1.0),
            ..self
        }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }

    fn opaque() -> f64 {
        1.0
    }
}
