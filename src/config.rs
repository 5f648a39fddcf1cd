// Animator configuration, read from a plain JS object with optional camelCase keys

use serde::Deserialize;

use crate::color::Color;
use crate::error::FieldError;
use crate::theme::Palette;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Dot,
    Triangle,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    pub particle_count: usize,
    pub link_distance: f64,
    pub speed_range: f64,
    pub size_range: (f64, f64),
    pub shape: Shape,
    pub rotation_speed_range: f64,
    pub dot_color: Color,
    /// Alpha of this color is the base link opacity.
    pub line_color: Color,
    pub line_width: f64,
    pub pointer_reactive: bool,
    pub pointer_radius: f64,
    pub pointer_pull: f64,
    pub pointer_link_boost: f64,
    pub pointer_glow: f64,
    pub max_link_opacity: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: 80,
            link_distance: 120.0,
            speed_range: 0.25,
            size_range: (1.0, 3.0),
            shape: Shape::Dot,
            rotation_speed_range: 1.0,
            dot_color: Color::rgba(59, 130, 246, 0.6),
            line_color: Color::rgba(59, 130, 246, 0.3),
            line_width: 1.0,
            pointer_reactive: false,
            pointer_radius: 200.0,
            pointer_pull: 0.03,
            pointer_link_boost: 0.4,
            pointer_glow: 0.5,
            max_link_opacity: 0.8,
        }
    }
}

impl FieldConfig {
    pub fn triangles() -> Self {
        FieldConfig {
            particle_count: 60,
            link_distance: 150.0,
            speed_range: 0.5,
            size_range: (4.0, 12.0),
            shape: Shape::Triangle,
            pointer_reactive: true,
            ..FieldConfig::default()
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.apply_palette(palette);
        self
    }

    pub fn apply_palette(&mut self, palette: Palette) {
        self.dot_color = palette.dots;
        self.line_color = palette.lines;
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if self.particle_count == 0 {
            return Err(invalid("particleCount must be positive"));
        }
        if !(self.link_distance.is_finite() && self.link_distance > 0.0) {
            return Err(invalid("linkDistance must be a positive number"));
        }
        if !(self.speed_range.is_finite() && self.speed_range >= 0.0) {
            return Err(invalid("speedRange must be a non-negative number"));
        }
        let (min_size, max_size) = self.size_range;
        if !(min_size.is_finite() && max_size.is_finite() && 0.0 <= min_size && min_size <= max_size)
        {
            return Err(invalid("sizeRange must be [min, max] with 0 <= min <= max"));
        }
        if !self.rotation_speed_range.is_finite() || !self.line_width.is_finite() {
            return Err(invalid("rotationSpeedRange and lineWidth must be finite"));
        }
        if self.pointer_reactive && !(self.pointer_radius.is_finite() && self.pointer_radius > 0.0) {
            return Err(invalid("pointerRadius must be a positive number"));
        }
        if !(0.0..=1.0).contains(&self.pointer_pull) {
            return Err(invalid("pointerPull must be within [0, 1]"));
        }
        if !(self.pointer_glow.is_finite() && self.pointer_glow >= 0.0) {
            return Err(invalid("pointerGlow must be a non-negative number"));
        }
        if !(self.pointer_link_boost.is_finite() && self.pointer_link_boost >= 0.0) {
            return Err(invalid("pointerLinkBoost must be a non-negative number"));
        }
        if !(0.0..=1.0).contains(&self.max_link_opacity) {
            return Err(invalid("maxLinkOpacity must be within [0, 1]"));
        }
        if !(self.line_width.is_finite() && self.line_width >= 0.0) {
            return Err(invalid("lineWidth must be a non-negative number"));
        }
        if !(0.0..=1.0).contains(&self.dot_color.alpha) || !(0.0..=1.0).contains(&self.line_color.alpha) {
            return Err(invalid("color alpha must be within [0, 1]"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> FieldError {
    FieldError::InvalidConfig(msg.to_owned())
}
