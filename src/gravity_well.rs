// Gravity well that follows the pointer. Keeps track of position and reach,
// and tells particles how far to move toward it and how strongly to glow

use vecmath::{vec2_len, vec2_scale, vec2_sub, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GravityWell {
    pub pos: Vector2<f64>,
    pub radius: f64,
    pub pull: f64,
}

impl GravityWell {
    pub fn new(pos: Vector2<f64>, radius: f64, pull: f64) -> Self {
        GravityWell { pos, radius, pull }
    }

    pub fn move_to(&mut self, pos: Vector2<f64>) {
        self.pos = pos;
    }

    // 1.0 at the center of the well, falling linearly to 0.0 at its radius and beyond
    pub fn proximity(&self, point: Vector2<f64>) -> f64 {
        let distance = vec2_len(vec2_sub(self.pos, point));
        if distance >= self.radius {
            0.0
        } else {
            1.0 - distance / self.radius
        }
    }

    // Displacement to add to a particle's position this frame. Applied to position
    // rather than velocity so the particle keeps its own drift
    pub fn displacement(&self, point: Vector2<f64>) -> Vector2<f64> {
        let proximity = self.proximity(point);
        if proximity <= 0.0 {
            return [0.0, 0.0];
        }
        vec2_scale(vec2_sub(self.pos, point), self.pull * proximity)
    }
}
