// Simple particle struct to keep track of individual position, velocity, size and spin

use rand::Rng;

use crate::config::FieldConfig;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub size: f64,
    pub rotation_deg: f64,
    pub rotation_speed: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, size: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            size,
            rotation_deg: 0.0,
            rotation_speed: 0.0,
        }
    }

    // Uniformly random position inside the surface, velocity, size and spin inside the configured ranges
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle {
        let (min_size, max_size) = config.size_range;
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * config.speed_range;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * config.speed_range;
        let size = rng.gen::<f64>() * (max_size - min_size) + min_size;
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            size,
            rotation_deg: rng.gen::<f64>() * 360.0,
            rotation_speed: (rng.gen::<f64>() - 0.5) * 2.0 * config.rotation_speed_range,
        }
    }

    // Drift by velocity, bounce off the edges, then clamp in case the step overshot
    pub fn advance(&mut self, width: f64, height: f64) {
        let bounds = [width, height];
        for axis in 0..2 {
            self.pos[axis] += self.vel[axis];
            if self.pos[axis] <= 0.0 || self.pos[axis] >= bounds[axis] {
                self.vel[axis] *= -1.0;
            }
        }
        self.clamp(width, height);
        self.rotation_deg = (self.rotation_deg + self.rotation_speed) % 360.0;
    }

    pub fn clamp(&mut self, width: f64, height: f64) {
        self.pos[0] = self.pos[0].max(0.0).min(width);
        self.pos[1] = self.pos[1].max(0.0).min(height);
    }

    pub fn move_by(&mut self, delta: [f64; 2]) {
        self.pos[0] += delta[0];
        self.pos[1] += delta[1];
    }
}
