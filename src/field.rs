// Fixed-size set of particles on a bounded surface, stepped once per frame and drawn
// together with the links between close pairs

use std::f64::consts::PI;

use rand::Rng;
use vecmath::{vec2_add, vec2_len, vec2_scale, vec2_sub, Vector2};

use crate::config::{FieldConfig, Shape};
use crate::error::FieldError;
use crate::gravity_well::GravityWell;
use crate::particle::Particle;
use crate::surface::Surface;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    pub opacity: f64,
}

pub struct ParticleField {
    config: FieldConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    well: Option<GravityWell>,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        ParticleField {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            well: None,
        }
    }

    pub fn from_particles(config: FieldConfig, width: f64, height: f64, particles: Vec<Particle>) -> Self {
        ParticleField {
            config,
            width,
            height,
            particles,
            well: None,
        }
    }

    pub fn seed<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width;
        self.height = height;
        let config = &self.config;
        self.particles = (0..config.particle_count)
            .map(|_| Particle::random(&mut *rng, width, height, config))
            .collect();
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.well = None;
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut FieldConfig {
        &mut self.config
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn pointer(&self) -> Option<Vector2<f64>> {
        self.well.map(|well| well.pos)
    }

    pub fn set_pointer(&mut self, pos: Option<Vector2<f64>>) {
        if !self.config.pointer_reactive {
            return;
        }
        let (width, height) = (self.width, self.height);
        let (radius, pull) = (self.config.pointer_radius, self.config.pointer_pull);
        let current = self.well;
        self.well = pos.map(|[x, y]| {
            let pos = [x.max(0.0).min(width), y.max(0.0).min(height)];
            match current {
                Some(mut well) => {
                    well.move_to(pos);
                    well
                }
                None => GravityWell::new(pos, radius, pull),
            }
        });
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
            if let Some(well) = &self.well {
                particle.move_by(well.displacement(particle.pos));
                particle.clamp(width, height);
            }
        }
    }

    fn glow_at(&self, point: Vector2<f64>) -> f64 {
        self.well.map_or(0.0, |well| well.proximity(point))
    }

    pub fn link_opacity(&self, distance: f64) -> f64 {
        let reach = self.config.link_distance;
        if distance >= reach {
            return 0.0;
        }
        (reach - distance) / reach * self.config.line_color.alpha
    }

    /// Every unordered pair closer than the link distance, each pair once.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let (from, to) = (self.particles[i].pos, self.particles[j].pos);
                let distance = vec2_len(vec2_sub(from, to));
                if distance >= self.config.link_distance {
                    continue;
                }
                let mut opacity = self.link_opacity(distance);
                if self.well.is_some() {
                    let midpoint = vec2_scale(vec2_add(from, to), 0.5);
                    let boost = self.config.pointer_link_boost * self.glow_at(midpoint);
                    if boost > 0.0 {
                        opacity = (opacity + boost).min(self.config.max_link_opacity.max(opacity));
                    }
                }
                links.push(Link {
                    a: i,
                    b: j,
                    distance,
                    opacity,
                });
            }
        }
        links
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), FieldError> {
        let line_color = self.config.line_color;
        for link in self.links() {
            let from = self.particles[link.a].pos;
            let to = self.particles[link.b].pos;
            surface.set_stroke_color(line_color.with_alpha(link.opacity));
            surface.set_line_width(self.config.line_width);
            surface.begin_path();
            surface.move_to(from[0], from[1]);
            surface.line_to(to[0], to[1]);
            surface.stroke();
        }

        for particle in &self.particles {
            let glow = 1.0 + self.config.pointer_glow * self.glow_at(particle.pos);
            let color = self.config.dot_color;
            surface.set_fill_color(color.with_alpha(color.alpha * glow));
            let size = particle.size * glow;
            match self.config.shape {
                Shape::Dot => {
                    surface.begin_path();
                    surface.arc(particle.pos[0], particle.pos[1], size, 0.0, PI * 2.0)?;
                    surface.fill();
                }
                Shape::Triangle => draw_triangle(surface, particle.pos, size, particle.rotation_deg)?,
            }
        }
        Ok(())
    }
}

// Equilateral triangle with circumradius `size`, spun around its center.
// The transform is always restored, even when a call fails halfway
fn draw_triangle<S: Surface + ?Sized>(
    surface: &mut S,
    center: Vector2<f64>,
    size: f64,
    rotation_deg: f64,
) -> Result<(), FieldError> {
    surface.save();
    let drawn = trace_triangle(surface, center, size, rotation_deg);
    surface.restore();
    drawn
}

fn trace_triangle<S: Surface + ?Sized>(
    surface: &mut S,
    center: Vector2<f64>,
    size: f64,
    rotation_deg: f64,
) -> Result<(), FieldError> {
    let half_base = size * (3.0f64).sqrt() / 2.0;
    surface.translate(center[0], center[1])?;
    surface.rotate(rotation_deg.to_radians())?;
    surface.begin_path();
    surface.move_to(0.0, -size);
    surface.line_to(-half_base, size / 2.0);
    surface.line_to(half_base, size / 2.0);
    surface.close_path();
    surface.fill();
    Ok(())
}
