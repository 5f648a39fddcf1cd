// Start / tick / resize / stop lifecycle of the particle field. The host calls tick once
// per display refresh and only asks for another frame while the animator is running

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use vecmath::Vector2;

use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::field::ParticleField;
use crate::surface::Surface;
use crate::theme::Palette;

pub struct Animator<S> {
    field: ParticleField,
    surface: Option<S>,
    rng: StdRng,
    frames: u64,
}

impl<S: Surface> Animator<S> {
    pub fn new(config: FieldConfig) -> Result<Self, FieldError> {
        Animator::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: FieldConfig, rng: StdRng) -> Result<Self, FieldError> {
        config.validate()?;
        Ok(Animator {
            field: ParticleField::new(config),
            surface: None,
            rng,
            frames: 0,
        })
    }

    pub fn start(&mut self, surface: Option<S>) -> bool {
        let mut surface = match surface {
            Some(surface) => surface,
            None => {
                warn!("no drawing surface, particle field not started");
                return false;
            }
        };
        if self.surface.is_some() {
            debug!("restarting particle field on a new surface");
            self.stop();
        }
        let (width, height) = surface.fit_to_container();
        self.field.seed(width, height, &mut self.rng);
        self.surface = Some(surface);
        self.frames = 0;
        debug!(
            "particle field started: {} particles on {}x{}",
            self.field.particles().len(),
            width,
            height
        );
        true
    }

    pub fn is_running(&self) -> bool {
        self.surface.is_some()
    }

    pub fn tick(&mut self) -> Result<bool, FieldError> {
        let surface = match self.surface.as_mut() {
            Some(surface) => surface,
            None => return Ok(false),
        };
        let (width, height) = self.field.size();
        surface.clear_rect(0.0, 0.0, width, height);
        self.field.step();
        self.frames += 1;
        self.field.render(surface)?;
        Ok(true)
    }

    pub fn resize(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            let (width, height) = surface.fit_to_container();
            self.field.seed(width, height, &mut self.rng);
            debug!("particle field reseeded for {}x{}", width, height);
        }
    }

    pub fn set_pointer(&mut self, pos: Option<Vector2<f64>>) {
        self.field.set_pointer(pos);
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.field.config_mut().apply_palette(palette);
    }

    /// Stop drawing and hand the surface back. Safe to call repeatedly; only
    /// the first call after a start returns the surface.
    pub fn stop(&mut self) -> Option<S> {
        let surface = self.surface.take();
        if surface.is_some() {
            self.field.clear();
            debug!("particle field stopped after {} frames", self.frames);
        }
        surface
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }
}
