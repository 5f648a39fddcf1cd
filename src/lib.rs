// Animated particle-field background for a canvas

mod utils;

pub mod animator;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod gravity_well;
pub mod particle;
pub mod surface;
pub mod theme;
pub mod web;

use log::LevelFilter;
use wasm_bindgen::prelude::*;

pub use animator::Animator;
pub use canvas::CanvasSurface;
pub use color::Color;
pub use config::{FieldConfig, Shape};
pub use error::FieldError;
pub use field::{Link, ParticleField};
pub use gravity_well::GravityWell;
pub use particle::Particle;
pub use surface::Surface;
pub use theme::{Palette, Theme};
pub use web::ParticleBackground;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logging(LevelFilter::Info);
}

#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = level
        .parse::<LevelFilter>()
        .map_err(|_| JsValue::from_str(&format!("unknown log level '{}'", level)))?;
    utils::init_logging(filter);
    Ok(())
}
