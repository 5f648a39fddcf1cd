// Errors surfaced by the particle field

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("invalid field configuration: {0}")]
    InvalidConfig(String),

    #[error("canvas has no 2d rendering context")]
    ContextUnavailable,

    #[error("drawing call failed: {0}")]
    Draw(String),

    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
}

impl From<FieldError> for JsValue {
    fn from(err: FieldError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
