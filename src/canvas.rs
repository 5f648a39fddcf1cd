// Surface backed by an html canvas on the DOM and its 2d rendering context.
// Colors are handed to the context as css strings

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Color;
use crate::error::FieldError;
use crate::surface::Surface;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    // Grabs the 2d context from the canvas, failing if the canvas can't provide one
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, FieldError> {
        let context = canvas
            .get_context("2d")
            .map_err(|err| FieldError::Draw(describe(&err)))?
            .ok_or(FieldError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FieldError::ContextUnavailable)?;
        Ok(CanvasSurface { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn container_size(&self) -> (f64, f64) {
        (self.canvas.offset_width() as f64, self.canvas.offset_height() as f64)
    }

    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.clear_rect(x, y, width, height);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.context.set_stroke_style_str(&color.to_css());
    }

    fn set_fill_color(&mut self, color: Color) {
        self.context.set_fill_style_str(&color.to_css());
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn stroke(&mut self) {
        self.context.stroke();
    }

    fn fill(&mut self) {
        self.context.fill();
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), FieldError> {
        self.context
            .arc(x, y, radius, start, end)
            .map_err(|err| FieldError::Draw(describe(&err)))
    }

    fn save(&mut self) {
        self.context.save();
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), FieldError> {
        self.context
            .translate(x, y)
            .map_err(|err| FieldError::Draw(describe(&err)))
    }

    fn rotate(&mut self, angle: f64) -> Result<(), FieldError> {
        self.context
            .rotate(angle)
            .map_err(|err| FieldError::Draw(describe(&err)))
    }

    fn restore(&mut self) {
        self.context.restore();
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
