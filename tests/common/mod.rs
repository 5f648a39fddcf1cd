// Surface double that records every drawing call, shared by the native tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use particle_field::{Color, FieldError, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    SetSize(f64, f64),
    ClearRect(f64, f64, f64, f64),
    StrokeColor(Color),
    FillColor(Color),
    LineWidth(f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    Stroke,
    Fill,
    Arc(f64, f64, f64),
    Save,
    Translate(f64, f64),
    Rotate(f64),
    Restore,
}

pub struct RecordingSurface {
    container: Rc<Cell<(f64, f64)>>,
    size: (f64, f64),
    calls: Rc<RefCell<Vec<Call>>>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        RecordingSurface {
            container: Rc::new(Cell::new((width, height))),
            size: (0.0, 0.0),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    // Handle to the call log that outlives the surface being moved into an animator
    pub fn calls(&self) -> Rc<RefCell<Vec<Call>>> {
        self.calls.clone()
    }

    // Handle for changing the container size from the outside, like a window resize
    pub fn container(&self) -> Rc<Cell<(f64, f64)>> {
        self.container.clone()
    }

    fn record(&mut self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl Surface for RecordingSurface {
    fn container_size(&self) -> (f64, f64) {
        self.container.get()
    }

    fn size(&self) -> (f64, f64) {
        self.size
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.size = (width, height);
        self.record(Call::SetSize(width, height));
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.record(Call::ClearRect(x, y, width, height));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.record(Call::StrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.record(Call::FillColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.record(Call::LineWidth(width));
    }

    fn begin_path(&mut self) {
        self.record(Call::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.record(Call::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.record(Call::LineTo(x, y));
    }

    fn close_path(&mut self) {
        self.record(Call::ClosePath);
    }

    fn stroke(&mut self) {
        self.record(Call::Stroke);
    }

    fn fill(&mut self) {
        self.record(Call::Fill);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, _start: f64, _end: f64) -> Result<(), FieldError> {
        self.record(Call::Arc(x, y, radius));
        Ok(())
    }

    fn save(&mut self) {
        self.record(Call::Save);
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), FieldError> {
        self.record(Call::Translate(x, y));
        Ok(())
    }

    fn rotate(&mut self, angle: f64) -> Result<(), FieldError> {
        self.record(Call::Rotate(angle));
        Ok(())
    }

    fn restore(&mut self) {
        self.record(Call::Restore);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawnLine {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub alpha: f64,
}

// Every stroked segment in the log, with the stroke alpha in effect when it was drawn
pub fn drawn_lines(calls: &[Call]) -> Vec<DrawnLine> {
    let mut lines = Vec::new();
    let mut alpha = 1.0;
    let mut from = [0.0, 0.0];
    let mut to = [0.0, 0.0];
    for call in calls {
        match *call {
            Call::StrokeColor(color) => alpha = color.alpha,
            Call::MoveTo(x, y) => from = [x, y],
            Call::LineTo(x, y) => to = [x, y],
            Call::Stroke => lines.push(DrawnLine { from, to, alpha }),
            _ => {}
        }
    }
    lines
}

pub fn drawn_dots(calls: &[Call]) -> Vec<(f64, f64, f64)> {
    calls
        .iter()
        .filter_map(|call| match *call {
            Call::Arc(x, y, r) => Some((x, y, r)),
            _ => None,
        })
        .collect()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
