// Drawing target the field renders onto: the 2d canvas calls the animator needs,
// plus the rendered size of the element hosting it

use crate::color::Color;
use crate::error::FieldError;

pub trait Surface {
    /// Rendered width and height of the element hosting the surface.
    fn container_size(&self) -> (f64, f64);

    fn size(&self) -> (f64, f64);

    fn set_size(&mut self, width: f64, height: f64);

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn set_stroke_color(&mut self, color: Color);

    fn set_fill_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f64);

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn close_path(&mut self);

    fn stroke(&mut self);

    fn fill(&mut self);

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), FieldError>;

    fn save(&mut self);

    fn translate(&mut self, x: f64, y: f64) -> Result<(), FieldError>;

    /// Angle in radians.
    fn rotate(&mut self, angle: f64) -> Result<(), FieldError>;

    fn restore(&mut self);

    fn fit_to_container(&mut self) -> (f64, f64) {
        let (width, height) = self.container_size();
        self.set_size(width, height);
        self.size()
    }
}
