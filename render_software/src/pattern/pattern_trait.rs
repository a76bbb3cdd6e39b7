use crate::canvas::*;
use crate::pixel::*;

///
/// A pattern is a source of colour for filling or stroking a shape
///
pub trait Pattern : Send + Sync {
    ///
    /// If this pattern is the same colour everywhere, returns that colour
    ///
    /// The canvas uses this to avoid looking up the colour of every pixel that it draws.
    ///
    fn solid_color(&self) -> Option<Color> { None }

    ///
    /// Returns the colour of the pattern at a device pixel
    ///
    fn color_at(&self, x: i64, y: i64) -> U8RgbaPremultipliedPixel;
}
