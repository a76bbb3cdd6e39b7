use super::pattern_trait::*;

use crate::canvas::*;
use crate::pixel::*;

///
/// A pattern that is the same colour everywhere
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolidPattern {
    color: Color,
    pixel: U8RgbaPremultipliedPixel,
}

impl SolidPattern {
    pub fn new(color: Color) -> Self {
        SolidPattern {
            color:  color,
            pixel:  U8RgbaPremultipliedPixel::from_color(color),
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Pattern for SolidPattern {
    #[inline]
    fn solid_color(&self) -> Option<Color> {
        Some(self.color)
    }

    #[inline]
    fn color_at(&self, _x: i64, _y: i64) -> U8RgbaPremultipliedPixel {
        self.pixel
    }
}
