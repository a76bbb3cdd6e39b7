use crate::canvas::*;
use crate::pixel::*;
use crate::render::*;

use std::ops::{Range};

///
/// Painter that blends a single colour into a frame, with no mask
///
pub struct SolidColorPainter<'a> {
    frame:  &'a mut RgbaFrame,
    color:  U8RgbaPremultipliedPixel,
}

impl<'a> SolidColorPainter<'a> {
    pub fn new(frame: &'a mut RgbaFrame, color: Color) -> Self {
        SolidColorPainter {
            frame:  frame,
            color:  U8RgbaPremultipliedPixel::from_color(color),
        }
    }
}

impl<'a> Painter for SolidColorPainter<'a> {
    fn paint_span(&mut self, y: usize, x_range: Range<usize>, coverage: &[u8]) {
        let color       = self.color;
        let is_opaque   = color.alpha() == 255;
        let row         = self.frame.row_mut(y);

        for (pixel, coverage) in row[x_range].iter_mut().zip(coverage.iter().copied()) {
            if is_opaque && coverage == 255 {
                *pixel = color;
            } else {
                *pixel = color.scale_alpha(coverage).source_over(*pixel);
            }
        }
    }
}
