use crate::pattern::*;
use crate::pixel::*;
use crate::render::*;

use std::ops::{Range};

///
/// Painter that looks up the colour of every pixel from a pattern, optionally through a mask
///
pub struct PatternPainter<'a> {
    frame:      &'a mut RgbaFrame,
    pattern:    &'a dyn Pattern,
    mask:       Option<&'a AlphaMask>,
}

impl<'a> PatternPainter<'a> {
    pub fn new(frame: &'a mut RgbaFrame, pattern: &'a dyn Pattern, mask: Option<&'a AlphaMask>) -> Self {
        PatternPainter { frame, pattern, mask }
    }
}

impl<'a> Painter for PatternPainter<'a> {
    fn paint_span(&mut self, y: usize, x_range: Range<usize>, coverage: &[u8]) {
        let pattern = self.pattern;
        let mask    = self.mask;
        let start_x = x_range.start;
        let row     = self.frame.row_mut(y);

        for (offset, (pixel, coverage)) in row[x_range].iter_mut().zip(coverage.iter().copied()).enumerate() {
            let x           = start_x + offset;
            let coverage    = match mask {
                Some(mask)  => mul_u8(coverage, mask.alpha_at(x, y)),
                None        => coverage,
            };

            if coverage == 0 { continue; }

            let color   = pattern.color_at(x as i64, y as i64);
            *pixel      = color.scale_alpha(coverage).source_over(*pixel);
        }
    }
}
