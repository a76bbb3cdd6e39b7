use crate::pixel::*;
use crate::render::*;

use std::ops::{Range};

///
/// Painter that accumulates coverage into an alpha mask (used for building clip regions)
///
pub struct AlphaOverPainter<'a> {
    mask: &'a mut AlphaMask,
}

impl<'a> AlphaOverPainter<'a> {
    pub fn new(mask: &'a mut AlphaMask) -> Self {
        AlphaOverPainter { mask }
    }
}

impl<'a> Painter for AlphaOverPainter<'a> {
    fn paint_span(&mut self, y: usize, x_range: Range<usize>, coverage: &[u8]) {
        let row = self.mask.row_mut(y);

        for (alpha, coverage) in row[x_range].iter_mut().zip(coverage.iter().copied()) {
            *alpha = alpha.saturating_add(mul_u8(255 - *alpha, coverage));
        }
    }
}
