use super::rgba_frame::*;

use crate::error::*;
use crate::pixel::*;

///
/// An 8-bit coverage buffer, used for clip masks and glyph bitmaps
///
/// A value of 255 lets everything through and 0 blocks everything.
///
#[derive(Clone, Debug, PartialEq)]
pub struct AlphaMask {
    width:  usize,
    height: usize,
    alpha:  Vec<u8>,
}

impl AlphaMask {
    ///
    /// Creates a mask that blocks everything
    ///
    pub fn new(width: usize, height: usize) -> Self {
        AlphaMask {
            width:  width,
            height: height,
            alpha:  vec![0; width*height],
        }
    }

    ///
    /// Creates a mask that lets everything through
    ///
    pub fn opaque(width: usize, height: usize) -> Self {
        AlphaMask {
            width:  width,
            height: height,
            alpha:  vec![255; width*height],
        }
    }

    ///
    /// Creates a mask from a buffer of alpha values, stored in rows from the top-left corner
    ///
    pub fn from_alpha(width: usize, height: usize, mut alpha: Vec<u8>) -> Result<Self, CanvasError> {
        if alpha.len() < width*height {
            return Err(CanvasError::BufferTooSmall { expected: width*height, actual: alpha.len() });
        }

        alpha.truncate(width*height);
        Ok(AlphaMask { width, height, alpha })
    }

    ///
    /// Creates a mask from the alpha channel of a frame
    ///
    pub fn from_frame_alpha(frame: &RgbaFrame) -> Self {
        AlphaMask {
            width:  frame.width(),
            height: frame.height(),
            alpha:  frame.pixels().iter().map(|pixel| pixel.alpha()).collect(),
        }
    }

    #[inline] pub fn width(&self) -> usize { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }
    #[inline] pub fn size(&self) -> (usize, usize) { (self.width, self.height) }

    ///
    /// The alpha value at a point (points outside of the mask are fully masked out)
    ///
    #[inline]
    pub fn alpha_at(&self, x: usize, y: usize) -> u8 {
        if x < self.width && y < self.height {
            self.alpha[y*self.width + x]
        } else {
            0
        }
    }

    /// All of the alpha values in this mask
    #[inline]
    pub fn alpha(&self) -> &[u8] {
        &self.alpha
    }

    ///
    /// The alpha values for a single row of the mask
    ///
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y*self.width;
        &self.alpha[start..(start+self.width)]
    }

    ///
    /// The alpha values for a single row of the mask, for writing
    ///
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y*self.width;
        &mut self.alpha[start..(start+self.width)]
    }

    ///
    /// Multiplies this mask by another one, so only the areas that both masks let through remain
    ///
    pub fn intersect(&mut self, other: &AlphaMask) -> Result<(), CanvasError> {
        if other.size() != self.size() {
            return Err(CanvasError::MaskSizeMismatch { expected: self.size(), actual: other.size() });
        }

        for (alpha, other_alpha) in self.alpha.iter_mut().zip(other.alpha.iter()) {
            *alpha = mul_u8(*alpha, *other_alpha);
        }

        Ok(())
    }

    ///
    /// Swaps the masked and unmasked areas
    ///
    pub fn invert(&mut self) {
        self.alpha.iter_mut().for_each(|alpha| *alpha = 255 - *alpha);
    }
}
