use super::pattern_trait::*;

use crate::pixel::*;
use crate::render::*;

use std::sync::*;

///
/// How a surface pattern repeats outside of the bounds of its image
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepeatOp {
    /// Tiles in both directions
    Both,

    /// Tiles horizontally only
    X,

    /// Tiles vertically only
    Y,

    /// Transparent outside of the image
    None,
}

///
/// A pattern that tiles an image across the device, with the top-left of the image at the device origin
///
#[derive(Clone)]
pub struct SurfacePattern {
    image:  Arc<RgbaFrame>,
    repeat: RepeatOp,
}

impl SurfacePattern {
    pub fn new(image: Arc<RgbaFrame>, repeat: RepeatOp) -> Self {
        SurfacePattern { image, repeat }
    }

    #[inline]
    pub fn repeat(&self) -> RepeatOp {
        self.repeat
    }
}

///
/// Maps a device coordinate onto an image coordinate, wrapping it if the pattern repeats along this axis
///
#[inline]
fn wrap(pos: i64, size: usize, repeats: bool) -> Option<usize> {
    let size = size as i64;

    if repeats {
        Some(pos.rem_euclid(size) as usize)
    } else if pos >= 0 && pos < size {
        Some(pos as usize)
    } else {
        None
    }
}

impl Pattern for SurfacePattern {
    fn color_at(&self, x: i64, y: i64) -> U8RgbaPremultipliedPixel {
        let width   = self.image.width();
        let height  = self.image.height();

        if width == 0 || height == 0 {
            return U8RgbaPremultipliedPixel::transparent();
        }

        let repeat_x = self.repeat == RepeatOp::Both || self.repeat == RepeatOp::X;
        let repeat_y = self.repeat == RepeatOp::Both || self.repeat == RepeatOp::Y;

        match (wrap(x, width, repeat_x), wrap(y, height, repeat_y)) {
            (Some(x), Some(y))  => self.image.pixel(x, y).unwrap_or_default(),
            _                   => U8RgbaPremultipliedPixel::transparent(),
        }
    }
}
