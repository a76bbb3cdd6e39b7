use crate::error::*;
use crate::pixel::*;

///
/// A frame of u8 pixels with pre-multiplied alpha, stored in rows from the top-left corner
///
#[derive(Clone, Debug, PartialEq)]
pub struct RgbaFrame {
    width:      usize,
    height:     usize,
    pixels:     Vec<U8RgbaPremultipliedPixel>,
}

impl RgbaFrame {
    ///
    /// Creates a new frame where every pixel is transparent
    ///
    pub fn new(width: usize, height: usize) -> Self {
        RgbaFrame {
            width:  width,
            height: height,
            pixels: vec![U8RgbaPremultipliedPixel::transparent(); width*height],
        }
    }

    ///
    /// Creates a RgbaFrame from a buffer of U8RgbaPremultipliedPixel pixels (returns an error if the buffer is not big enough)
    ///
    pub fn from_pixels(width: usize, height: usize, mut pixels: Vec<U8RgbaPremultipliedPixel>) -> Result<Self, CanvasError> {
        if pixels.len() < width*height {
            Err(CanvasError::BufferTooSmall { expected: width*height, actual: pixels.len() })
        } else {
            pixels.truncate(width*height);

            Ok(RgbaFrame {
                width:  width,
                height: height,
                pixels: pixels,
            })
        }
    }

    ///
    /// Creates a RgbaFrame from a buffer of premultiplied R, G, B, A bytes
    ///
    pub fn from_bytes(width: usize, height: usize, data: &[u8]) -> Result<Self, CanvasError> {
        if data.len() < width*height*4 {
            return Err(CanvasError::BufferTooSmall { expected: width*height*4, actual: data.len() });
        }

        let pixels = data.chunks_exact(4)
            .take(width*height)
            .map(|rgba| U8RgbaPremultipliedPixel::from_components([rgba[0], rgba[1], rgba[2], rgba[3]]))
            .collect();

        Self::from_pixels(width, height, pixels)
    }

    #[inline] pub fn width(&self) -> usize { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }

    ///
    /// Reads the pixel at a particular position, or None if the position is outside of the frame
    ///
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<U8RgbaPremultipliedPixel> {
        if x < self.width && y < self.height {
            Some(self.pixels[y*self.width + x])
        } else {
            None
        }
    }

    ///
    /// Replaces the pixel at a particular position (positions outside the frame are ignored)
    ///
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: U8RgbaPremultipliedPixel) {
        if x < self.width && y < self.height {
            self.pixels[y*self.width + x] = pixel;
        }
    }

    /// The pixels in this frame
    #[inline]
    pub fn pixels(&self) -> &[U8RgbaPremultipliedPixel] {
        &self.pixels
    }

    /// The pixels in this frame, for writing
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [U8RgbaPremultipliedPixel] {
        &mut self.pixels
    }

    ///
    /// The pixels in a single row of this frame
    ///
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [U8RgbaPremultipliedPixel] {
        let start = y*self.width;
        &mut self.pixels[start..(start+self.width)]
    }

    ///
    /// Returns the frame as premultiplied R, G, B, A bytes
    ///
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.to_rgba_u8_slice()
    }

    ///
    /// Returns a copy of the frame as R, G, B, A bytes with straight alpha, which is the format most image encoders expect
    ///
    pub fn to_straight_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter()
            .flat_map(|pixel| pixel.to_straight_components())
            .collect()
    }

    ///
    /// Sets every pixel in the frame to the same value
    ///
    pub fn fill(&mut self, pixel: U8RgbaPremultipliedPixel) {
        self.pixels.iter_mut().for_each(|dst| *dst = pixel);
    }
}
