use super::alpha_blend_trait::*;

use crate::canvas::*;

use std::slice;

///
/// Multiplies two 8-bit fractions (where 255 represents 1.0), rounding to the nearest result
///
#[inline]
pub fn mul_u8(a: u8, b: u8) -> u8 {
    let t = (a as u32) * (b as u32) + 128;
    (((t >> 8) + t) >> 8) as u8
}

///
/// An RGBA pixel as a set of u8 values
///
/// The alpha value is pre-multiplied into the RGB values. No gamma correction is applied: blending happens
/// directly on the stored values.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct U8RgbaPremultipliedPixel([u8; 4]);

impl U8RgbaPremultipliedPixel {
    ///
    /// Creates a new U8 pixel from the component bytes (which should already be premultiplied)
    ///
    #[inline]
    pub const fn from_components(components: [u8; 4]) -> Self {
        U8RgbaPremultipliedPixel(components)
    }

    ///
    /// Retrieves the RGBA values from this pixel
    ///
    #[inline]
    pub fn get_components(&self) -> [u8; 4] {
        self.0
    }

    /// A fully transparent pixel
    #[inline]
    pub const fn transparent() -> Self {
        U8RgbaPremultipliedPixel([0, 0, 0, 0])
    }

    ///
    /// Converts a colour (with straight alpha) to a premultiplied pixel
    ///
    pub fn from_color(color: Color) -> Self {
        let (r, g, b, a)    = color.to_rgba_components();
        let clamp           = |c: f32| c.max(0.0).min(1.0);
        let a               = clamp(a);
        let to_byte         = |c: f32| (clamp(c) * a * 255.0).round() as u8;

        U8RgbaPremultipliedPixel([to_byte(r), to_byte(g), to_byte(b), (a * 255.0).round() as u8])
    }

    ///
    /// Converts this pixel back to a colour with straight alpha
    ///
    pub fn to_color(&self) -> Color {
        let [r, g, b, a] = self.0;

        if a == 0 {
            Color::TRANSPARENT
        } else {
            let alpha = a as f32;
            Color::Rgba((r as f32)/alpha, (g as f32)/alpha, (b as f32)/alpha, alpha/255.0)
        }
    }

    ///
    /// Returns the components of this pixel with the alpha divided back out (as they would be stored by most image formats)
    ///
    pub fn to_straight_components(&self) -> [u8; 4] {
        let [r, g, b, a] = self.0;

        if a == 0 {
            [0, 0, 0, 0]
        } else {
            let unmultiply = |c: u8| (((c as u32) * 255 + (a as u32)/2) / (a as u32)).min(255) as u8;
            [unmultiply(r), unmultiply(g), unmultiply(b), a]
        }
    }

    /// The alpha component of this pixel
    #[inline]
    pub fn alpha(&self) -> u8 {
        self.0[3]
    }

    ///
    /// Multiplies all the components of this pixel by a coverage or mask value (255 leaves the pixel unchanged)
    ///
    #[inline]
    pub fn scale_alpha(self, alpha: u8) -> Self {
        if alpha == 255 {
            self
        } else {
            let [r, g, b, a] = self.0;
            U8RgbaPremultipliedPixel([mul_u8(r, alpha), mul_u8(g, alpha), mul_u8(b, alpha), mul_u8(a, alpha)])
        }
    }
}

impl Default for U8RgbaPremultipliedPixel {
    #[inline]
    fn default() -> Self {
        U8RgbaPremultipliedPixel::transparent()
    }
}

impl AlphaBlend for U8RgbaPremultipliedPixel {
    #[inline]
    fn alpha_blend_with_function(self, dest: Self, source_alpha: AlphaFunction, dest_alpha: AlphaFunction) -> Self {
        let src_factor  = source_alpha.factor(self.0[3]);
        let dst_factor  = dest_alpha.factor(self.0[3]);
        let blend       = |src: u8, dst: u8| ((mul_u8(src, src_factor) as u32) + (mul_u8(dst, dst_factor) as u32)).min(255) as u8;

        U8RgbaPremultipliedPixel([
            blend(self.0[0], dest.0[0]),
            blend(self.0[1], dest.0[1]),
            blend(self.0[2], dest.0[2]),
            blend(self.0[3], dest.0[3]),
        ])
    }
}

pub trait ToRgbaU8Slice {
    /// Returns the pixels as a single slice of u8 values
    fn to_rgba_u8_slice(&self) -> &[u8];

    /// Returns the pixels as a mutable single slice of u8 values
    fn to_rgba_u8_slice_mut(&mut self) -> &mut [u8];
}

impl ToRgbaU8Slice for [U8RgbaPremultipliedPixel] {
    #[inline]
    fn to_rgba_u8_slice(&self) -> &[u8] {
        // Pixels are repr(C) arrays of 4 bytes, so they have the same layout as the u8 slice
        unsafe {
            let len     = self.len();
            let data    = self.as_ptr() as *const u8;

            slice::from_raw_parts(data, len*4)
        }
    }

    #[inline]
    fn to_rgba_u8_slice_mut(&mut self) -> &mut [u8] {
        unsafe {
            let len     = self.len();
            let data    = self.as_mut_ptr() as *mut u8;

            slice::from_raw_parts_mut(data, len*4)
        }
    }
}
