use super::canvas_drawing::*;
use super::image::*;

use crate::canvas::*;
use crate::pixel::*;
use crate::render::*;

use std::sync::*;

///
/// The pixels that make up a glyph
///
#[derive(Clone, Debug)]
pub enum GlyphBitmap {
    /// Coverage values, drawn using the current colour of the canvas
    Alpha(Arc<AlphaMask>),

    /// A coloured glyph (such as an emoji), drawn as it is
    Color(Arc<RgbaFrame>),
}

///
/// A glyph that has already been rendered and measured by a font library
///
#[derive(Clone, Debug)]
pub struct Glyph {
    /// Position of the top-left corner of the bitmap relative to the pen position
    pub offset: Vector,

    /// The bitmap for this glyph
    pub bitmap: GlyphBitmap,

    /// Distance to move the pen along after drawing this glyph
    pub advance: f64,
}

impl GlyphBitmap {
    ///
    /// The width and height of this bitmap in pixels
    ///
    pub fn size(&self) -> (usize, usize) {
        match self {
            GlyphBitmap::Alpha(mask)    => mask.size(),
            GlyphBitmap::Color(image)   => (image.width(), image.height()),
        }
    }
}

impl Glyph {
    pub fn new(offset: Vector, bitmap: GlyphBitmap, advance: f64) -> Self {
        Glyph { offset, bitmap, advance }
    }
}

///
/// The total advance of a run of glyphs
///
pub fn measure_glyphs(glyphs: &[Glyph]) -> f64 {
    glyphs.iter().map(|glyph| glyph.advance).sum()
}

impl Canvas {
    ///
    /// Draws a run of glyphs from left to right, starting with the pen at `(x, y)`
    ///
    pub fn draw_glyphs(&mut self, glyphs: &[Glyph], x: f64, y: f64) {
        self.draw_glyphs_anchored(glyphs, x, y, 0.0, 0.0, 0.0);
    }

    ///
    /// Draws a run of glyphs relative to an anchor point
    ///
    /// `ax` is a fraction of the total advance of the glyphs and `ay` is a fraction of the line height: `(0.5, 0.5)`
    /// centres the text on the point.
    ///
    pub fn draw_glyphs_anchored(&mut self, glyphs: &[Glyph], x: f64, y: f64, ax: f64, ay: f64, line_height: f64) {
        let mut pen_x   = x - ax * measure_glyphs(glyphs);
        let pen_y       = y + ay * line_height;
        let tint        = U8RgbaPremultipliedPixel::from_color(self.current_state.color);

        for glyph in glyphs.iter() {
            let transform   = self.current_state.transform.translated(pen_x + glyph.offset.x, pen_y + glyph.offset.y);
            let clip_mask   = self.current_state.clip_mask.as_deref();

            match &glyph.bitmap {
                GlyphBitmap::Alpha(mask) => {
                    composite_image(&mut self.frame, clip_mask, &transform, mask.width(), mask.height(),
                        |tx, ty| tint.scale_alpha(mask.alpha_at(tx, ty)));
                }

                GlyphBitmap::Color(image) => {
                    composite_image(&mut self.frame, clip_mask, &transform, image.width(), image.height(),
                        |tx, ty| image.pixel(tx, ty).unwrap_or_default());
                }
            }

            pen_x += glyph.advance;
        }
    }
}
