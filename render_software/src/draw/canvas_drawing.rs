use super::drawing_state::*;

use crate::canvas::*;
use crate::error::*;
use crate::pattern::*;
use crate::pixel::*;
use crate::render::*;

use std::sync::*;

///
/// A `Canvas` draws paths, images and glyphs into an RGBA frame
///
/// Path building calls transform their points into device coordinates and append them to two path programs:
/// one that's used for filling (where subpaths are implicitly closed) and one that's used for stroking. Rendering
/// calls flatten these programs, rasterize them and paint the result into the frame through the current clip mask.
///
pub struct Canvas {
    /// The pixels that this canvas draws into
    pub (super) frame:          RgbaFrame,

    /// Rasterizer used by fill, stroke and clip operations
    pub (super) rasterizer:     ScanlineRasterizer,

    /// Path used for fill and clip operations
    pub (super) fill_path:      PathProgram,

    /// Path used for stroke operations
    pub (super) stroke_path:    PathProgram,

    /// The current drawing state
    pub (super) current_state:  DrawingState,

    /// States saved by `push_state()`
    pub (super) state_stack:    Vec<DrawingState>,

    /// The colour used by `clear()`
    pub (super) clear_color:    Color,

    /// The vertices (in user coordinates) of the polygon being built by `begin_shape()`, if there is one
    pub (super) shape_vertices: Option<Vec<Vector>>,
}

impl Canvas {
    ///
    /// Creates a new canvas with a fully transparent frame of the specified size
    ///
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_frame(RgbaFrame::new(width, height))
    }

    ///
    /// Creates a canvas that draws on top of an existing frame
    ///
    pub fn from_frame(frame: RgbaFrame) -> Self {
        let rasterizer = ScanlineRasterizer::new(frame.width(), frame.height());

        Canvas {
            frame:          frame,
            rasterizer:     rasterizer,
            fill_path:      PathProgram::new(),
            stroke_path:    PathProgram::new(),
            current_state:  DrawingState::default(),
            state_stack:    vec![],
            clear_color:    Color::WHITE,
            shape_vertices: None,
        }
    }

    #[inline] pub fn width(&self) -> usize { self.frame.width() }
    #[inline] pub fn height(&self) -> usize { self.frame.height() }

    ///
    /// The frame that this canvas is drawing into
    ///
    #[inline]
    pub fn frame(&self) -> &RgbaFrame {
        &self.frame
    }

    ///
    /// Finishes drawing and returns the frame
    ///
    pub fn into_frame(self) -> RgbaFrame {
        self.frame
    }

    ///
    /// Sets the width of stroked lines, in device pixels
    ///
    pub fn set_line_width(&mut self, width: f64) -> Result<(), CanvasError> {
        validate_line_width(width)?;
        self.current_state.style.line_width = width;

        Ok(())
    }

    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.current_state.style.line_cap = cap;
    }

    pub fn set_line_join(&mut self, join: LineJoin) {
        self.current_state.style.line_join = join;
    }

    ///
    /// Sets the rule used to decide which parts of a path are inside it when filling or clipping
    ///
    pub fn set_winding_rule(&mut self, winding_rule: WindingRule) {
        self.current_state.style.winding_rule = winding_rule;
    }

    ///
    /// Sets the dash pattern for strokes (an empty list turns dashing off)
    ///
    pub fn set_dash(&mut self, lengths: &[f64]) -> Result<(), CanvasError> {
        self.current_state.style.dash_pattern = DashPattern::new(lengths)?;

        Ok(())
    }

    ///
    /// Replaces the whole of the current style, usually with one loaded from a configuration file
    ///
    pub fn apply_style(&mut self, style: DrawingStyle) -> Result<(), CanvasError> {
        style.validate()?;
        self.current_state.style = style;

        Ok(())
    }

    #[inline]
    pub fn style(&self) -> &DrawingStyle {
        &self.current_state.style
    }

    ///
    /// Sets the current colour, and sets the fill and stroke patterns to paint with that colour
    ///
    pub fn set_color(&mut self, color: Color) {
        self.current_state.solid_color(color);
    }

    ///
    /// Sets the current colour from a hex string such as `#ff8000`
    ///
    pub fn set_hex_color(&mut self, hex: &str) -> Result<(), CanvasError> {
        let color = Color::from_hex(hex)?;
        self.set_color(color);

        Ok(())
    }

    pub fn set_fill_pattern(&mut self, pattern: Arc<dyn Pattern>) {
        self.current_state.fill_pattern = pattern;
    }

    pub fn set_stroke_pattern(&mut self, pattern: Arc<dyn Pattern>) {
        self.current_state.stroke_pattern = pattern;
    }

    #[inline] pub fn color(&self) -> Color { self.current_state.color }
    #[inline] pub fn fill_pattern(&self) -> &Arc<dyn Pattern> { &self.current_state.fill_pattern }
    #[inline] pub fn stroke_pattern(&self) -> &Arc<dyn Pattern> { &self.current_state.stroke_pattern }

    ///
    /// Sets the colour used by `clear()`
    ///
    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    ///
    /// Replaces every pixel in the frame with the clear colour (the clip mask is ignored)
    ///
    pub fn clear(&mut self) {
        self.frame.fill(U8RgbaPremultipliedPixel::from_color(self.clear_color));
    }

    ///
    /// Sets the clear colour and then clears the frame
    ///
    pub fn background(&mut self, color: Color) {
        self.set_clear_color(color);
        self.clear();
    }

    ///
    /// Replaces a single pixel with the current colour
    ///
    /// The coordinates are device pixels: neither the transform nor the clip mask apply here.
    ///
    pub fn set_pixel(&mut self, x: i64, y: i64) {
        if x < 0 || y < 0 { return; }

        let pixel = U8RgbaPremultipliedPixel::from_color(self.current_state.color);
        self.frame.set_pixel(x as usize, y as usize, pixel);
    }

    ///
    /// Saves the current drawing state (transform, clip, paint, style and path cursor)
    ///
    pub fn push_state(&mut self) {
        self.state_stack.push(self.current_state.clone());
    }

    ///
    /// Restores the drawing state saved by the most recent `push_state()`
    ///
    /// The path itself is left alone: only the cursor that says where the next point goes is restored.
    ///
    pub fn pop_state(&mut self) -> Result<(), CanvasError> {
        match self.state_stack.pop() {
            Some(state) => {
                self.current_state = state;
                Ok(())
            }

            None => {
                warn!("pop_state() called without a matching push_state()");
                Err(CanvasError::StateStackEmpty)
            }
        }
    }

    ///
    /// The number of states saved by `push_state()` that have not been popped yet
    ///
    #[inline]
    pub fn state_depth(&self) -> usize {
        self.state_stack.len()
    }

    ///
    /// The current position of the path cursor, in device coordinates
    ///
    pub fn current_point(&self) -> Option<Vector> {
        if self.current_state.has_current {
            Some(self.current_state.current)
        } else {
            None
        }
    }
}
