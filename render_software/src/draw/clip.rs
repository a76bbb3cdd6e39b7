use super::canvas_drawing::*;

use crate::error::*;
use crate::painters::*;
use crate::render::*;

use std::sync::*;

impl Canvas {
    ///
    /// Intersects the clip mask with the current path, leaving the path in place
    ///
    /// The path is filled (using the current winding rule) into a new mask, which is then multiplied by the
    /// existing mask, so clip regions can only ever get smaller until `reset_clip()` is called.
    ///
    pub fn clip_preserve(&mut self) -> Result<(), CanvasError> {
        let num_polylines   = self.rasterize_fill_path()?;
        let mut clip        = AlphaMask::new(self.width(), self.height());

        self.rasterizer.rasterize(&mut AlphaOverPainter::new(&mut clip));

        if let Some(existing) = &self.current_state.clip_mask {
            clip.intersect(existing)?;
        }

        debug!("Clip: {} polylines (intersecting with existing mask: {})", num_polylines, self.current_state.clip_mask.is_some());
        self.current_state.clip_mask = Some(Arc::new(clip));

        Ok(())
    }

    ///
    /// Intersects the clip mask with the current path, and then clears the path
    ///
    pub fn clip(&mut self) -> Result<(), CanvasError> {
        let result = self.clip_preserve();
        self.clear_path();

        result
    }

    ///
    /// Replaces the clip mask. The mask must be the same size as the canvas.
    ///
    pub fn set_mask(&mut self, mask: AlphaMask) -> Result<(), CanvasError> {
        let expected = (self.width(), self.height());

        if mask.size() != expected {
            return Err(CanvasError::MaskSizeMismatch { expected: expected, actual: mask.size() });
        }

        self.current_state.clip_mask = Some(Arc::new(mask));

        Ok(())
    }

    ///
    /// Creates a mask from the alpha channel of what's been drawn so far
    ///
    pub fn as_mask(&self) -> AlphaMask {
        AlphaMask::from_frame_alpha(&self.frame)
    }

    ///
    /// Inverts the clip mask, so drawing is only allowed where it was previously prevented
    ///
    /// With no clip mask, everything is allowed, so the inverted mask prevents all drawing.
    ///
    pub fn invert_mask(&mut self) {
        let mask = match self.current_state.clip_mask.take() {
            Some(mut mask) => {
                Arc::make_mut(&mut mask).invert();
                mask
            }

            None => Arc::new(AlphaMask::new(self.frame.width(), self.frame.height())),
        };

        self.current_state.clip_mask = Some(mask);
    }

    ///
    /// Removes the clip mask
    ///
    pub fn reset_clip(&mut self) {
        self.current_state.clip_mask = None;
    }

    ///
    /// The current clip mask, or None if drawing isn't clipped
    ///
    pub fn clip_mask(&self) -> Option<&AlphaMask> {
        self.current_state.clip_mask.as_deref()
    }
}
