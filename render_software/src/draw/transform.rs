use super::canvas_drawing::*;

use crate::canvas::*;

impl Canvas {
    ///
    /// Applies a transform to the current transform (in the current coordinate system, like the other transform calls)
    ///
    pub fn transform(&mut self, transform: Transform2D) {
        self.current_state.transform = transform.multiply(&self.current_state.transform);
    }

    ///
    /// Replaces the current transform
    ///
    pub fn set_transform(&mut self, transform: Transform2D) {
        self.current_state.transform = transform;
    }

    #[inline]
    pub fn current_transform(&self) -> Transform2D {
        self.current_state.transform
    }

    ///
    /// Resets the transform so that user coordinates are device pixels
    ///
    pub fn identity(&mut self) {
        self.current_state.transform = Transform2D::identity();
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.current_state.transform = self.current_state.transform.translated(dx, dy);
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.current_state.transform = self.current_state.transform.scaled(sx, sy);
    }

    ///
    /// Scales about a point (which stays where it is)
    ///
    pub fn scale_about(&mut self, sx: f64, sy: f64, x: f64, y: f64) {
        self.translate(x, y);
        self.scale(sx, sy);
        self.translate(-x, -y);
    }

    ///
    /// Rotates by an angle in radians
    ///
    pub fn rotate(&mut self, radians: f64) {
        self.current_state.transform = self.current_state.transform.rotated(radians);
    }

    pub fn rotate_about(&mut self, radians: f64, x: f64, y: f64) {
        self.translate(x, y);
        self.rotate(radians);
        self.translate(-x, -y);
    }

    pub fn shear(&mut self, shx: f64, shy: f64) {
        self.current_state.transform = self.current_state.transform.sheared(shx, shy);
    }

    pub fn shear_about(&mut self, shx: f64, shy: f64, x: f64, y: f64) {
        self.translate(x, y);
        self.shear(shx, shy);
        self.translate(-x, -y);
    }

    ///
    /// Flips the y axis so that 0 is at the bottom of the frame and y values increase upwards
    ///
    pub fn invert_y(&mut self) {
        let height = self.height() as f64;

        self.translate(0.0, height);
        self.scale(1.0, -1.0);
    }

    ///
    /// Maps a point from user coordinates to device coordinates
    ///
    #[inline]
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        self.current_state.transform.transform_point(x, y)
    }
}
