use super::canvas_drawing::*;

use crate::canvas::*;
use crate::error::*;
use crate::painters::*;
use crate::pattern::*;
use crate::render::*;

impl Canvas {
    ///
    /// Maps a point from user coordinates to device coordinates, returning None if the result can't be drawn
    ///
    #[inline]
    pub (super) fn device_point(&self, x: f64, y: f64) -> Option<Vector> {
        let point = self.current_state.transform.apply(Vector::new(x, y));

        if FixedPoint::can_represent(point) {
            Some(point)
        } else {
            trace!("Skipping point ({}, {}) -> {:?}: not finite or outside the fixed point range", x, y, point);
            None
        }
    }

    ///
    /// Starts a new subpath at the specified point
    ///
    pub fn move_to(&mut self, x: f64, y: f64) {
        let point = match self.device_point(x, y) { Some(point) => point, None => return };

        if self.current_state.has_current {
            // The fill path closes the subpath that's being replaced
            self.fill_path.add1(FixedPoint::from(self.current_state.start));
        }

        let fixed = FixedPoint::from(point);
        self.stroke_path.start(fixed);
        self.fill_path.start(fixed);

        self.current_state.start        = point;
        self.current_state.current      = point;
        self.current_state.has_current  = true;
    }

    ///
    /// Adds a straight line to the path (or starts a subpath if there's no current point)
    ///
    pub fn line_to(&mut self, x: f64, y: f64) {
        if !self.current_state.has_current {
            self.move_to(x, y);
            return;
        }

        let point = match self.device_point(x, y) { Some(point) => point, None => return };
        let fixed = FixedPoint::from(point);

        self.stroke_path.add1(fixed);
        self.fill_path.add1(fixed);
        self.current_state.current = point;
    }

    ///
    /// Adds a quadratic bezier curve to the path
    ///
    pub fn quadratic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        if !self.current_state.has_current {
            self.move_to(x1, y1);
        }
        if !self.current_state.has_current { return; }

        let p0 = self.current_state.current;
        let p1 = match self.device_point(x1, y1) { Some(point) => point, None => return };
        let p2 = match self.device_point(x2, y2) { Some(point) => point, None => return };

        self.add_flattened_curve(flatten_quadratic(p0, p1, p2));
    }

    ///
    /// Adds a cubic bezier curve to the path
    ///
    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        if !self.current_state.has_current {
            self.move_to(x1, y1);
        }
        if !self.current_state.has_current { return; }

        let p0 = self.current_state.current;
        let p1 = match self.device_point(x1, y1) { Some(point) => point, None => return };
        let p2 = match self.device_point(x2, y2) { Some(point) => point, None => return };
        let p3 = match self.device_point(x3, y3) { Some(point) => point, None => return };

        self.add_flattened_curve(flatten_cubic(p0, p1, p2, p3));
    }

    ///
    /// Adds the points of a flattened curve (whose first point is the current point) to both paths
    ///
    /// Points that round to the same fixed point position as their predecessor are left out.
    ///
    fn add_flattened_curve(&mut self, points: Vec<Vector>) {
        let mut previous = FixedPoint::from(self.current_state.current);

        for point in points.into_iter().skip(1) {
            let fixed = FixedPoint::from(point);
            if fixed == previous { continue; }

            previous = fixed;
            self.stroke_path.add1(fixed);
            self.fill_path.add1(fixed);
            self.current_state.current = point;
        }
    }

    ///
    /// Adds a line back to the start of the current subpath
    ///
    pub fn close_path(&mut self) {
        if self.current_state.has_current {
            let start = FixedPoint::from(self.current_state.start);

            self.stroke_path.add1(start);
            self.fill_path.add1(start);
            self.current_state.current = self.current_state.start;
        }
    }

    ///
    /// Ends the current subpath without closing its stroke, so the next point starts a new one
    ///
    pub fn new_sub_path(&mut self) {
        if self.current_state.has_current {
            self.fill_path.add1(FixedPoint::from(self.current_state.start));
        }

        self.current_state.has_current = false;
    }

    ///
    /// Removes everything from the current path
    ///
    pub fn clear_path(&mut self) {
        self.stroke_path.clear();
        self.fill_path.clear();
        self.current_state.has_current = false;
    }

    ///
    /// Starts collecting the vertices of a polygon
    ///
    pub fn begin_shape(&mut self) {
        self.shape_vertices = Some(vec![]);
    }

    ///
    /// Adds a vertex to the polygon started by `begin_shape()` (ignored if no shape has been started)
    ///
    pub fn vertex(&mut self, x: f64, y: f64) {
        if let Some(vertices) = &mut self.shape_vertices {
            vertices.push(Vector::new(x, y));
        }
    }

    ///
    /// Adds the polygon started by `begin_shape()` to the path, optionally with a line back to the first vertex
    ///
    pub fn end_shape(&mut self, close: bool) {
        let vertices = match self.shape_vertices.take() { Some(vertices) => vertices, None => return };
        let first    = match vertices.first() { Some(first) => *first, None => return };

        self.move_to(first.x, first.y);
        for vertex in vertices.iter().skip(1) {
            self.line_to(vertex.x, vertex.y);
        }

        if close {
            self.line_to(first.x, first.y);
        }
    }

    ///
    /// Loads the fill path into the rasterizer, returning the number of polylines that were added
    ///
    /// Fills are always closed: if there's an open subpath, it's closed back to its start point here.
    ///
    pub (super) fn rasterize_fill_path(&mut self) -> Result<usize, CanvasError> {
        let mut polylines = flatten_program(&self.fill_path)?;

        if self.current_state.has_current {
            let start = FixedPoint::from(self.current_state.start).to_vector();

            if let Some(last) = polylines.last_mut() {
                last.push(start);
            }
        }

        self.rasterizer.clear();
        self.rasterizer.set_winding_rule(self.current_state.style.winding_rule);
        self.rasterizer.add_polylines(&polylines);

        Ok(polylines.len())
    }

    ///
    /// Fills the current path with the fill pattern, leaving the path in place
    ///
    pub fn fill_preserve(&mut self) -> Result<(), CanvasError> {
        let num_polylines = self.rasterize_fill_path()?;
        debug!("Fill: {} polylines ({:?})", num_polylines, self.current_state.style.winding_rule);

        paint_rasterized(&mut self.rasterizer, &mut self.frame, &*self.current_state.fill_pattern, self.current_state.clip_mask.as_deref());

        Ok(())
    }

    ///
    /// Fills the current path with the fill pattern and then clears it
    ///
    pub fn fill(&mut self) -> Result<(), CanvasError> {
        let result = self.fill_preserve();
        self.clear_path();

        result
    }
}

///
/// Paints the shape that's been loaded into a rasterizer
///
/// Solid colours are written directly when there's no clip mask, everything else samples the pattern for every pixel.
///
pub (super) fn paint_rasterized(rasterizer: &mut ScanlineRasterizer, frame: &mut RgbaFrame, pattern: &dyn Pattern, clip_mask: Option<&AlphaMask>) {
    match (pattern.solid_color(), clip_mask) {
        (Some(color), None) => {
            let mut painter = SolidColorPainter::new(frame, color);
            rasterizer.rasterize(&mut painter);
        }

        (_, clip_mask) => {
            let mut painter = PatternPainter::new(frame, pattern, clip_mask);
            rasterizer.rasterize(&mut painter);
        }
    }
}
