use super::edge_intercept_direction::*;

use crate::canvas::*;

use itertools::*;

use std::ops::{Range};

///
/// A single non-horizontal line from a polyline contour
///
#[derive(Clone, Debug)]
pub struct PolylineLine {
    /// The y-range covered by this line (the end point is excluded so that joined lines only intercept once)
    y_range: Range<f64>,

    /// The x position at the start of the y range
    start_x: f64,

    /// How far x moves for each unit of y
    dx_dy: f64,

    /// `DirectionOut` if the line moves down the frame, `DirectionIn` if it moves up
    direction: EdgeInterceptDirection,
}

///
/// The edges of a set of closed contours
///
/// Each polyline that is added is implicitly closed by a line back to its first point. Horizontal lines
/// never cross a scanline so they are not stored.
///
#[derive(Clone, Debug)]
pub struct PolylineEdges {
    lines:          Vec<PolylineLine>,
    bounds_min:     (f64, f64),
    bounds_max:     (f64, f64),
    sorted:         bool,
}

impl PolylineLine {
    ///
    /// Creates the line between two points, or None if the line is horizontal
    ///
    pub fn new(from: Vector, to: Vector) -> Option<PolylineLine> {
        if from.y == to.y {
            return None;
        }

        let (top, bottom, direction) = if from.y < to.y {
            (from, to, EdgeInterceptDirection::DirectionOut)
        } else {
            (to, from, EdgeInterceptDirection::DirectionIn)
        };

        Some(PolylineLine {
            y_range:    top.y..bottom.y,
            start_x:    top.x,
            dx_dy:      (bottom.x - top.x) / (bottom.y - top.y),
            direction:  direction,
        })
    }

    /// Returns the x position for a y position
    #[inline]
    pub fn x_pos(&self, y: f64) -> f64 {
        self.start_x + (y - self.y_range.start) * self.dx_dy
    }

    /// The y positions where this line crosses a scanline
    #[inline]
    pub fn y_range(&self) -> &Range<f64> {
        &self.y_range
    }

    #[inline]
    pub fn direction(&self) -> EdgeInterceptDirection {
        self.direction
    }
}

impl PolylineEdges {
    ///
    /// Creates an empty set of edges
    ///
    pub fn new() -> Self {
        PolylineEdges {
            lines:      vec![],
            bounds_min: (f64::MAX, f64::MAX),
            bounds_max: (f64::MIN, f64::MIN),
            sorted:     true,
        }
    }

    ///
    /// Removes all of the edges
    ///
    pub fn clear(&mut self) {
        self.lines.clear();
        self.bounds_min = (f64::MAX, f64::MAX);
        self.bounds_max = (f64::MIN, f64::MIN);
        self.sorted     = true;
    }

    ///
    /// Adds the lines of a closed contour
    ///
    pub fn add_polyline(&mut self, points: &[Vector]) {
        if points.len() < 2 { return; }

        let first   = points[0];
        let last    = points[points.len()-1];
        let closing = if first != last { Some((last, first)) } else { None };

        for (from, to) in points.iter().copied().tuple_windows().chain(closing) {
            self.bounds_min.0 = self.bounds_min.0.min(from.x).min(to.x);
            self.bounds_min.1 = self.bounds_min.1.min(from.y).min(to.y);
            self.bounds_max.0 = self.bounds_max.0.max(from.x).max(to.x);
            self.bounds_max.1 = self.bounds_max.1.max(from.y).max(to.y);

            if let Some(line) = PolylineLine::new(from, to) {
                self.lines.push(line);
                self.sorted = false;
            }
        }
    }

    /// True if there are no lines that can cross a scanline
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    ///
    /// Sorts the lines by the first y position they cover, which is the order the rasterizer visits them in
    ///
    pub fn prepare_to_render(&mut self) {
        if !self.sorted {
            self.lines.sort_by(|a, b| a.y_range.start.total_cmp(&b.y_range.start));
            self.sorted = true;
        }
    }

    ///
    /// The lines in these edges (sorted by their starting y position once `prepare_to_render()` has been called)
    ///
    #[inline]
    pub fn lines(&self) -> &[PolylineLine] {
        &self.lines
    }

    ///
    /// The bounding box of the polylines that have been added, or None if nothing has been added
    ///
    pub fn bounding_box(&self) -> Option<((f64, f64), (f64, f64))> {
        if self.bounds_min.0 <= self.bounds_max.0 {
            Some((self.bounds_min, self.bounds_max))
        } else {
            None
        }
    }

}

impl Default for PolylineEdges {
    fn default() -> Self {
        PolylineEdges::new()
    }
}
