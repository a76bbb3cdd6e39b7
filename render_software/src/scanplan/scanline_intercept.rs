use crate::canvas::*;
use crate::edges::*;

use std::ops::{Range};

///
/// Used to keep track of whether a scanline is inside or outside a shape while its intercepts are visited from left to right
///
#[derive(Clone, Debug)]
pub struct ScanlineInterceptState {
    /// The rule that decides if a winding count is inside the shape
    winding_rule: WindingRule,

    /// The number of times an edge for this shape has been crossed
    count: isize,

    /// The x-position where the current inside span started
    start_x: f64,
}

impl ScanlineInterceptState {
    ///
    /// Creates a new intercept state, starting outside of the shape
    ///
    #[inline]
    pub fn new(winding_rule: WindingRule) -> ScanlineInterceptState {
        ScanlineInterceptState {
            winding_rule:   winding_rule,
            count:          0,
            start_x:        0.0,
        }
    }

    /// The current winding count
    #[inline]
    pub fn count(&self) -> isize {
        self.count
    }

    ///
    /// True if the current winding count is inside the shape
    ///
    #[inline]
    pub fn is_inside(&self) -> bool {
        match self.winding_rule {
            WindingRule::NonZero    => self.count != 0,
            WindingRule::EvenOdd    => self.count.rem_euclid(2) == 1,
        }
    }

    ///
    /// Updates the winding count after crossing an intercept, returning the span that finished if the edge leaves the shape
    ///
    #[inline]
    pub fn add_intercept(&mut self, direction: EdgeInterceptDirection, x_pos: f64) -> Option<Range<f64>> {
        let was_inside = self.is_inside();

        match direction {
            EdgeInterceptDirection::DirectionOut    => { self.count += 1; }
            EdgeInterceptDirection::DirectionIn     => { self.count -= 1; }
        }

        let is_inside = self.is_inside();

        if !was_inside && is_inside {
            self.start_x = x_pos;
            None
        } else if was_inside && !is_inside {
            Some(self.start_x..x_pos)
        } else {
            None
        }
    }
}
