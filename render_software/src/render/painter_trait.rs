use std::ops::{Range};

///
/// A painter receives the coverage generated by the rasterizer and turns it into pixels
///
/// The rasterizer calls `paint_span` for each run of covered pixels, in order from the top of the frame
/// to the bottom. Spans are always clipped to the frame, and `coverage` has one entry for each pixel in
/// `x_range` (255 = fully covered).
///
pub trait Painter {
    fn paint_span(&mut self, y: usize, x_range: Range<usize>, coverage: &[u8]);
}
