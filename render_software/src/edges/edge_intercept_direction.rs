///
/// Describes the direction of an edge where it crosses a scanline
///
/// * `DirectionOut` is an edge that moves down the frame (increasing the winding count).
/// * `DirectionIn` is an edge that moves up the frame (decreasing the winding count).
///
/// Which intercepts start or finish a span is decided by the winding rule: non-zero fills wherever the
/// count is not 0, and even-odd fills wherever it is odd.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeInterceptDirection {
    /// Adds 1 to the winding count when passing the edge left-to-right
    DirectionOut,

    /// Subtracts 1 from the winding count when passing the edge left-to-right
    DirectionIn,
}
