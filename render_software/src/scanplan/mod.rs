//!
//! # ScanPlan
//!
//! Tracks the state of a single scanline while the rasterizer walks across it. The intercepts where edges cross
//! a sample row are visited from left to right, and the winding rule turns them into the spans that are inside
//! the shape being drawn.
//!

mod scanline_intercept;

pub use scanline_intercept::*;
