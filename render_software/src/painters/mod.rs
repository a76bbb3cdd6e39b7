//!
//! Painters turn the coverage generated by the rasterizer into pixels
//!

mod solid_color;
mod pattern;
mod alpha_over;

pub use solid_color::*;
pub use pattern::*;
pub use alpha_over::*;
