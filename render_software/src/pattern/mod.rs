//!
//! Patterns supply the colours for the fill and stroke operations on a canvas
//!

mod pattern_trait;
mod solid_pattern;
mod gradient;
mod surface_pattern;

pub use pattern_trait::*;
pub use solid_pattern::*;
pub use gradient::*;
pub use surface_pattern::*;
