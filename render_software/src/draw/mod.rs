//!
//! The `Canvas` type and the drawing operations that it supports
//!

mod canvas_drawing;
mod drawing_state;
mod path;
mod stroke;
mod clip;
mod shapes;
mod transform;
mod image;
mod glyphs;

pub use canvas_drawing::*;
pub use stroke::*;
pub use glyphs::*;
