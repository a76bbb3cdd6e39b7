mod rgba_frame;
mod alpha_mask;
mod painter_trait;
mod scanline_rasterizer;

pub use rgba_frame::*;
pub use alpha_mask::*;
pub use painter_trait::*;
pub use scanline_rasterizer::*;
