mod edge_intercept_direction;
mod polyline_edge;

pub use edge_intercept_direction::*;
pub use polyline_edge::*;
