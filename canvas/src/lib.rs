//!
//! # flo_raster_canvas
//!
//! `flo_raster_canvas` provides the device-independent half of an immediate-mode raster canvas: the geometry
//! that turns drawing calls into lists of points, before anything is converted into pixels.
//!
//! * `Vector` and `Transform2D` describe points and the affine transforms that are applied to them.
//! * `PathProgram` is the compact instruction stream generated by path building calls. Points are stored
//!   in device space as 26.6 fixed point values.
//! * `flatten_program()` decodes a path program into polylines, flattening any bezier curves it contains,
//!   and `dash_polylines()` cuts polylines up according to a `DashPattern`.
//! * `DrawingStyle` and the related enums describe how lines are stroked and shapes are filled. These
//!   can be serialized, which makes it easy to store styles in configuration files.
//!
//! The `flo_curves` library is re-exported as `curves`: the software renderer uses it to generate stroke outlines.
//!
//! `flo_raster_software` uses this library to rasterize paths into a pixel buffer.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod path;
mod color;
mod style;
mod vector;
mod bezier;
mod transform2d;
mod conversion;

pub use self::path::*;
pub use self::color::*;
pub use self::style::*;
pub use self::vector::*;
pub use self::bezier::*;
pub use self::transform2d::*;
pub use self::conversion::*;

pub use flo_curves as curves;
pub use flo_curves::geo::{Coordinate2D, Coord2};
