//!
//! # flo_raster_software
//!
//! An immediate-mode drawing canvas that renders paths from `flo_raster_canvas` into an RGBA frame entirely on the CPU.
//!
//! ```
//! use flo_raster_software::*;
//! use flo_raster_software::canvas::*;
//!
//! let mut canvas = Canvas::new(64, 64);
//! canvas.background(Color::WHITE);
//!
//! canvas.set_color(Color::from_rgb(0.8, 0.2, 0.1));
//! canvas.draw_circle(32.0, 32.0, 20.0);
//! canvas.fill().unwrap();
//!
//! let frame = canvas.into_frame();
//! assert!(frame.width() == 64);
//! ```
//!
//! The pipeline is: path building calls transform points into device space and store them in a `PathProgram`;
//! filling, stroking and clipping flatten that program into polylines (dashing and outlining them for strokes),
//! the `ScanlineRasterizer` converts the polylines into anti-aliased coverage, and a `Painter` blends that coverage
//! into the frame or a clip mask.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate log;

pub use flo_raster_canvas as canvas;

mod error;

/// Edges of the shapes that are being rasterized
pub mod edges;

/// A scan plan tracks which parts of a single scanline are inside the shape that's being rasterized
pub mod scanplan;

/// A pixel models a single colour sample, stored with premultiplied alpha
pub mod pixel;

/// Frames, masks and the scanline rasterizer that converts polylines into coverage
pub mod render;

/// Patterns are the sources of colour used when filling and stroking shapes
pub mod pattern;

/// Painters write the coverage generated by the rasterizer into a frame or a mask
pub mod painters;

/// The drawing canvas
pub mod draw;

pub use error::*;
pub use draw::*;
