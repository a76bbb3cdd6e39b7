use crate::canvas::*;

use std::fmt;

///
/// Errors that can be returned by the drawing operations on a canvas
///
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasError {
    /// `pop_state()` was called more times than `push_state()`
    StateStackEmpty,

    /// A path program could not be decoded
    MalformedPath(PathError),

    /// A mask was supplied with a different size to the canvas (sizes are `(width, height)`)
    MaskSizeMismatch { expected: (usize, usize), actual: (usize, usize) },

    /// A pixel or alpha buffer was too small for the requested dimensions
    BufferTooSmall { expected: usize, actual: usize },

    /// A style value was out of range
    InvalidStyle(StyleError),

    /// A colour string could not be parsed
    InvalidColor(ColorParseError),
}

impl From<PathError> for CanvasError {
    fn from(err: PathError) -> CanvasError {
        CanvasError::MalformedPath(err)
    }
}

impl From<StyleError> for CanvasError {
    fn from(err: StyleError) -> CanvasError {
        CanvasError::InvalidStyle(err)
    }
}

impl From<ColorParseError> for CanvasError {
    fn from(err: ColorParseError) -> CanvasError {
        CanvasError::InvalidColor(err)
    }
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CanvasError::StateStackEmpty                    => write!(f, "pop_state() called with no pushed state"),
            CanvasError::MalformedPath(err)                 => write!(f, "malformed path: {}", err),
            CanvasError::MaskSizeMismatch { expected, actual } => write!(f, "mask is {}x{} but the canvas is {}x{}", actual.0, actual.1, expected.0, expected.1),
            CanvasError::BufferTooSmall { expected, actual }   => write!(f, "buffer has {} entries but {} are needed", actual, expected),
            CanvasError::InvalidStyle(err)                  => write!(f, "{}", err),
            CanvasError::InvalidColor(err)                  => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CanvasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CanvasError::MalformedPath(err) => Some(err),
            CanvasError::InvalidStyle(err)  => Some(err),
            CanvasError::InvalidColor(err)  => Some(err),
            _                               => None,
        }
    }
}
