use crate::vector::*;

use std::fmt;

/// Tag for a command that starts a new subpath
const TAG_MOVE: i32     = 0;

/// Tag for a command that adds a straight line
const TAG_LINE: i32     = 1;

/// Tag for a command that adds a quadratic bezier curve
const TAG_QUAD: i32     = 2;

/// Tag for a command that adds a cubic bezier curve
const TAG_CUBIC: i32    = 3;

/// Number of fractional bits in a fixed point coordinate
const FIXED_SHIFT: i32  = 6;

/// Multiplier for converting to and from fixed point
const FIXED_ONE: f64    = (1 << FIXED_SHIFT) as f64;

/// Coordinates must be smaller than this in magnitude to be stored as fixed point values
pub const FIXED_POINT_LIMIT: f64 = (i32::MAX as f64) / FIXED_ONE;

///
/// A device-space point in 26.6 fixed point format (units of 1/64th of a pixel)
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct FixedPoint {
    pub x: i32,
    pub y: i32,
}

impl FixedPoint {
    ///
    /// True if a point is finite and inside the range of fixed point coordinates
    ///
    /// Converting a point outside of this range saturates its coordinates, which would distort any shape it belongs to.
    ///
    #[inline]
    pub fn can_represent(point: Vector) -> bool {
        point.is_finite() && point.x.abs() < FIXED_POINT_LIMIT && point.y.abs() < FIXED_POINT_LIMIT
    }

    ///
    /// Converts a fixed point value back to a vector
    ///
    #[inline]
    pub fn to_vector(&self) -> Vector {
        Vector::new((self.x as f64) / FIXED_ONE, (self.y as f64) / FIXED_ONE)
    }
}

impl From<Vector> for FixedPoint {
    #[inline]
    fn from(point: Vector) -> FixedPoint {
        FixedPoint {
            x: (point.x * FIXED_ONE).round() as i32,
            y: (point.y * FIXED_ONE).round() as i32,
        }
    }
}

///
/// A command decoded from a path program
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PathCommand {
    /// Starts a new subpath at the specified point
    MoveTo(FixedPoint),

    /// Straight line to a point
    LineTo(FixedPoint),

    /// Quadratic curve (control point, end point)
    QuadTo(FixedPoint, FixedPoint),

    /// Cubic curve (first control point, second control point, end point)
    CubicTo(FixedPoint, FixedPoint, FixedPoint),
}

///
/// Errors that can occur while decoding a path program
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathError {
    /// The tag at the specified offset does not describe a known command
    UnknownCommand { offset: usize, tag: i32 },

    /// The program ended part-way through the command at the specified offset
    TruncatedCommand { offset: usize },

    /// The trailing tag of the command at the specified offset did not match its leading tag
    MismatchedTrailer { offset: usize },

    /// The program does not start with a move command
    MissingMoveTo,
}

///
/// A path program is the instruction stream generated by the path building calls
///
/// Each command is stored as its tag, its coordinates (in device-space fixed point) and then its tag again,
/// so a program can be decoded and validated in a single pass.
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PathProgram {
    instructions: Vec<i32>,
}

impl PathProgram {
    ///
    /// Creates an empty path program
    ///
    #[inline]
    pub fn new() -> PathProgram {
        PathProgram { instructions: vec![] }
    }

    ///
    /// Creates a path program from a raw instruction stream (which will be validated when it's decoded)
    ///
    #[inline]
    pub fn from_raw(instructions: Vec<i32>) -> PathProgram {
        PathProgram { instructions }
    }

    ///
    /// Returns the raw instruction stream for this program
    ///
    #[inline]
    pub fn as_raw(&self) -> &[i32] {
        &self.instructions
    }

    /// True if no commands have been added to this program
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    ///
    /// Removes all of the commands from this program
    ///
    #[inline]
    pub fn clear(&mut self) {
        self.instructions.clear();
    }

    ///
    /// Starts a new subpath
    ///
    pub fn start(&mut self, point: FixedPoint) {
        self.instructions.extend([TAG_MOVE, point.x, point.y, TAG_MOVE]);
    }

    ///
    /// Adds a straight line to the current subpath
    ///
    pub fn add1(&mut self, point: FixedPoint) {
        self.instructions.extend([TAG_LINE, point.x, point.y, TAG_LINE]);
    }

    ///
    /// Adds a quadratic curve to the current subpath
    ///
    pub fn add2(&mut self, control_point: FixedPoint, point: FixedPoint) {
        self.instructions.extend([TAG_QUAD, control_point.x, control_point.y, point.x, point.y, TAG_QUAD]);
    }

    ///
    /// Adds a cubic curve to the current subpath
    ///
    pub fn add3(&mut self, cp1: FixedPoint, cp2: FixedPoint, point: FixedPoint) {
        self.instructions.extend([TAG_CUBIC, cp1.x, cp1.y, cp2.x, cp2.y, point.x, point.y, TAG_CUBIC]);
    }

    ///
    /// The end point of the last command in this program, if it's non-empty
    ///
    pub fn last_point(&self) -> Option<FixedPoint> {
        let len = self.instructions.len();
        if len < 4 {
            None
        } else {
            Some(FixedPoint { x: self.instructions[len-3], y: self.instructions[len-2] })
        }
    }

    ///
    /// Decodes the commands in this program
    ///
    /// Decoding stops after the first error
    ///
    pub fn commands(&self) -> impl '_ + Iterator<Item=Result<PathCommand, PathError>> {
        let mut offset  = 0;
        let mut failed  = false;

        std::iter::from_fn(move || {
            if failed || offset >= self.instructions.len() {
                return None;
            }

            let result = decode_command(&self.instructions, offset);
            match result {
                Ok((command, length)) => {
                    if offset == 0 && !matches!(command, PathCommand::MoveTo(_)) {
                        failed = true;
                        Some(Err(PathError::MissingMoveTo))
                    } else {
                        offset += length;
                        Some(Ok(command))
                    }
                }

                Err(err) => {
                    failed = true;
                    Some(Err(err))
                }
            }
        })
    }
}

///
/// Decodes the command at the specified offset, returning it along with the number of instructions it used
///
fn decode_command(instructions: &[i32], offset: usize) -> Result<(PathCommand, usize), PathError> {
    let tag         = instructions[offset];
    let num_points  = match tag {
        TAG_MOVE | TAG_LINE => 1,
        TAG_QUAD            => 2,
        TAG_CUBIC           => 3,
        _                   => { return Err(PathError::UnknownCommand { offset, tag }); }
    };

    let length = num_points*2 + 2;
    if offset + length > instructions.len() {
        return Err(PathError::TruncatedCommand { offset });
    }
    if instructions[offset + length - 1] != tag {
        return Err(PathError::MismatchedTrailer { offset });
    }

    let point   = |idx: usize| FixedPoint { x: instructions[offset + 1 + idx*2], y: instructions[offset + 2 + idx*2] };
    let command = match tag {
        TAG_MOVE    => PathCommand::MoveTo(point(0)),
        TAG_LINE    => PathCommand::LineTo(point(0)),
        TAG_QUAD    => PathCommand::QuadTo(point(0), point(1)),
        _           => PathCommand::CubicTo(point(0), point(1), point(2)),
    };

    Ok((command, length))
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathError::UnknownCommand { offset, tag }   => write!(f, "unknown path command {} at offset {}", tag, offset),
            PathError::TruncatedCommand { offset }      => write!(f, "path command at offset {} is truncated", offset),
            PathError::MismatchedTrailer { offset }     => write!(f, "path command at offset {} has a mismatched trailing tag", offset),
            PathError::MissingMoveTo                    => write!(f, "path program does not start with a move"),
        }
    }
}

impl std::error::Error for PathError { }
