//!
//! Styles that control how paths are stroked and filled
//!
//! These can be serialized, so a set of canvas styles can be kept in a configuration file and applied
//! to a canvas all at once.
//!

use std::convert::{TryFrom};
use std::fmt;

///
/// How to cap the ends of stroked lines
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LineCap {
    Round,
    Butt,
    Square,
}

///
/// How to join the segments of stroked lines
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LineJoin {
    Round,
    Bevel,
}

///
/// How a path should determine if a point is inside or outside
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum WindingRule {
    /// A point is inside if the contours cross it a different number of times in each direction
    NonZero,

    /// A point is inside if the contours cross it an odd number of times
    EvenOdd,
}

impl Default for LineCap {
    fn default() -> Self { LineCap::Round }
}

impl Default for LineJoin {
    fn default() -> Self { LineJoin::Round }
}

impl Default for WindingRule {
    fn default() -> Self { WindingRule::NonZero }
}

///
/// Errors caused by invalid style values
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleError {
    /// Line widths must be positive and finite
    InvalidLineWidth(f64),

    /// Dash lengths must be finite and no shorter than `MIN_DASH_LENGTH`
    InvalidDashLength(f64),
}

///
/// A dash pattern: alternating lengths of 'drawn' and 'skipped' line, repeated along the path
///
/// A single length is treated as equal dash and gap lengths. An empty pattern draws solid lines.
///
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct DashPattern {
    lengths: Vec<f64>,
}

/// The shortest dash or gap allowed in a dash pattern (one fixed point step, 1/64th of a pixel)
pub const MIN_DASH_LENGTH: f64 = 1.0 / 64.0;

impl DashPattern {
    ///
    /// Creates a dash pattern from a list of lengths
    ///
    /// Every length must be finite and at least `MIN_DASH_LENGTH`: shorter dashes are smaller than the precision
    /// of the device coordinates they are cut from.
    ///
    pub fn new(lengths: &[f64]) -> Result<DashPattern, StyleError> {
        if let Some(bad_length) = lengths.iter().copied().find(|length| !(length.is_finite() && *length >= MIN_DASH_LENGTH)) {
            return Err(StyleError::InvalidDashLength(bad_length));
        }

        let lengths = if lengths.len() == 1 {
            vec![lengths[0], lengths[0]]
        } else {
            lengths.to_vec()
        };

        Ok(DashPattern { lengths })
    }

    ///
    /// A pattern that draws solid lines
    ///
    #[inline]
    pub fn none() -> DashPattern {
        DashPattern { lengths: vec![] }
    }

    /// True if this pattern draws solid lines
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// The normalized lengths in this pattern
    #[inline]
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }
}

impl TryFrom<Vec<f64>> for DashPattern {
    type Error = StyleError;

    fn try_from(lengths: Vec<f64>) -> Result<DashPattern, StyleError> {
        DashPattern::new(&lengths)
    }
}

impl From<DashPattern> for Vec<f64> {
    fn from(pattern: DashPattern) -> Vec<f64> {
        pattern.lengths
    }
}

///
/// The style settings that apply to fill and stroke operations
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingStyle {
    /// Width of stroked lines, in device pixels
    pub line_width: f64,

    /// Cap to use at the end of open subpaths
    pub line_cap: LineCap,

    /// Join to use between line segments
    pub line_join: LineJoin,

    /// Winding rule used when filling paths (strokes always use the non-zero rule)
    pub winding_rule: WindingRule,

    /// Dash pattern for strokes
    pub dash_pattern: DashPattern,
}

impl Default for DrawingStyle {
    fn default() -> Self {
        DrawingStyle {
            line_width:     1.0,
            line_cap:       LineCap::default(),
            line_join:      LineJoin::default(),
            winding_rule:   WindingRule::default(),
            dash_pattern:   DashPattern::none(),
        }
    }
}

impl DrawingStyle {
    ///
    /// Checks that the values in this style are usable
    ///
    /// Dash patterns are validated when they're created, so only the line width needs checking here
    ///
    pub fn validate(&self) -> Result<(), StyleError> {
        validate_line_width(self.line_width)
    }
}

///
/// Checks that a line width is positive and finite
///
#[inline]
pub fn validate_line_width(width: f64) -> Result<(), StyleError> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(StyleError::InvalidLineWidth(width))
    }
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StyleError::InvalidLineWidth(width)     => write!(f, "line width must be positive (found {})", width),
            StyleError::InvalidDashLength(length)   => write!(f, "dash lengths must be at least {} (found {})", MIN_DASH_LENGTH, length),
        }
    }
}

impl std::error::Error for StyleError { }
