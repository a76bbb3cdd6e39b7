use std::fmt;

///
/// A colour that can be used as a paint on the canvas
///
/// Components are in the range 0.0 to 1.0, and the alpha component is not premultiplied
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Color {
    Rgba(f32, f32, f32, f32),
}

///
/// Error returned when a colour string could not be parsed
///
#[derive(Clone, Debug, PartialEq)]
pub enum ColorParseError {
    /// The string was not 3, 6 or 8 hexadecimal digits (with an optional leading '#')
    BadLength(usize),

    /// The string contained a character that is not a hexadecimal digit
    InvalidCharacter(char),
}

impl Color {
    pub const TRANSPARENT: Color   = Color::Rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color         = Color::Rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color         = Color::Rgba(1.0, 1.0, 1.0, 1.0);

    /// An opaque grey level
    #[inline]
    pub fn from_gray(level: f32) -> Color {
        Color::Rgba(level, level, level, 1.0)
    }

    /// An opaque colour
    #[inline]
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Color {
        Color::Rgba(r, g, b, 1.0)
    }

    /// A colour with an alpha component
    #[inline]
    pub fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color::Rgba(r, g, b, a)
    }

    /// An opaque colour from 8-bit components
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::from_rgba8(r, g, b, 255)
    }

    /// A colour from 8-bit components
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color::Rgba((r as f32)/255.0, (g as f32)/255.0, (b as f32)/255.0, (a as f32)/255.0)
    }

    ///
    /// Parses a colour in the form `#rgb`, `#rrggbb` or `#rrggbbaa` (the '#' is optional)
    ///
    pub fn from_hex(hex: &str) -> Result<Color, ColorParseError> {
        let hex     = hex.trim().trim_start_matches('#');
        let digits  = hex.chars()
            .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(ColorParseError::InvalidCharacter(c)))
            .collect::<Result<Vec<_>, _>>()?;

        match digits.len() {
            3 => Ok(Color::from_rgb8(digits[0]*17, digits[1]*17, digits[2]*17)),
            6 => Ok(Color::from_rgb8(digits[0]<<4 | digits[1], digits[2]<<4 | digits[3], digits[4]<<4 | digits[5])),
            8 => Ok(Color::from_rgba8(digits[0]<<4 | digits[1], digits[2]<<4 | digits[3], digits[4]<<4 | digits[5], digits[6]<<4 | digits[7])),
            other => Err(ColorParseError::BadLength(other)),
        }
    }

    ///
    /// Returns the red, green, blue and alpha components of this colour
    ///
    #[inline]
    pub fn to_rgba_components(&self) -> (f32, f32, f32, f32) {
        match self {
            Color::Rgba(r, g, b, a) => (*r, *g, *b, *a),
        }
    }

    ///
    /// Returns the alpha component of this colour
    ///
    #[inline]
    pub fn alpha_component(&self) -> f32 {
        match self {
            Color::Rgba(_, _, _, a) => *a,
        }
    }

    ///
    /// Returns a copy of this colour with a different alpha component
    ///
    #[inline]
    pub fn with_alpha(&self, alpha: f32) -> Color {
        let (r, g, b, _) = self.to_rgba_components();
        Color::Rgba(r, g, b, alpha)
    }

    ///
    /// Returns the (non-premultiplied) components of this colour as bytes, clamping out-of-range values
    ///
    pub fn to_rgba8(&self) -> [u8; 4] {
        let (r, g, b, a) = self.to_rgba_components();
        let to_byte      = |c: f32| (c.max(0.0).min(1.0) * 255.0).round() as u8;

        [to_byte(r), to_byte(g), to_byte(b), to_byte(a)]
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ColorParseError::BadLength(len)         => write!(f, "colour strings must have 3, 6 or 8 hex digits (found {})", len),
            ColorParseError::InvalidCharacter(chr)  => write!(f, "'{}' is not a hexadecimal digit", chr),
        }
    }
}

impl std::error::Error for ColorParseError { }
