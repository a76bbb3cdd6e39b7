use super::pattern_trait::*;

use crate::canvas::*;
use crate::pixel::*;

///
/// The colour stops for a gradient
///
/// Stops are kept in order of their offset. Colours are interpolated in premultiplied space, and offsets outside
/// the range of the stops take the colour of the nearest stop.
///
#[derive(Clone, Debug, PartialEq, Default)]
pub struct GradientStops {
    stops: Vec<(f64, U8RgbaPremultipliedPixel)>,
}

///
/// A gradient that changes colour along a line
///
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    start:  Vector,
    end:    Vector,
    stops:  GradientStops,
}

///
/// A gradient that changes colour between two circles
///
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    start_center:   Vector,
    start_radius:   f64,
    delta_center:   Vector,
    delta_radius:   f64,

    /// The 'a' coefficient of the quadratic that's solved to find the offset of a point
    a:              f64,

    stops:          GradientStops,
}

impl GradientStops {
    ///
    /// Creates an empty set of stops (which generates transparent pixels)
    ///
    pub fn new() -> Self {
        GradientStops { stops: vec![] }
    }

    ///
    /// Adds a colour stop at a particular offset
    ///
    /// Stops added at the same offset as an existing stop are placed after it, which produces a hard transition.
    ///
    pub fn add_stop(&mut self, offset: f64, color: Color) {
        let pixel = U8RgbaPremultipliedPixel::from_color(color);
        let index = self.stops.iter().position(|(existing, _)| *existing > offset).unwrap_or(self.stops.len());

        self.stops.insert(index, (offset, pixel));
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    ///
    /// The number of stops in this gradient
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    ///
    /// Returns the pixel at an offset along the gradient
    ///
    pub fn pixel_at(&self, offset: f64) -> U8RgbaPremultipliedPixel {
        let (first_offset, first_pixel) = match self.stops.first() {
            Some(first) => *first,
            None        => { return U8RgbaPremultipliedPixel::transparent(); }
        };

        if !(offset > first_offset) {
            return first_pixel;
        }

        for (from, to) in self.stops.iter().zip(self.stops.iter().skip(1)) {
            if offset < to.0 {
                let t = (offset - from.0) / (to.0 - from.0);
                return lerp_pixel(from.1, to.1, t);
            }
        }

        self.stops[self.stops.len()-1].1
    }
}

///
/// Linear interpolation between two pixels
///
fn lerp_pixel(from: U8RgbaPremultipliedPixel, to: U8RgbaPremultipliedPixel, t: f64) -> U8RgbaPremultipliedPixel {
    let from    = from.get_components();
    let to      = to.get_components();
    let lerp    = |idx: usize| ((from[idx] as f64) + ((to[idx] as f64) - (from[idx] as f64)) * t).round().max(0.0).min(255.0) as u8;

    U8RgbaPremultipliedPixel::from_components([lerp(0), lerp(1), lerp(2), lerp(3)])
}

impl LinearGradient {
    ///
    /// Creates a linear gradient running from `(x0, y0)` to `(x1, y1)` (in device pixels)
    ///
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        LinearGradient {
            start:  Vector::new(x0, y0),
            end:    Vector::new(x1, y1),
            stops:  GradientStops::new(),
        }
    }

    ///
    /// Adds a colour stop (0.0 is the start of the line and 1.0 is the end)
    ///
    pub fn add_color_stop(&mut self, offset: f64, color: Color) {
        self.stops.add_stop(offset, color);
    }

    ///
    /// Returns this gradient with an extra colour stop
    ///
    pub fn with_color_stop(mut self, offset: f64, color: Color) -> Self {
        self.add_color_stop(offset, color);
        self
    }

    ///
    /// The position of a point projected onto the gradient line
    ///
    pub fn offset_at(&self, point: Vector) -> f64 {
        let line    = self.end - self.start;
        let len_sq  = line.dot(line);

        if len_sq == 0.0 {
            0.0
        } else {
            (point - self.start).dot(line) / len_sq
        }
    }
}

impl Pattern for LinearGradient {
    fn color_at(&self, x: i64, y: i64) -> U8RgbaPremultipliedPixel {
        let offset = self.offset_at(Vector::new((x as f64) + 0.5, (y as f64) + 0.5));
        self.stops.pixel_at(offset)
    }
}

impl RadialGradient {
    ///
    /// Creates a gradient that runs from the circle at `(x0, y0)` with radius `r0` to the circle at `(x1, y1)` with radius `r1`
    ///
    pub fn new(x0: f64, y0: f64, r0: f64, x1: f64, y1: f64, r1: f64) -> Self {
        let delta_center = Vector::new(x1 - x0, y1 - y0);
        let delta_radius = r1 - r0;

        RadialGradient {
            start_center:   Vector::new(x0, y0),
            start_radius:   r0,
            delta_center:   delta_center,
            delta_radius:   delta_radius,
            a:              delta_center.dot(delta_center) - delta_radius*delta_radius,
            stops:          GradientStops::new(),
        }
    }

    ///
    /// Adds a colour stop (0.0 is the start circle and 1.0 is the end circle)
    ///
    pub fn add_color_stop(&mut self, offset: f64, color: Color) {
        self.stops.add_stop(offset, color);
    }

    ///
    /// Returns this gradient with an extra colour stop
    ///
    pub fn with_color_stop(mut self, offset: f64, color: Color) -> Self {
        self.add_color_stop(offset, color);
        self
    }

    ///
    /// Finds the offset of the largest circle that passes through a point, or None if no circle with a
    /// non-negative radius touches the point
    ///
    pub fn offset_at(&self, point: Vector) -> Option<f64> {
        let offset      = point - self.start_center;
        let min_radius  = -self.start_radius;
        let b           = offset.dot(self.delta_center) + self.start_radius*self.delta_radius;
        let c           = offset.dot(offset) - self.start_radius*self.start_radius;

        if self.a == 0.0 {
            if b == 0.0 { return None; }

            let t = 0.5 * c / b;
            if t*self.delta_radius >= min_radius { Some(t) } else { None }
        } else {
            let discriminant = b*b - self.a*c;
            if discriminant < 0.0 { return None; }

            let root    = discriminant.sqrt();
            let t1      = (b + root) / self.a;
            let t2      = (b - root) / self.a;
            let (t1, t2) = if t1 >= t2 { (t1, t2) } else { (t2, t1) };

            if t1*self.delta_radius >= min_radius {
                Some(t1)
            } else if t2*self.delta_radius >= min_radius {
                Some(t2)
            } else {
                None
            }
        }
    }
}

impl Pattern for RadialGradient {
    fn color_at(&self, x: i64, y: i64) -> U8RgbaPremultipliedPixel {
        match self.offset_at(Vector::new((x as f64) + 0.5, (y as f64) + 0.5)) {
            Some(offset)    => self.stops.pixel_at(offset),
            None            => U8RgbaPremultipliedPixel::transparent(),
        }
    }
}
