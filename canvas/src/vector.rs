use std::ops::*;

///
/// A 2D point or displacement
///
/// Vectors are plain values: operators return new vectors, and the `*Assign` operators provide the
/// in-place variants. Division by a zero component produces an infinity or NaN which is propagated
/// rather than trapped.
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    ///
    /// Creates a new vector
    ///
    #[inline]
    pub const fn new(x: f64, y: f64) -> Vector {
        Vector { x, y }
    }

    ///
    /// The vector (0, 0)
    ///
    #[inline]
    pub const fn origin() -> Vector {
        Vector { x: 0.0, y: 0.0 }
    }

    ///
    /// The euclidean length of this vector
    ///
    #[inline]
    pub fn length(&self) -> f64 {
        (self.x*self.x + self.y*self.y).sqrt()
    }

    ///
    /// The angle of this vector in radians, as measured by `atan2(y, x)`
    ///
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    ///
    /// Changes the angle of this vector, preserving its length
    ///
    pub fn set_angle(&mut self, angle: f64) {
        let length  = self.length();
        self.x      = angle.cos() * length;
        self.y      = angle.sin() * length;
    }

    ///
    /// Changes the length of this vector, preserving its angle
    ///
    pub fn set_length(&mut self, length: f64) {
        let angle   = self.angle();
        self.x      = angle.cos() * length;
        self.y      = angle.sin() * length;
    }

    /// Dot product of two vectors
    #[inline]
    pub fn dot(&self, other: Vector) -> f64 {
        self.x*other.x + self.y*other.y
    }

    /// Z component of the cross product of two vectors
    #[inline]
    pub fn cross(&self, other: Vector) -> f64 {
        self.x*other.y - self.y*other.x
    }

    ///
    /// The distance between two points
    ///
    #[inline]
    pub fn distance(&self, other: Vector) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;

        (dx*dx + dy*dy).sqrt()
    }

    ///
    /// Returns a vector with the same angle as this one and a length of 1
    ///
    #[inline]
    pub fn unit(&self) -> Vector {
        *self / self.length()
    }

    ///
    /// Returns this vector rotated by 90 degrees
    ///
    #[inline]
    pub fn perpendicular(&self) -> Vector {
        Vector::new(-self.y, self.x)
    }

    ///
    /// Linear interpolation between this point and another one
    ///
    /// `t` is not clamped: values outside of the 0..1 range extrapolate along the line
    ///
    #[inline]
    pub fn lerp(&self, other: Vector, t: f64) -> Vector {
        Vector::new(self.x + (other.x-self.x)*t, self.y + (other.y-self.y)*t)
    }

    /// True if both components are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Vector {
    #[inline]
    fn from((x, y): (f64, f64)) -> Vector {
        Vector::new(x, y)
    }
}

impl Add<Vector> for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vector> for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<Vector> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        Vector::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div<Vector> for Vector {
    type Output = Vector;

    #[inline]
    fn div(self, rhs: Vector) -> Vector {
        Vector::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl AddAssign<Vector> for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign<Vector> for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<Vector> for Vector {
    #[inline]
    fn mul_assign(&mut self, rhs: Vector) {
        self.x *= rhs.x;
        self.y *= rhs.y;
    }
}

impl DivAssign<Vector> for Vector {
    #[inline]
    fn div_assign(&mut self, rhs: Vector) {
        self.x /= rhs.x;
        self.y /= rhs.y;
    }
}
