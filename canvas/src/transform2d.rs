use crate::vector::*;

use std::ops::{Mul};

///
/// A 2D affine transformation
///
/// Maps `(x, y)` to `(xx*x + xy*y + x0, yx*x + yy*y + y0)`.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Transform2D {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Default for Transform2D {
    fn default() -> Self {
        Transform2D::identity()
    }
}

impl Transform2D {
    ///
    /// The identity transform
    ///
    #[inline]
    pub const fn identity() -> Transform2D {
        Transform2D { xx: 1.0, yx: 0.0, xy: 0.0, yy: 1.0, x0: 0.0, y0: 0.0 }
    }

    ///
    /// A translation by a particular offset
    ///
    #[inline]
    pub const fn translate(dx: f64, dy: f64) -> Transform2D {
        Transform2D { xx: 1.0, yx: 0.0, xy: 0.0, yy: 1.0, x0: dx, y0: dy }
    }

    ///
    /// A scale about the origin
    ///
    #[inline]
    pub const fn scale(sx: f64, sy: f64) -> Transform2D {
        Transform2D { xx: sx, yx: 0.0, xy: 0.0, yy: sy, x0: 0.0, y0: 0.0 }
    }

    ///
    /// A counter-clockwise rotation about the origin, in radians
    ///
    #[inline]
    pub fn rotate(radians: f64) -> Transform2D {
        let (sin, cos) = radians.sin_cos();

        Transform2D { xx: cos, yx: sin, xy: -sin, yy: cos, x0: 0.0, y0: 0.0 }
    }

    ///
    /// A shear transform
    ///
    #[inline]
    pub const fn shear(shx: f64, shy: f64) -> Transform2D {
        Transform2D { xx: 1.0, yx: shy, xy: shx, yy: 1.0, x0: 0.0, y0: 0.0 }
    }

    ///
    /// Returns the transform that applies this transform followed by another one
    ///
    pub fn multiply(&self, other: &Transform2D) -> Transform2D {
        Transform2D {
            xx: self.xx*other.xx + self.yx*other.xy,
            yx: self.xx*other.yx + self.yx*other.yy,
            xy: self.xy*other.xx + self.yy*other.xy,
            yy: self.xy*other.yx + self.yy*other.yy,
            x0: self.x0*other.xx + self.y0*other.xy + other.x0,
            y0: self.x0*other.yx + self.y0*other.yy + other.y0,
        }
    }

    ///
    /// Translates in the local coordinate frame of this transform (the translation happens first)
    ///
    #[inline]
    pub fn translated(&self, dx: f64, dy: f64) -> Transform2D {
        Transform2D::translate(dx, dy).multiply(self)
    }

    ///
    /// Scales in the local coordinate frame of this transform
    ///
    #[inline]
    pub fn scaled(&self, sx: f64, sy: f64) -> Transform2D {
        Transform2D::scale(sx, sy).multiply(self)
    }

    ///
    /// Rotates in the local coordinate frame of this transform
    ///
    #[inline]
    pub fn rotated(&self, radians: f64) -> Transform2D {
        Transform2D::rotate(radians).multiply(self)
    }

    ///
    /// Shears in the local coordinate frame of this transform
    ///
    #[inline]
    pub fn sheared(&self, shx: f64, shy: f64) -> Transform2D {
        Transform2D::shear(shx, shy).multiply(self)
    }

    ///
    /// Applies this transform to a point (including the translation)
    ///
    #[inline]
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        (self.xx*x + self.xy*y + self.x0, self.yx*x + self.yy*y + self.y0)
    }

    ///
    /// Applies the linear part of this transform to a vector (the translation is ignored)
    ///
    #[inline]
    pub fn transform_vector(&self, x: f64, y: f64) -> (f64, f64) {
        (self.xx*x + self.xy*y, self.yx*x + self.yy*y)
    }

    /// Transforms a point represented as a vector
    #[inline]
    pub fn apply(&self, point: Vector) -> Vector {
        self.transform_point(point.x, point.y).into()
    }

    /// The determinant of the linear part of this transform
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.xx*self.yy - self.xy*self.yx
    }

    ///
    /// Returns the inverse of this transform, or None if it collapses the plane onto a line or a point
    ///
    pub fn invert(&self) -> Option<Transform2D> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }

        let inv_det = 1.0 / det;
        let xx      = self.yy * inv_det;
        let yx      = -self.yx * inv_det;
        let xy      = -self.xy * inv_det;
        let yy      = self.xx * inv_det;

        Some(Transform2D {
            xx, yx, xy, yy,
            x0: -(xx*self.x0 + xy*self.y0),
            y0: -(yx*self.x0 + yy*self.y0),
        })
    }
}

///
/// `a * b` is the conventional matrix product: `b` is applied first, then `a`
///
impl Mul<Transform2D> for Transform2D {
    type Output = Transform2D;

    #[inline]
    fn mul(self, rhs: Transform2D) -> Transform2D {
        rhs.multiply(&self)
    }
}
