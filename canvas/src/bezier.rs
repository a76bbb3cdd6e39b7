//!
//! Bezier curves are flattened into polylines with a number of points proportional to the length of their
//! control polygon. Lengths are measured in device space, so the flatness stays roughly the same whatever
//! the scale of the drawing.
//!

use crate::vector::*;

/// Curves are always flattened into at least this many points
const MIN_CURVE_POINTS: usize = 4;

/// Upper limit on the number of points generated for a single curve
const MAX_CURVE_POINTS: usize = 1<<16;

///
/// Works out how many points to use to represent a curve with a control polygon of the specified length
///
#[inline]
fn num_points_for_length(control_polygon_length: f64) -> usize {
    let num_points = (control_polygon_length + 0.5).floor();

    if num_points.is_finite() && num_points > MIN_CURVE_POINTS as f64 {
        (num_points as usize).min(MAX_CURVE_POINTS)
    } else {
        MIN_CURVE_POINTS
    }
}

///
/// Flattens a quadratic bezier curve into a list of points (including the start and end points)
///
pub fn flatten_quadratic(p0: Vector, p1: Vector, p2: Vector) -> Vec<Vector> {
    let num_points  = num_points_for_length(p0.distance(p1) + p1.distance(p2));
    let last        = (num_points - 1) as f64;

    (0..num_points)
        .map(|idx| {
            if idx == 0 { return p0; }
            if idx == num_points-1 { return p2; }

            let t = (idx as f64) / last;
            let u = 1.0 - t;
            let a = u*u;
            let b = 2.0*u*t;
            let c = t*t;

            p0*a + p1*b + p2*c
        })
        .collect()
}

///
/// Flattens a cubic bezier curve into a list of points (including the start and end points)
///
pub fn flatten_cubic(p0: Vector, p1: Vector, p2: Vector, p3: Vector) -> Vec<Vector> {
    let num_points  = num_points_for_length(p0.distance(p1) + p1.distance(p2) + p2.distance(p3));
    let last        = (num_points - 1) as f64;

    (0..num_points)
        .map(|idx| {
            if idx == 0 { return p0; }
            if idx == num_points-1 { return p3; }

            let t = (idx as f64) / last;
            let u = 1.0 - t;
            let a = u*u*u;
            let b = 3.0*u*u*t;
            let c = 3.0*u*t*t;
            let d = t*t*t;

            p0*a + p1*b + p2*c + p3*d
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn short_curves_use_minimum_points() {
        assert!(num_points_for_length(0.0) == 4);
        assert!(num_points_for_length(3.4) == 4);
        assert!(num_points_for_length(f64::NAN) == 4);
    }

    #[test]
    fn long_curves_round_to_nearest() {
        assert!(num_points_for_length(10.4) == 10);
        assert!(num_points_for_length(10.5) == 11);
    }
}
