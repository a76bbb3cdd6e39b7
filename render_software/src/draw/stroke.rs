use super::canvas_drawing::*;
use super::path::*;

use crate::canvas;
use crate::canvas::{Polyline, Vector, FixedPoint, WindingRule, Coord2, Coordinate2D, flatten_program, dash_polylines, flatten_cubic};
use crate::canvas::curves::bezier::*;
use crate::canvas::curves::bezier::path::*;
use crate::error::*;

/// Points where |dx|+|dy| is no more than this many 1/64ths of a pixel from the point before them are merged
const MIN_STROKE_SEGMENT_FIXED: i32 = 8;

/// How closely the offset curves of a stroke follow the path (in pixels)
const STROKE_ACCURACY: f64 = 1.0 / 64.0;

/// Closest distance between samples used when fitting the offset curves of a stroke
const STROKE_MIN_SAMPLE_DISTANCE: f64 = 1.0 / 128.0;

impl Canvas {
    ///
    /// Loads the outline of the stroke path into the rasterizer, returning the number of pieces in the outline
    ///
    fn rasterize_stroke_path(&mut self) -> Result<usize, CanvasError> {
        let style       = &self.current_state.style;
        let polylines   = flatten_program(&self.stroke_path)?;
        let polylines   = if style.dash_pattern.is_empty() {
            polylines
        } else {
            dash_polylines(&polylines, &style.dash_pattern)
        };

        let outline     = stroke_polylines(&polylines, style.line_width, style.line_cap, style.line_join);

        // Overlapping stroke outlines are filled with the non-zero rule
        self.rasterizer.clear();
        self.rasterizer.set_winding_rule(WindingRule::NonZero);
        self.rasterizer.add_polylines(&outline);

        Ok(outline.len())
    }

    ///
    /// Strokes the current path with the stroke pattern, leaving the path in place
    ///
    pub fn stroke_preserve(&mut self) -> Result<(), CanvasError> {
        let num_pieces = self.rasterize_stroke_path()?;
        debug!("Stroke: {} outline pieces (width {})", num_pieces, self.current_state.style.line_width);

        paint_rasterized(&mut self.rasterizer, &mut self.frame, &*self.current_state.stroke_pattern, self.current_state.clip_mask.as_deref());

        Ok(())
    }

    ///
    /// Strokes the current path and then clears it
    ///
    pub fn stroke(&mut self) -> Result<(), CanvasError> {
        let result = self.stroke_preserve();
        self.clear_path();

        result
    }
}

///
/// Converts a set of polylines into the outline of a stroke of the specified width
///
/// Each polyline is stroked by `flo_curves`, and the curves of the outlines it generates are flattened again. The
/// outlines are filled with the non-zero winding rule. A closed polyline (one whose last point is the same as its
/// first) is joined where it meets itself instead of being capped.
///
pub fn stroke_polylines(polylines: &[Polyline], width: f64, line_cap: canvas::LineCap, line_join: canvas::LineJoin) -> Vec<Polyline> {
    if !width.is_finite() || !(width > 0.0) {
        return vec![];
    }

    let open_options    = stroke_options(curve_cap(line_cap), line_join);
    let closed_options  = stroke_options(LineCap::Butt, line_join);

    polylines.iter()
        .map(|polyline| remove_short_segments(polyline))
        .filter(|points| points.len() >= 2)
        .flat_map(|mut points| {
            let last_idx    = points.len()-1;
            let is_closed   = points.len() > 2 && points[0] == points[last_idx];

            // Closed polylines overlap their first segment, so the point where they meet is joined rather than capped
            let options = if is_closed {
                points.push(points[1]);
                &closed_options
            } else {
                &open_options
            };

            let mut path = BezierPathBuilder::<SimpleBezierPath>::start(to_coord(points[0]));
            for point in points[1..].iter() {
                path = path.line_to(to_coord(*point));
            }

            stroke_path::<SimpleBezierPath, _>(&path.build(), width, options)
        })
        .map(|outline| flatten_outline(outline))
        .filter(|outline| outline.len() >= 3)
        .collect()
}

///
/// The options for stroking a polyline with `flo_curves`
///
fn stroke_options(cap: LineCap, line_join: canvas::LineJoin) -> StrokeOptions {
    let join = match line_join {
        canvas::LineJoin::Round => LineJoin::Round,
        canvas::LineJoin::Bevel => LineJoin::Bevel,
    };

    StrokeOptions::default()
        .with_accuracy(STROKE_ACCURACY)
        .with_min_sample_distance(STROKE_MIN_SAMPLE_DISTANCE)
        .with_start_cap(cap)
        .with_end_cap(cap)
        .with_join(join)
}

#[inline]
fn curve_cap(line_cap: canvas::LineCap) -> LineCap {
    match line_cap {
        canvas::LineCap::Butt   => LineCap::Butt,
        canvas::LineCap::Round  => LineCap::Round,
        canvas::LineCap::Square => LineCap::Square,
    }
}

#[inline] fn to_coord(point: Vector) -> Coord2 { Coord2(point.x, point.y) }
#[inline] fn to_vector(coord: Coord2) -> Vector { Vector::new(coord.x(), coord.y()) }

///
/// Flattens the curves in a stroke outline into a polyline
///
fn flatten_outline(outline: SimpleBezierPath) -> Polyline {
    let (start, curves) = outline;
    let mut previous    = to_vector(start);
    let mut points      = vec![previous];

    for (cp1, cp2, end) in curves.into_iter() {
        let end = to_vector(end);

        points.extend(flatten_cubic(previous, to_vector(cp1), to_vector(cp2), end).into_iter().skip(1));
        previous = end;
    }

    points
}

///
/// Removes points that are too close to the point before them to give the segment between them a direction
///
fn remove_short_segments(polyline: &[Vector]) -> Vec<Vector> {
    let mut points      = Vec::with_capacity(polyline.len());
    let mut previous    = None;

    for point in polyline.iter() {
        let fixed = FixedPoint::from(*point);

        let keep = match previous {
            None                                => true,
            Some(FixedPoint { x, y })           => (fixed.x - x).abs() + (fixed.y - y).abs() > MIN_STROKE_SEGMENT_FIXED,
        };

        if keep {
            points.push(fixed.to_vector());
        }

        previous = Some(fixed);
    }

    points
}

#[cfg(test)]
mod test {
    use super::*;

    fn bounds(outlines: &[Polyline]) -> (f64, f64, f64, f64) {
        outlines.iter().flatten()
            .fold((f64::MAX, f64::MAX, f64::MIN, f64::MIN), |(min_x, min_y, max_x, max_y), point| {
                (min_x.min(point.x), min_y.min(point.y), max_x.max(point.x), max_y.max(point.y))
            })
    }

    fn close_to(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.05
    }

    #[test]
    fn short_segments_are_merged() {
        let points = remove_short_segments(&[Vector::new(0.0, 0.0), Vector::new(0.05, 0.05), Vector::new(4.0, 0.0)]);

        assert!(points == vec![Vector::new(0.0, 0.0), Vector::new(4.0, 0.0)], "{:?}", points);
    }

    #[test]
    fn caps_change_the_outline_bounds() {
        let line    = vec![Vector::new(10.0, 10.0), Vector::new(30.0, 10.0)];

        let butt    = bounds(&stroke_polylines(&[line.clone()], 4.0, canvas::LineCap::Butt, canvas::LineJoin::Bevel));
        let square  = bounds(&stroke_polylines(&[line.clone()], 4.0, canvas::LineCap::Square, canvas::LineJoin::Bevel));
        let round   = bounds(&stroke_polylines(&[line.clone()], 4.0, canvas::LineCap::Round, canvas::LineJoin::Bevel));

        assert!(close_to(butt.0, 10.0) && close_to(butt.2, 30.0), "{:?}", butt);
        assert!(close_to(butt.1, 8.0) && close_to(butt.3, 12.0), "{:?}", butt);
        assert!(close_to(square.0, 8.0) && close_to(square.2, 32.0), "{:?}", square);
        assert!(close_to(round.0, 8.0) && close_to(round.2, 32.0), "{:?}", round);
    }

    #[test]
    fn outlines_are_flattened() {
        let outlines = stroke_polylines(&[vec![Vector::new(0.0, 0.0), Vector::new(10.0, 0.0), Vector::new(10.0, 10.0)]], 2.0, canvas::LineCap::Round, canvas::LineJoin::Round);

        assert!(!outlines.is_empty());
        assert!(outlines.iter().all(|outline| outline.len() >= 3), "{:?}", outlines);
        assert!(outlines.iter().flatten().all(|point| point.is_finite()), "{:?}", outlines);
    }

    #[test]
    fn zero_width_produces_nothing() {
        let pieces = stroke_polylines(&[vec![Vector::new(0.0, 0.0), Vector::new(10.0, 0.0)]], 0.0, canvas::LineCap::Round, canvas::LineJoin::Round);

        assert!(pieces.is_empty(), "{:?}", pieces);
    }
}
