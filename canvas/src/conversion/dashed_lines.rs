use super::flattened_path::*;

use crate::style::*;

use itertools::*;

///
/// Splits a set of polylines into the 'on' sections of a dash pattern
///
/// The pattern restarts at the beginning of each polyline. Even entries in the pattern are drawn and odd entries
/// are skipped. Cut points are interpolated exactly, so a dash can end part-way along a line segment. Polylines
/// with fewer than two points are dropped, as are trailing dashes that only contain a single point.
///
pub fn dash_polylines(polylines: &[Polyline], pattern: &DashPattern) -> Vec<Polyline> {
    if pattern.is_empty() {
        return polylines.to_vec();
    }

    let dashes      = pattern.lengths();
    let mut result  = vec![];

    for polyline in polylines.iter() {
        if polyline.len() < 2 { continue; }

        let mut dash_idx        = 0;
        let mut dash_remaining  = dashes[0];
        let mut dash: Polyline  = vec![polyline[0]];

        for (start, end) in polyline.iter().copied().tuple_windows() {
            let length      = start.distance(end);
            let mut offset  = 0.0;

            // Cut points are measured from the start of the segment
            while length - offset > dash_remaining {
                // Stop cutting if the dash is too short to move along a segment this long
                let next_offset = offset + dash_remaining;
                if next_offset <= offset && dash_remaining > 0.0 { break; }

                offset          = next_offset;
                let cut_point   = start.lerp(end, offset / length);
                dash.push(cut_point);

                if dash_idx % 2 == 0 && dash.len() > 1 {
                    result.push(dash);
                }

                dash            = vec![cut_point];
                dash_idx        = (dash_idx + 1) % dashes.len();
                dash_remaining  = dashes[dash_idx];
            }

            dash.push(end);
            dash_remaining = (dash_remaining - (length - offset)).max(0.0);
        }

        if dash_idx % 2 == 0 && dash.len() > 1 {
            result.push(dash);
        }
    }

    result
}
