use crate::bezier::*;
use crate::path::*;
use crate::vector::*;

use itertools::*;

///
/// A polyline is the flattened form of a subpath: the points joined by straight lines
///
pub type Polyline = Vec<Vector>;

///
/// Decodes a path program into a list of polylines, one per subpath
///
/// Curves are flattened into line segments. A corrupt program produces an error rather than a partial result.
///
pub fn flatten_program(program: &PathProgram) -> Result<Vec<Polyline>, PathError> {
    let mut result          = vec![];
    let mut current: Polyline = vec![];
    let mut last_point      = Vector::origin();

    for command in program.commands() {
        match command? {
            PathCommand::MoveTo(point) => {
                if !current.is_empty() {
                    result.push(current);
                    current = vec![];
                }

                last_point = point.to_vector();
                current.push(last_point);
            }

            PathCommand::LineTo(point) => {
                last_point = point.to_vector();
                current.push(last_point);
            }

            PathCommand::QuadTo(cp, point) => {
                let end_point = point.to_vector();
                current.extend(flatten_quadratic(last_point, cp.to_vector(), end_point).into_iter().skip(1));
                last_point = end_point;
            }

            PathCommand::CubicTo(cp1, cp2, point) => {
                let end_point = point.to_vector();
                current.extend(flatten_cubic(last_point, cp1.to_vector(), cp2.to_vector(), end_point).into_iter().skip(1));
                last_point = end_point;
            }
        }
    }

    if !current.is_empty() {
        result.push(current);
    }

    Ok(result)
}

///
/// The total length of the lines making up a polyline
///
pub fn polyline_length(polyline: &[Vector]) -> f64 {
    polyline.iter()
        .tuple_windows()
        .map(|(a, b)| a.distance(*b))
        .sum()
}
