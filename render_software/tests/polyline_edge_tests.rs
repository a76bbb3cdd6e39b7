use flo_raster_software::edges::*;
use flo_raster_software::canvas::*;

use smallvec::*;

///
/// The intercepts of the lines in a set of edges along a scanline, ordered by x position
///
fn intercepts_on_line(edges: &PolylineEdges, y_pos: f64) -> SmallVec<[(f64, EdgeInterceptDirection); 8]> {
    let mut intercepts = edges.lines().iter()
        .filter(|line| line.y_range().contains(&y_pos))
        .map(|line| (line.x_pos(y_pos), line.direction()))
        .collect::<SmallVec<[_; 8]>>();
    intercepts.sort_by(|a, b| a.0.total_cmp(&b.0));

    intercepts
}

fn triangle() -> PolylineEdges {
    let mut triangle = PolylineEdges::new();
    triangle.add_polyline(&[
        Vector::new(100.0, 100.0),
        Vector::new(200.0, 200.0),
        Vector::new(300.0, 100.0),
        Vector::new(100.0, 100.0),
    ]);
    triangle.prepare_to_render();

    triangle
}

#[test]
fn triangle_intercepts() {
    let triangle = triangle();

    let intercepts = intercepts_on_line(&triangle, 150.0);

    assert!(intercepts.len() == 2, "Should be two intercepts, found {:?}", intercepts);
    assert!(intercepts[0] == (150.0, EdgeInterceptDirection::DirectionOut), "First intercept should be DirectionOut at 150, found {:?}", intercepts);
    assert!(intercepts[1] == (250.0, EdgeInterceptDirection::DirectionIn), "Second intercept should be DirectionIn at 250, found {:?}", intercepts);
}

#[test]
fn horizontal_triangle_line() {
    // The horizontal line is ignored, but the two diagonal lines both start on this scanline
    let triangle = triangle();

    let intercepts = intercepts_on_line(&triangle, 100.0);

    assert!(intercepts.len() == 2, "Should be two intercepts, found {:?}", intercepts);
    assert!(intercepts[0].1 == EdgeInterceptDirection::DirectionOut, "First intercept should be DirectionOut, found {:?}", intercepts);
    assert!(intercepts[1].1 == EdgeInterceptDirection::DirectionIn, "Second intercept should be DirectionIn, found {:?}", intercepts);
}

#[test]
fn horizontal_triangle_line_reversed() {
    // Same triangle going the other way around, so the directions are swapped
    let mut triangle = PolylineEdges::new();
    triangle.add_polyline(&[
        Vector::new(300.0, 100.0),
        Vector::new(200.0, 200.0),
        Vector::new(100.0, 100.0),
        Vector::new(300.0, 100.0),
    ]);
    triangle.prepare_to_render();

    let intercepts = intercepts_on_line(&triangle, 100.0);

    assert!(intercepts.len() == 2, "Should be two intercepts, found {:?}", intercepts);
    assert!(intercepts[0].1 == EdgeInterceptDirection::DirectionIn, "First intercept should be DirectionIn, found {:?}", intercepts);
    assert!(intercepts[1].1 == EdgeInterceptDirection::DirectionOut, "Second intercept should be DirectionOut, found {:?}", intercepts);
}

#[test]
fn double_horizontal_triangle_line() {
    // Two horizontal lines along the top of the triangle still only produce 2 intercepts
    let mut triangle = PolylineEdges::new();
    triangle.add_polyline(&[
        Vector::new(100.0, 100.0),
        Vector::new(200.0, 200.0),
        Vector::new(300.0, 100.0),
        Vector::new(150.0, 100.0),
        Vector::new(100.0, 100.0),
    ]);
    triangle.prepare_to_render();

    let intercepts = intercepts_on_line(&triangle, 100.0);

    assert!(intercepts.len() == 2, "Should be two intercepts, found {:?}", intercepts);
}

#[test]
fn bottom_point_is_excluded() {
    // Lines cover a half-open range, so nothing intercepts the lowest point of the triangle
    let triangle = triangle();

    let intercepts = intercepts_on_line(&triangle, 200.0);

    assert!(intercepts.len() == 0, "Should be no intercepts, found {:?}", intercepts);
}

#[test]
fn polylines_are_closed_implicitly() {
    let mut open_triangle = PolylineEdges::new();
    open_triangle.add_polyline(&[
        Vector::new(100.0, 100.0),
        Vector::new(200.0, 200.0),
        Vector::new(300.0, 100.0),
    ]);
    open_triangle.prepare_to_render();

    let intercepts = intercepts_on_line(&open_triangle, 150.0);

    assert!(intercepts.len() == 2, "Should be two intercepts, found {:?}", intercepts);
    assert!(open_triangle.lines().len() == 2, "Horizontal closing line should not be stored, found {:?}", open_triangle.lines());
}

#[test]
fn bounding_box() {
    let triangle = triangle();
    let empty    = PolylineEdges::new();

    assert!(triangle.bounding_box() == Some(((100.0, 100.0), (300.0, 200.0))), "{:?}", triangle.bounding_box());
    assert!(empty.bounding_box() == None, "{:?}", empty.bounding_box());
}
