use flo_raster_software::*;
use flo_raster_software::canvas::*;

fn alpha(canvas: &Canvas, x: usize, y: usize) -> u8 {
    canvas.frame().pixel(x, y).unwrap().alpha()
}

fn horizontal_line(cap: LineCap) -> Canvas {
    let mut canvas = Canvas::new(16, 16);

    canvas.set_line_width(2.0).unwrap();
    canvas.set_line_cap(cap);
    canvas.draw_line(2.0, 8.0, 14.0, 8.0);
    canvas.stroke().unwrap();

    canvas
}

#[test]
fn stroke_horizontal_line() {
    let canvas = horizontal_line(LineCap::Butt);

    assert!(canvas.frame().pixel(8, 7).unwrap().get_components() == [0, 0, 0, 255], "Default stroke should be black");
    assert!(alpha(&canvas, 8, 8) == 255);
    assert!(alpha(&canvas, 8, 6) == 0);
    assert!(alpha(&canvas, 8, 9) == 0);
    assert!(alpha(&canvas, 2, 8) == 255);
    assert!(alpha(&canvas, 1, 8) == 0, "Butt caps should stop at the end of the line");
    assert!(alpha(&canvas, 14, 8) == 0);
}

#[test]
fn square_caps_extend_line() {
    let canvas = horizontal_line(LineCap::Square);

    assert!(alpha(&canvas, 1, 8) == 255, "{}", alpha(&canvas, 1, 8));
    assert!(alpha(&canvas, 14, 8) == 255, "{}", alpha(&canvas, 14, 8));
    assert!(alpha(&canvas, 0, 8) == 0, "{}", alpha(&canvas, 0, 8));
    assert!(alpha(&canvas, 15, 8) == 0, "{}", alpha(&canvas, 15, 8));
}

#[test]
fn round_caps_are_partially_covered() {
    let canvas = horizontal_line(LineCap::Round);

    assert!(alpha(&canvas, 1, 8) > 0 && alpha(&canvas, 1, 8) < 255, "{}", alpha(&canvas, 1, 8));
    assert!(alpha(&canvas, 0, 8) == 0, "{}", alpha(&canvas, 0, 8));
}

#[test]
fn stroke_clears_path() {
    let mut canvas = Canvas::new(16, 16);

    canvas.draw_line(2.0, 8.0, 14.0, 8.0);
    canvas.stroke_preserve().unwrap();
    assert!(canvas.current_point().is_some());

    canvas.stroke().unwrap();
    assert!(canvas.current_point().is_none());
}

#[test]
fn dashed_line() {
    let mut canvas = Canvas::new(16, 16);

    canvas.set_line_width(2.0).unwrap();
    canvas.set_line_cap(LineCap::Butt);
    canvas.set_dash(&[4.0, 4.0]).unwrap();
    canvas.draw_line(0.0, 8.0, 16.0, 8.0);
    canvas.stroke().unwrap();

    assert!(alpha(&canvas, 2, 8) == 255, "{}", alpha(&canvas, 2, 8));
    assert!(alpha(&canvas, 6, 8) == 0, "{}", alpha(&canvas, 6, 8));
    assert!(alpha(&canvas, 10, 8) == 255, "{}", alpha(&canvas, 10, 8));
    assert!(alpha(&canvas, 14, 8) == 0, "{}", alpha(&canvas, 14, 8));
}

#[test]
fn stroke_ignores_even_odd_rule() {
    let mut canvas = Canvas::new(16, 16);

    // The segments overlap at the corner, which would leave a hole if the outline was filled with the even-odd rule
    canvas.set_winding_rule(WindingRule::EvenOdd);
    canvas.set_line_width(4.0).unwrap();
    canvas.set_line_cap(LineCap::Butt);
    canvas.set_line_join(LineJoin::Bevel);
    canvas.move_to(4.0, 4.0);
    canvas.line_to(12.0, 4.0);
    canvas.line_to(12.0, 12.0);
    canvas.stroke().unwrap();

    assert!(alpha(&canvas, 11, 4) == 255, "{}", alpha(&canvas, 11, 4));
    assert!(alpha(&canvas, 12, 3) == 255, "Bevel should fill the outside of the corner: {}", alpha(&canvas, 12, 3));
    assert!(alpha(&canvas, 13, 2) == 0, "Bevel should not reach the corner: {}", alpha(&canvas, 13, 2));
}

#[test]
fn closed_paths_are_joined() {
    let mut canvas = Canvas::new(16, 16);

    canvas.set_line_width(2.0).unwrap();
    canvas.set_line_cap(LineCap::Butt);
    canvas.set_line_join(LineJoin::Round);
    canvas.draw_rectangle(4.0, 4.0, 8.0, 8.0);
    canvas.stroke().unwrap();

    assert!(alpha(&canvas, 3, 8) == 255);
    assert!(alpha(&canvas, 8, 4) == 255);
    assert!(alpha(&canvas, 8, 8) == 0, "Stroke should not fill the middle");
    assert!(alpha(&canvas, 3, 3) > 0, "Round join should cover the corner: {}", alpha(&canvas, 3, 3));
}

#[test]
fn line_width_is_in_device_pixels() {
    let mut canvas = Canvas::new(16, 16);

    canvas.scale(4.0, 4.0);
    canvas.set_line_width(2.0).unwrap();
    canvas.set_line_cap(LineCap::Butt);
    canvas.draw_line(0.0, 2.0, 4.0, 2.0);
    canvas.stroke().unwrap();

    assert!(alpha(&canvas, 8, 7) == 255);
    assert!(alpha(&canvas, 8, 8) == 255);
    assert!(alpha(&canvas, 8, 5) == 0);
    assert!(alpha(&canvas, 8, 10) == 0);
}

#[test]
fn stroke_pattern_is_separate_from_fill() {
    let mut canvas = Canvas::new(16, 16);

    canvas.draw_rectangle(4.0, 4.0, 8.0, 8.0);
    canvas.fill_preserve().unwrap();
    canvas.set_line_width(2.0).unwrap();
    canvas.stroke().unwrap();

    assert!(canvas.frame().pixel(8, 8).unwrap().get_components() == [255, 255, 255, 255]);
    assert!(canvas.frame().pixel(8, 4).unwrap().get_components() == [0, 0, 0, 255]);
}

fn outline_bounds(outlines: &[Polyline]) -> (f64, f64, f64, f64) {
    outlines.iter().flatten()
        .fold((f64::MAX, f64::MAX, f64::MIN, f64::MIN), |(min_x, min_y, max_x, max_y), point| {
            (min_x.min(point.x), min_y.min(point.y), max_x.max(point.x), max_y.max(point.y))
        })
}

#[test]
fn stroke_polylines_outline_bounds() {
    let line    = vec![Vector::new(0.0, 0.0), Vector::new(10.0, 0.0)];

    let butt    = stroke_polylines(&[line.clone()], 2.0, LineCap::Butt, LineJoin::Round);
    let square  = stroke_polylines(&[line.clone()], 2.0, LineCap::Square, LineJoin::Round);
    let none    = stroke_polylines(&[line.clone()], -1.0, LineCap::Square, LineJoin::Round);
    let single  = stroke_polylines(&[vec![Vector::new(4.0, 4.0)]], 2.0, LineCap::Round, LineJoin::Round);

    let (min_x, min_y, max_x, max_y) = outline_bounds(&butt);
    assert!(!butt.is_empty());
    assert!(min_x > -0.05 && max_x < 10.05, "{:?}", butt);
    assert!(min_y > -1.05 && max_y < 1.05, "{:?}", butt);

    let (min_x, _, max_x, _) = outline_bounds(&square);
    assert!((min_x - -1.0).abs() < 0.05 && (max_x - 11.0).abs() < 0.05, "{:?}", square);

    assert!(none.is_empty(), "{:?}", none);
    assert!(single.is_empty(), "{:?}", single);
}

#[test]
fn tiny_dash_lengths_are_rejected_by_the_canvas() {
    let mut canvas = Canvas::new(16, 16);

    assert!(canvas.set_dash(&[1e-20]).is_err());
    assert!(canvas.set_dash(&[1e-20, 4.0]).is_err());
}

#[test]
fn stroke_with_shortest_dashes_finishes() {
    let mut canvas = Canvas::new(16, 16);

    canvas.set_line_width(2.0).unwrap();
    canvas.set_line_cap(LineCap::Butt);
    canvas.set_dash(&[2.0, MIN_DASH_LENGTH]).unwrap();
    canvas.draw_line(2.0, 8.0, 14.0, 8.0);

    assert!(canvas.stroke().is_ok());
    assert!(alpha(&canvas, 8, 8) > 0, "{}", alpha(&canvas, 8, 8));
    assert!(alpha(&canvas, 8, 3) == 0);
}
