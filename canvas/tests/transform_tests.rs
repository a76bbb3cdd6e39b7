use flo_raster_canvas::*;

use std::f64::consts::PI;

fn close_to(a: (f64, f64), b: (f64, f64)) -> bool {
    (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
}

#[test]
fn identity_does_nothing() {
    let point = Transform2D::identity().transform_point(12.0, -4.0);
    assert!(point == (12.0, -4.0));
}

#[test]
fn translate_then_rotate_pivots_on_translated_origin() {
    let transform   = Transform2D::identity().translated(10.0, 0.0).rotated(PI/2.0);
    let point       = transform.transform_point(0.0, 0.0);

    assert!(close_to(point, (10.0, 0.0)), "{:?}", point);
}

#[test]
fn operations_apply_in_local_frame() {
    let transform   = Transform2D::identity().translated(10.0, 0.0).rotated(PI/2.0);
    let point       = transform.transform_point(1.0, 0.0);

    // (1, 0) is rotated to (0, 1) and then translated
    assert!(close_to(point, (10.0, 1.0)), "{:?}", point);
}

#[test]
fn multiply_applies_self_first() {
    let scale       = Transform2D::scale(2.0, 2.0);
    let translate   = Transform2D::translate(5.0, 0.0);

    assert!(scale.multiply(&translate).transform_point(1.0, 1.0) == (7.0, 2.0));
    assert!(translate.multiply(&scale).transform_point(1.0, 1.0) == (12.0, 2.0));
    assert!((translate * scale).transform_point(1.0, 1.0) == (7.0, 2.0));
}

#[test]
fn transform_vector_ignores_translation() {
    let transform = Transform2D::identity().translated(100.0, 100.0).scaled(2.0, 3.0);

    assert!(transform.transform_vector(1.0, 1.0) == (2.0, 3.0));
    assert!(transform.transform_point(1.0, 1.0) == (102.0, 103.0));
}

#[test]
fn shear_moves_x_by_y() {
    let point = Transform2D::shear(1.0, 0.0).transform_point(2.0, 3.0);
    assert!(point == (5.0, 3.0), "{:?}", point);
}

#[test]
fn invert_round_trip() {
    let transform   = Transform2D::identity().translated(3.0, 7.0).rotated(0.3).scaled(2.0, 0.5).sheared(0.2, 0.1);
    let inverse     = transform.invert().unwrap();
    let (x, y)      = transform.transform_point(13.0, -2.0);

    assert!(close_to(inverse.transform_point(x, y), (13.0, -2.0)));
}

#[test]
fn degenerate_transform_has_no_inverse() {
    assert!(Transform2D::scale(0.0, 1.0).invert().is_none());
}
