use flo_raster_software::render::*;
use flo_raster_software::scanplan::*;
use flo_raster_software::edges::*;
use flo_raster_software::canvas::*;

use std::ops::{Range};

///
/// Painter that just stores the coverage values it's given
///
struct CoveragePainter {
    width:      usize,
    coverage:   Vec<u8>,
}

impl CoveragePainter {
    fn new(width: usize, height: usize) -> Self {
        CoveragePainter { width: width, coverage: vec![0; width*height] }
    }

    fn at(&self, x: usize, y: usize) -> u8 {
        self.coverage[y*self.width + x]
    }
}

impl Painter for CoveragePainter {
    fn paint_span(&mut self, y: usize, x_range: Range<usize>, coverage: &[u8]) {
        assert!(x_range.len() == coverage.len(), "{:?} {:?}", x_range, coverage);

        for (x, coverage) in x_range.zip(coverage.iter()) {
            self.coverage[y*self.width + x] = *coverage;
        }
    }
}

fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Polyline {
    vec![Vector::new(x1, y1), Vector::new(x2, y1), Vector::new(x2, y2), Vector::new(x1, y2)]
}

fn rasterize(width: usize, height: usize, winding_rule: WindingRule, polylines: &[Polyline]) -> CoveragePainter {
    let mut rasterizer  = ScanlineRasterizer::new(width, height);
    let mut painter     = CoveragePainter::new(width, height);

    rasterizer.set_winding_rule(winding_rule);
    rasterizer.add_polylines(polylines);
    rasterizer.rasterize(&mut painter);

    painter
}

#[test]
fn pixel_aligned_square() {
    let painter = rasterize(8, 8, WindingRule::NonZero, &[rect(2.0, 2.0, 6.0, 6.0)]);

    for y in 0..8 {
        for x in 0..8 {
            let expected = if x >= 2 && x < 6 && y >= 2 && y < 6 { 255 } else { 0 };
            assert!(painter.at(x, y) == expected, "({}, {}) = {}", x, y, painter.at(x, y));
        }
    }
}

#[test]
fn partial_coverage_at_edges() {
    let painter = rasterize(8, 8, WindingRule::NonZero, &[rect(1.5, 1.5, 3.5, 3.5)]);

    assert!(painter.at(1, 1) == 64, "Corner should be a quarter covered, found {}", painter.at(1, 1));
    assert!(painter.at(2, 1) == 128, "Edge should be half covered, found {}", painter.at(2, 1));
    assert!(painter.at(1, 2) == 128, "Edge should be half covered, found {}", painter.at(1, 2));
    assert!(painter.at(2, 2) == 255, "Middle should be fully covered, found {}", painter.at(2, 2));
    assert!(painter.at(4, 4) == 0, "Outside should not be covered, found {}", painter.at(4, 4));
}

#[test]
fn even_odd_leaves_a_hole() {
    let shapes      = [rect(0.0, 0.0, 8.0, 8.0), rect(2.0, 2.0, 6.0, 6.0)];
    let non_zero    = rasterize(8, 8, WindingRule::NonZero, &shapes);
    let even_odd    = rasterize(8, 8, WindingRule::EvenOdd, &shapes);

    assert!(non_zero.at(4, 4) == 255, "Non-zero should fill the middle, found {}", non_zero.at(4, 4));
    assert!(even_odd.at(4, 4) == 0, "Even-odd should leave a hole, found {}", even_odd.at(4, 4));
    assert!(non_zero.at(1, 1) == 255 && even_odd.at(1, 1) == 255, "Both should fill the outside ring");
}

#[test]
fn non_zero_hole_from_reversed_contour() {
    let mut inner = rect(2.0, 2.0, 6.0, 6.0);
    inner.reverse();

    let painter = rasterize(8, 8, WindingRule::NonZero, &[rect(0.0, 0.0, 8.0, 8.0), inner]);

    assert!(painter.at(4, 4) == 0, "Reversed contour should cut a hole, found {}", painter.at(4, 4));
    assert!(painter.at(1, 1) == 255, "Ring should be filled, found {}", painter.at(1, 1));
}

#[test]
fn shapes_are_clipped_to_the_frame() {
    let painter = rasterize(8, 8, WindingRule::NonZero, &[rect(-5.0, -5.0, 3.0, 3.0), rect(10.0, 2.0, 20.0, 4.0)]);

    assert!(painter.at(0, 0) == 255, "{}", painter.at(0, 0));
    assert!(painter.at(2, 2) == 255, "{}", painter.at(2, 2));
    assert!(painter.at(3, 3) == 0, "{}", painter.at(3, 3));
    assert!(painter.at(7, 3) == 0, "{}", painter.at(7, 3));
}

#[test]
fn clear_removes_polylines() {
    let mut rasterizer  = ScanlineRasterizer::new(8, 8);
    let mut painter     = CoveragePainter::new(8, 8);

    rasterizer.add_polyline(&rect(0.0, 0.0, 8.0, 8.0));
    rasterizer.clear();
    rasterizer.rasterize(&mut painter);

    assert!(painter.coverage.iter().all(|coverage| *coverage == 0), "{:?}", painter.coverage);
}

#[test]
fn non_finite_polylines_are_ignored() {
    let painter = rasterize(8, 8, WindingRule::NonZero, &[vec![Vector::new(0.0, 0.0), Vector::new(f64::NAN, 4.0), Vector::new(0.0, 8.0)]]);

    assert!(painter.coverage.iter().all(|coverage| *coverage == 0), "{:?}", painter.coverage);
}

#[test]
fn intercept_state_spans() {
    let mut non_zero = ScanlineInterceptState::new(WindingRule::NonZero);

    assert!(non_zero.add_intercept(EdgeInterceptDirection::DirectionOut, 1.0) == None);
    assert!(non_zero.add_intercept(EdgeInterceptDirection::DirectionOut, 2.0) == None);
    assert!(non_zero.add_intercept(EdgeInterceptDirection::DirectionIn, 3.0) == None);
    assert!(non_zero.add_intercept(EdgeInterceptDirection::DirectionIn, 4.0) == Some(1.0..4.0));

    let mut even_odd = ScanlineInterceptState::new(WindingRule::EvenOdd);

    assert!(even_odd.add_intercept(EdgeInterceptDirection::DirectionOut, 1.0) == None);
    assert!(even_odd.add_intercept(EdgeInterceptDirection::DirectionOut, 2.0) == Some(1.0..2.0));
    assert!(even_odd.add_intercept(EdgeInterceptDirection::DirectionIn, 3.0) == None);
    assert!(even_odd.add_intercept(EdgeInterceptDirection::DirectionIn, 4.0) == Some(3.0..4.0));
}
