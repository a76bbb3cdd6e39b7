use super::painter_trait::*;

use crate::canvas::*;
use crate::edges::*;
use crate::scanplan::*;

use smallvec::*;

use std::ops::{Range};

/// Number of sample rows taken for each row of pixels
const SAMPLES_PER_ROW: usize = 4;

///
/// Converts sets of closed polylines into anti-aliased coverage, one row of pixels at a time
///
/// Vertical anti-aliasing comes from taking several sample rows for each row of pixels, and horizontal
/// anti-aliasing from measuring exactly how much of each pixel the inside spans cover.
///
pub struct ScanlineRasterizer {
    width:          usize,
    height:         usize,
    winding_rule:   WindingRule,
    edges:          PolylineEdges,

    /// Accumulated coverage for the row that's being rasterized
    coverage:       Vec<f32>,

    /// The coverage for the current row, converted to bytes for the painter
    row_coverage:   Vec<u8>,
}

impl ScanlineRasterizer {
    ///
    /// Creates a rasterizer that generates spans clipped to a frame of the specified size
    ///
    pub fn new(width: usize, height: usize) -> Self {
        ScanlineRasterizer {
            width:          width,
            height:         height,
            winding_rule:   WindingRule::NonZero,
            edges:          PolylineEdges::new(),
            coverage:       vec![0.0; width],
            row_coverage:   vec![0; width],
        }
    }

    #[inline] pub fn width(&self) -> usize { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }

    ///
    /// Removes all of the polylines from this rasterizer
    ///
    #[inline]
    pub fn clear(&mut self) {
        self.edges.clear();
    }

    ///
    /// Sets the rule used to decide which parts of the polylines are inside the shape
    ///
    #[inline]
    pub fn set_winding_rule(&mut self, winding_rule: WindingRule) {
        self.winding_rule = winding_rule;
    }

    #[inline]
    pub fn winding_rule(&self) -> WindingRule {
        self.winding_rule
    }

    ///
    /// Adds a polyline to the shape (it's treated as closed even if the last point is not the same as the first)
    ///
    pub fn add_polyline(&mut self, points: &[Vector]) {
        if points.iter().all(|point| point.is_finite()) {
            self.edges.add_polyline(points);
        } else {
            trace!("Ignoring polyline with non-finite points");
        }
    }

    ///
    /// Adds a set of polylines to the shape
    ///
    pub fn add_polylines<'a>(&mut self, polylines: impl IntoIterator<Item=&'a Polyline>) {
        for polyline in polylines {
            self.add_polyline(polyline);
        }
    }

    ///
    /// Generates the coverage for the shape that has been added to this rasterizer, sending it to a painter
    ///
    pub fn rasterize<TPainter: Painter>(&mut self, painter: &mut TPainter) {
        if self.width == 0 || self.height == 0 || self.edges.is_empty() { return; }

        self.edges.prepare_to_render();

        let ((_, min_y), (_, max_y)) = match self.edges.bounding_box() {
            Some(bounds)    => bounds,
            None            => { return; }
        };

        let first_row   = min_y.floor().max(0.0) as usize;
        let last_row    = max_y.ceil().min(self.height as f64).max(0.0) as usize;
        let lines       = self.edges.lines();
        let sample_size = 1.0 / (SAMPLES_PER_ROW as f32);

        let mut next_line                                               = 0;
        let mut active_lines: Vec<usize>                                = vec![];
        let mut intercepts: SmallVec<[(f64, EdgeInterceptDirection); 16]> = smallvec![];

        for y in first_row..last_row {
            let mut dirty = usize::MAX..0;

            for sample in 0..SAMPLES_PER_ROW {
                let y_pos = (y as f64) + ((sample as f64) + 0.5) / (SAMPLES_PER_ROW as f64);

                // Lines are sorted by their start position, so the active set grows from the front of the list
                while next_line < lines.len() && lines[next_line].y_range().start <= y_pos {
                    active_lines.push(next_line);
                    next_line += 1;
                }
                active_lines.retain(|line_idx| lines[*line_idx].y_range().end > y_pos);

                intercepts.clear();
                intercepts.extend(active_lines.iter().map(|line_idx| (lines[*line_idx].x_pos(y_pos), lines[*line_idx].direction())));
                intercepts.sort_by(|a, b| a.0.total_cmp(&b.0));

                let mut state = ScanlineInterceptState::new(self.winding_rule);
                for (x_pos, direction) in intercepts.iter() {
                    if let Some(span) = state.add_intercept(*direction, *x_pos) {
                        add_span_coverage(&mut self.coverage, span, sample_size, &mut dirty);
                    }
                }
            }

            if dirty.start < dirty.end {
                emit_row(y, dirty, &mut self.coverage, &mut self.row_coverage, painter);
            }
        }
    }
}

///
/// Adds the coverage for a span on a single sample row to the coverage for the current pixel row
///
fn add_span_coverage(coverage: &mut [f32], span: Range<f64>, weight: f32, dirty: &mut Range<usize>) {
    let width   = coverage.len();
    let start   = span.start.max(0.0);
    let end     = span.end.min(width as f64);

    if !(start < end) { return; }

    let first   = start.floor() as usize;
    let last    = end.floor() as usize;

    if first == last {
        coverage[first] += ((end - start) as f32) * weight;
    } else {
        coverage[first] += (((first + 1) as f64 - start) as f32) * weight;
        for pixel in coverage[(first+1)..last].iter_mut() {
            *pixel += weight;
        }

        if last < width {
            coverage[last] += ((end - last as f64) as f32) * weight;
        }
    }

    dirty.start = dirty.start.min(first);
    dirty.end   = dirty.end.max((last + 1).min(width));
}

///
/// Converts the accumulated coverage for a row to bytes and sends the runs of covered pixels to a painter
///
fn emit_row<TPainter: Painter>(y: usize, dirty: Range<usize>, coverage: &mut [f32], row_coverage: &mut [u8], painter: &mut TPainter) {
    for x in dirty.clone() {
        row_coverage[x] = (coverage[x] * 255.0).round().max(0.0).min(255.0) as u8;
        coverage[x]     = 0.0;
    }

    let mut x = dirty.start;
    while x < dirty.end {
        if row_coverage[x] == 0 {
            x += 1;
            continue;
        }

        let span_start = x;
        while x < dirty.end && row_coverage[x] != 0 {
            x += 1;
        }

        painter.paint_span(y, span_start..x, &row_coverage[span_start..x]);
    }
}
