use super::canvas_drawing::*;

use crate::canvas::*;

use std::f64::consts::{PI};

/// Number of quadratic curves used to approximate an elliptical arc
const ARC_PIECES: usize = 16;

impl Canvas {
    ///
    /// Adds a circle around a point to the path
    ///
    /// The centre is transformed as usual, but the radius is in device pixels so points stay the same size
    /// whatever the transform is.
    ///
    pub fn draw_point(&mut self, x: f64, y: f64, radius: f64) {
        let (x, y)      = self.transform_point(x, y);
        let transform   = self.current_state.transform;

        self.current_state.transform = Transform2D::identity();
        self.draw_circle(x, y, radius);
        self.current_state.transform = transform;
    }

    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.move_to(x1, y1);
        self.line_to(x2, y2);
    }

    ///
    /// Adds a closed rectangle to the path as a new subpath
    ///
    pub fn draw_rectangle(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.new_sub_path();
        self.move_to(x, y);
        self.line_to(x+w, y);
        self.line_to(x+w, y+h);
        self.line_to(x, y+h);
        self.close_path();
    }

    ///
    /// Adds a rectangle with corners that are quarter circles of radius `r`
    ///
    pub fn draw_rounded_rectangle(&mut self, x: f64, y: f64, w: f64, h: f64, r: f64) {
        let (x0, x1, x2, x3) = (x, x+r, x+w-r, x+w);
        let (y0, y1, y2, y3) = (y, y+r, y+h-r, y+h);

        self.new_sub_path();
        self.move_to(x1, y0);
        self.line_to(x2, y0);
        self.draw_arc(x2, y1, r, 270.0f64.to_radians(), 360.0f64.to_radians());
        self.line_to(x3, y2);
        self.draw_arc(x2, y2, r, 0.0, 90.0f64.to_radians());
        self.line_to(x1, y3);
        self.draw_arc(x1, y2, r, 90.0f64.to_radians(), 180.0f64.to_radians());
        self.line_to(x0, y1);
        self.draw_arc(x1, y1, r, 180.0f64.to_radians(), 270.0f64.to_radians());
        self.close_path();
    }

    ///
    /// Adds an arc of an ellipse between two angles (in radians) to the path
    ///
    /// The arc continues the current subpath with a line to its start point if there is one, or starts a new
    /// subpath otherwise. It's made up of 16 quadratic curves, each passing through the midpoint of its section
    /// of the ellipse.
    ///
    pub fn draw_elliptical_arc(&mut self, x: f64, y: f64, rx: f64, ry: f64, angle1: f64, angle2: f64) {
        let point_at = |angle: f64| (x + rx*angle.cos(), y + ry*angle.sin());

        for idx in 0..ARC_PIECES {
            let a1          = angle1 + (angle2-angle1) * ((idx as f64) / (ARC_PIECES as f64));
            let a2          = angle1 + (angle2-angle1) * (((idx+1) as f64) / (ARC_PIECES as f64));

            let (x0, y0)    = point_at(a1);
            let (x1, y1)    = point_at(a1 + (a2-a1)/2.0);
            let (x2, y2)    = point_at(a2);

            // Control point that makes the curve pass through (x1, y1) at t=0.5
            let cx          = 2.0*x1 - x0/2.0 - x2/2.0;
            let cy          = 2.0*y1 - y0/2.0 - y2/2.0;

            if idx == 0 {
                if self.current_state.has_current {
                    self.line_to(x0, y0);
                } else {
                    self.move_to(x0, y0);
                }
            }

            self.quadratic_to(cx, cy, x2, y2);
        }
    }

    pub fn draw_ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64) {
        self.new_sub_path();
        self.draw_elliptical_arc(x, y, rx, ry, 0.0, 2.0*PI);
        self.close_path();
    }

    pub fn draw_arc(&mut self, x: f64, y: f64, r: f64, angle1: f64, angle2: f64) {
        self.draw_elliptical_arc(x, y, r, r, angle1, angle2);
    }

    pub fn draw_circle(&mut self, x: f64, y: f64, r: f64) {
        self.new_sub_path();
        self.draw_elliptical_arc(x, y, r, r, 0.0, 2.0*PI);
        self.close_path();
    }

    ///
    /// Adds a regular polygon with `num_sides` sides and vertices `r` away from its centre
    ///
    /// With no rotation, polygons with an odd number of sides have a vertex at the top, and ones with an even number
    /// of sides have a flat top edge.
    ///
    pub fn draw_regular_polygon(&mut self, num_sides: usize, x: f64, y: f64, r: f64, rotation: f64) {
        if num_sides == 0 { return; }

        let angle       = 2.0*PI / (num_sides as f64);
        let rotation    = rotation - PI/2.0;
        let rotation    = if num_sides % 2 == 0 { rotation + angle/2.0 } else { rotation };

        self.new_sub_path();
        for idx in 0..num_sides {
            let a = rotation + angle*(idx as f64);
            self.line_to(x + r*a.cos(), y + r*a.sin());
        }
        self.close_path();
    }
}
