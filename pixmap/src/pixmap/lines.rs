use super::pixmap::*;
use crate::raster::*;

///
/// Converts an angle in degrees and a length to an offset (truncated to whole pixels)
///
#[inline]
fn polar_offset(angle: f32, length: f32) -> (i32, i32) {
    let radians = angle.to_radians();
    ((length * radians.cos()) as i32, (length * radians.sin()) as i32)
}

///
/// Lines, curves and outlines
///
impl Pixmap {
    ///
    /// Draws a line in the current colour (both end points are included)
    ///
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> &mut Self {
        let (x1, y1) = self.device(x1, y1);
        let (x2, y2) = self.device(x2, y2);

        self.draw(|ctxt| draw_line(ctxt, x1, y1, x2, y2))
    }

    ///
    /// Divides a line into `divisions` pieces and draws the even-numbered ones
    ///
    pub fn draw_dash_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, divisions: i32) -> &mut Self {
        let (x1, y1) = self.device(x1, y1);
        let (x2, y2) = self.device(x2, y2);

        self.draw(|ctxt| draw_dash_line(ctxt, x1, y1, x2, y2, divisions))
    }

    ///
    /// Draws a line from a point at an angle (in degrees, clockwise on the screen from 3 o'clock)
    ///
    pub fn draw_angle_line(&mut self, x: i32, y: i32, angle: f32, length: f32) -> &mut Self {
        let (dx, dy) = polar_offset(angle, length);
        self.draw_line(x, y, x.saturating_add(dx), y.saturating_add(dy))
    }

    ///
    /// Draws a dashed circle of a particular radius around a center point
    ///
    /// Larger circles are divided into more dashes, and there's always an even number of pieces.
    ///
    pub fn draw_dash_circle(&mut self, x: i32, y: i32, radius: f32) -> &mut Self {
        let mut sides = 10 + (radius * 0.6).floor() as i32;
        if sides % 2 == 1 {
            sides += 1;
        }

        let step = 360.0 / (sides as f32);
        for side in (1..sides).step_by(2) {
            let (x1, y1) = polar_offset(step * (side as f32) + 90.0, radius);
            let (x2, y2) = polar_offset(step * ((side + 1) as f32) + 90.0, radius);

            self.draw_line(x.saturating_add(x1), y.saturating_add(y1), x.saturating_add(x2), y.saturating_add(y2));
        }

        self
    }

    ///
    /// Draws lines radiating out from a circle
    ///
    pub fn draw_spikes(&mut self, x: i32, y: i32, radius: f32, length: f32, spikes: i32, rotation: f32) -> &mut Self {
        if spikes <= 0 {
            return self;
        }

        let step = 360.0 / (spikes as f32);
        for spike in 0..spikes {
            let angle       = (spike as f32) * step + rotation;
            let (x1, y1)    = polar_offset(angle, radius);
            let (x2, y2)    = polar_offset(angle, radius + length);

            self.draw_line(x.saturating_add(x1), y.saturating_add(y1), x.saturating_add(x2), y.saturating_add(y2));
        }

        self
    }

    ///
    /// Draws a cubic bezier curve, made up from `segments` straight lines
    ///
    pub fn draw_curve(&mut self, start: (f32, f32), control1: (f32, f32), control2: (f32, f32), end: (f32, f32), segments: i32) -> &mut Self {
        let (tx, ty)    = self.translation();
        let (tx, ty)    = (tx as f32, ty as f32);
        let offset      = |(x, y): (f32, f32)| (x + tx, y + ty);

        let (start, control1, control2, end) = (offset(start), offset(control1), offset(control2), offset(end));
        self.draw(|ctxt| draw_curve(ctxt, start, control1, control2, end, segments))
    }

    ///
    /// Draws lines joining a list of points
    ///
    pub fn draw_polyline(&mut self, points: &[(i32, i32)]) -> &mut Self {
        let points = self.device_points(points);
        self.draw(|ctxt| draw_polyline(ctxt, &points, false))
    }

    ///
    /// Draws the outline of a polygon
    ///
    pub fn draw_polygon(&mut self, points: &[(i32, i32)]) -> &mut Self {
        let points = self.device_points(points);
        self.draw(|ctxt| draw_polygon(ctxt, &points))
    }

    ///
    /// Draws the outline of a rectangle. The right and bottom edges are at `x + width` and `y + height`.
    ///
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        let (left, right)   = if width < 0 { (x.saturating_add(width), x) } else { (x, x.saturating_add(width)) };
        let (top, bottom)   = if height < 0 { (y.saturating_add(height), y) } else { (y, y.saturating_add(height)) };

        // Each side stops short of the corners that the other sides draw
        self.draw_line(left, top, right, top)
            .draw_line(left, top.saturating_add(1), left, bottom)
            .draw_line(right, bottom, left.saturating_add(1), bottom)
            .draw_line(right, bottom.saturating_sub(1), right, top.saturating_add(1))
    }

    ///
    /// Draws the outline of a rectangle with rounded corners
    ///
    pub fn draw_round_rect(&mut self, x: i32, y: i32, width: i32, height: i32, arc_width: i32, arc_height: i32) -> &mut Self {
        let (half_w, half_h)    = (arc_width / 2, arc_height / 2);
        let (right, bottom)     = (x.saturating_add(width), y.saturating_add(height));

        self.draw_line(x.saturating_add(half_w), y, right.saturating_sub(half_w), y)
            .draw_line(x, y.saturating_add(half_h), x, bottom.saturating_sub(half_h))
            .draw_line(x.saturating_add(half_w), bottom, right.saturating_sub(half_w), bottom)
            .draw_line(right, y.saturating_add(half_h), right, bottom.saturating_sub(half_h))
            .draw_arc(x, y, arc_width, arc_height, 90, 90)
            .draw_arc(right.saturating_sub(arc_width), y, arc_width, arc_height, 0, 90)
            .draw_arc(x, bottom.saturating_sub(arc_height), arc_width, arc_height, 180, 90)
            .draw_arc(right.saturating_sub(arc_width), bottom.saturating_sub(arc_height), arc_width, arc_height, 270, 90)
    }

    ///
    /// Translates a list of points into buffer coordinates
    ///
    pub (super) fn device_points(&self, points: &[(i32, i32)]) -> Vec<(i32, i32)> {
        points.iter().map(|(x, y)| self.device(*x, *y)).collect()
    }
}
