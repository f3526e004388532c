use super::pixmap::*;
use crate::error::*;
use crate::geometry::*;
use crate::raster::*;

use log::{warn};

use std::f32::consts::{PI};

///
/// Filled rectangles, ellipses, arcs, polygons and shapes
///
impl Pixmap {
    ///
    /// Fills a rectangle with the current colour
    ///
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        let color = self.color();
        self.fill_rect_color(x, y, width, height, color)
    }

    ///
    /// Fills a rectangle with a specific colour (the current colour is not changed)
    ///
    pub fn fill_rect_color(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) -> &mut Self {
        let (x, y) = self.device(x, y);

        self.draw_with_color(color, |ctxt| {
            let area = RectI::new(x, y, width, height).intersection(&ctxt.plot_bounds());

            for row in area.y..area.bottom() {
                ctxt.plot_span(area.x, area.right() - 1, row);
            }
        })
    }

    /// Fills a rectangle with the current colour
    #[inline]
    pub fn clear_rect(&mut self, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        self.fill_rect(x, y, width, height)
    }

    ///
    /// Fills a rectangle that's been sheared into a parallelogram: each row moves right by `x_tilt` pixels and each
    /// column moves down by `y_tilt` pixels
    ///
    pub fn fill_rect_tilted(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32, x_tilt: i32, y_tilt: i32) -> &mut Self {
        let (x, y) = self.device(x, y);

        self.draw_with_color(color, |ctxt| {
            let bounds = ctxt.plot_bounds();
            let (left, right) = (bounds.x as i64, bounds.right() as i64);

            let rows = if y_tilt == 0 {
                (bounds.y as i64 - y as i64).max(0)..(bounds.bottom() as i64 - y as i64).min(height as i64)
            } else {
                0..height.max(0) as i64
            };

            for row in rows {
                // Each row is a run of consecutive x positions, so only the columns that land inside the bounds are visited
                let row_x   = x as i64 + row * x_tilt as i64;
                let cols    = (left - row_x).max(0)..(right - row_x).min(width as i64);

                for col in cols {
                    let px = row_x + col;
                    let py = y as i64 + row + col * y_tilt as i64;

                    if py >= bounds.y as i64 && py < bounds.bottom() as i64 {
                        ctxt.write(px as i32, py as i32, color);
                    }
                }
            }
        })
    }

    ///
    /// Draws a box-shaped column: a front face in `front`, with a side face in `side` and a top face in `top` of
    /// depth `depth`
    ///
    pub fn draw_column(&mut self, x: i32, y: i32, width: i32, height: i32, depth: i32, front: u32, side: u32, top: u32) -> &mut Self {
        self.fill_rect_color(x, y, width, height, front)
            .fill_rect_tilted(x.saturating_sub(depth), y.saturating_sub(depth), depth, height, side, 0, 1)
            .fill_rect_tilted(x.saturating_sub(depth), y.saturating_sub(depth), width, depth, top, 1, 0)
    }

    ///
    /// Draws the outline of the ellipse that fits inside a rectangle
    ///
    pub fn draw_oval(&mut self, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        let (x, y) = self.device(x, y);
        self.draw(|ctxt| draw_oval(ctxt, x, y, width, height))
    }

    ///
    /// Fills the ellipse that fits inside a rectangle
    ///
    pub fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        let (x, y) = self.device(x, y);
        self.draw(|ctxt| fill_oval(ctxt, x, y, width, height))
    }

    ///
    /// Fills a circle with the specified diameter, with its top-left corner at `(x, y)`
    ///
    #[inline]
    pub fn fill_circle(&mut self, x: i32, y: i32, diameter: i32) -> &mut Self {
        self.fill_oval(x, y, diameter, diameter)
    }

    ///
    /// Draws part of the outline of an ellipse
    ///
    /// Angles are in degrees, with 0 at 3 o'clock: positive sweeps go anticlockwise and negative sweeps go clockwise.
    ///
    pub fn draw_arc(&mut self, x: i32, y: i32, width: i32, height: i32, start: i32, sweep: i32) -> &mut Self {
        let (x, y) = self.device(x, y);
        self.draw(|ctxt| draw_arc(ctxt, x, y, width, height, start, sweep))
    }

    ///
    /// Fills a pie slice of an ellipse (angles as for `draw_arc`)
    ///
    pub fn fill_arc(&mut self, x: i32, y: i32, width: i32, height: i32, start: i32, sweep: i32) -> &mut Self {
        let (x, y) = self.device(x, y);
        self.draw(|ctxt| fill_arc(ctxt, x, y, width, height, start, sweep))
    }

    ///
    /// Fills a rectangle with rounded corners of a particular radius
    ///
    /// The radius is limited to half of the shorter side. No pixel is written more than once, so this can be
    /// used in XOR mode.
    ///
    pub fn fill_round_rect(&mut self, x: i32, y: i32, width: i32, height: i32, radius: i32) -> Result<&mut Self, PixmapError> {
        if radius < 0 {
            warn!("Rejecting rounded rectangle with radius {}", radius);
            return Err(PixmapError::NegativeRadius(radius));
        }

        let radius = radius.min(width.min(height) / 2);
        if radius <= 0 {
            return Ok(self.fill_rect(x, y, width, height));
        }

        let (x, y)  = self.device(x, y);
        let r       = radius;
        let d       = radius * 2;

        Ok(self.draw(|ctxt| {
            let bounds      = ctxt.plot_bounds();
            let right_edge  = x.saturating_add(width);
            let bottom_edge = y.saturating_add(height);
            let rows        = |from: i32, to: i32| from.max(bounds.y)..to.min(bounds.bottom());

            // The middle band and the parts of the top and bottom bands between the corners
            for row in rows(y.saturating_add(r), bottom_edge - r) {
                ctxt.plot_span(x, right_edge - 1, row);
            }
            for row in rows(y, y.saturating_add(r)).chain(rows(bottom_edge - r, bottom_edge)) {
                ctxt.plot_span(x.saturating_add(r), right_edge - r - 1, row);
            }

            // Each corner is a quarter circle limited to its corner square
            let right   = right_edge.saturating_sub(d + 1);
            let bottom  = bottom_edge.saturating_sub(d + 1);

            fill_arc_within(ctxt, x, y, d, d, 90, 90, &RectI::new(x, y, r, r));
            fill_arc_within(ctxt, right, y, d, d, 0, 90, &RectI::new(right_edge - r, y, r, r));
            fill_arc_within(ctxt, x, bottom, d, d, 180, 90, &RectI::new(x, bottom_edge - r, r, r));
            fill_arc_within(ctxt, right, bottom, d, d, 270, 90, &RectI::new(right_edge - r, bottom_edge - r, r, r));
        }))
    }

    ///
    /// Fills a polygon using the even-odd rule
    ///
    pub fn fill_polygon(&mut self, points: &[(i32, i32)]) -> &mut Self {
        let points = self.device_points(points);
        self.draw(|ctxt| fill_polygon(ctxt, &points))
    }

    ///
    /// Draws the outline of a triangle, offset by `(x, y)`
    ///
    pub fn draw_triangle(&mut self, triangle: &Triangle, x: i32, y: i32) -> &mut Self {
        self.draw_shape(triangle, x, y)
    }

    ///
    /// Fills a triangle, offset by `(x, y)`
    ///
    pub fn fill_triangle(&mut self, triangle: &Triangle, x: i32, y: i32) -> &mut Self {
        self.fill_shape(triangle, x, y)
    }

    /// Draws the outline of the triangle with the specified corners
    pub fn draw_triangle_points(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32) -> &mut Self {
        self.draw_polygon(&[(x1, y1), (x2, y2), (x3, y3)])
    }

    /// Fills the triangle with the specified corners
    pub fn fill_triangle_points(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32) -> &mut Self {
        self.fill_polygon(&[(x1, y1), (x2, y2), (x3, y3)])
    }

    /// Draws the outlines of a set of triangles
    pub fn draw_triangles(&mut self, triangles: &[Triangle], x: i32, y: i32) -> &mut Self {
        for triangle in triangles.iter() {
            self.draw_triangle(triangle, x, y);
        }
        self
    }

    /// Fills a set of triangles
    pub fn fill_triangles(&mut self, triangles: &[Triangle], x: i32, y: i32) -> &mut Self {
        for triangle in triangles.iter() {
            self.fill_triangle(triangle, x, y);
        }
        self
    }

    ///
    /// Fills an upward-pointing equilateral triangle with its corners `radius` pixels from a center point
    ///
    pub fn draw_star_triangle(&mut self, x: i32, y: i32, radius: i32) -> &mut Self {
        let (dx, dy) = Self::triangle_offsets(radius);
        self.fill_polygon(&[(x, y.saturating_sub(radius)), (x.saturating_sub(dx), y.saturating_add(dy)), (x.saturating_add(dx), y.saturating_add(dy))])
    }

    ///
    /// Fills a downward-pointing equilateral triangle with its corners `radius` pixels from a center point
    ///
    pub fn draw_inverted_triangle(&mut self, x: i32, y: i32, radius: i32) -> &mut Self {
        let (dx, dy) = Self::triangle_offsets(radius);
        self.fill_polygon(&[(x, y.saturating_add(radius)), (x.saturating_sub(dx), y.saturating_sub(dy)), (x.saturating_add(dx), y.saturating_sub(dy))])
    }

    ///
    /// Fills a six-pointed star made from two overlapping triangles
    ///
    pub fn draw_six_star(&mut self, x: i32, y: i32, radius: i32) -> &mut Self {
        self.draw_star_triangle(x, y, radius)
            .draw_inverted_triangle(x, y, radius)
    }

    /// Offsets of the lower corners of an equilateral triangle from its center
    fn triangle_offsets(radius: i32) -> (i32, i32) {
        let radius = radius as f32;
        ((radius * (PI / 6.0).cos()) as i32, (radius * (PI / 6.0).sin()) as i32)
    }

    ///
    /// Draws the outline of a shape, offset by `(x, y)`. The shape is always closed.
    ///
    pub fn draw_shape(&mut self, shape: &dyn Shape, x: i32, y: i32) -> &mut Self {
        let points = shape_pixel_points(shape, x, y);
        self.draw_polygon(&points)
    }

    ///
    /// Draws a path as an open polyline, offset by `(x, y)`
    ///
    pub fn draw_path(&mut self, path: &Path, x: i32, y: i32) -> &mut Self {
        let points = shape_pixel_points(path, x, y);
        self.draw_polyline(&points)
    }

    ///
    /// Fills a shape with the current colour, offset by `(x, y)`
    ///
    pub fn fill_shape(&mut self, shape: &dyn Shape, x: i32, y: i32) -> &mut Self {
        let points = shape_pixel_points(shape, x, y);
        self.fill_polygon(&points)
    }

    ///
    /// Fills a shape with the pixels at the same positions in another pixmap
    ///
    pub fn fill_shape_from(&mut self, source: &Pixmap, shape: &dyn Shape, x: i32, y: i32) -> &mut Self {
        let points = self.device_points(&shape_pixel_points(shape, x, y));

        self.draw(|ctxt| {
            let limit = ctxt.plot_bounds();

            for_each_polygon_pixel(&points, &limit, |px, py| {
                if let Some(pixel) = source.get_pixel(px, py) {
                    ctxt.write(px, py, pixel);
                }
            });
        })
    }
}
