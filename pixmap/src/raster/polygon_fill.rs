use super::line::*;
use super::plot_target::*;
use crate::geometry::*;

///
/// Calls `pixel` for every pixel inside a polygon that's also inside `limit`
///
/// Every pixel in the bounding box of the polygon is tested against every edge, so this is best suited to shapes
/// that are fairly small.
///
pub fn for_each_polygon_pixel(points: &[(i32, i32)], limit: &RectI, mut pixel: impl FnMut(i32, i32)) {
    if points.len() < 3 {
        return;
    }

    let bounds = bounding_box(points).intersection(limit);

    for y in bounds.y..bounds.bottom() {
        for x in bounds.x..bounds.right() {
            if polygon_contains(points, &bounds, x, y) {
                pixel(x, y);
            }
        }
    }
}

///
/// Fills a polygon using the even-odd rule
///
pub fn fill_polygon<TTarget: PlotTarget + ?Sized>(target: &mut TTarget, points: &[(i32, i32)]) {
    let limit = target.plot_bounds();
    for_each_polygon_pixel(points, &limit, |x, y| target.plot(x, y));
}

///
/// Draws the outline of a polygon
///
#[inline]
pub fn draw_polygon<TTarget: PlotTarget + ?Sized>(target: &mut TTarget, points: &[(i32, i32)]) {
    draw_polyline(target, points, true);
}

#[cfg(test)]
mod test {
    use super::*;

    use std::collections::{HashSet};

    struct PixelSet(HashSet<(i32, i32)>);

    impl PlotTarget for PixelSet {
        fn plot_bounds(&self) -> RectI { RectI::new(0, 0, 50, 50) }
        fn plot(&mut self, x: i32, y: i32) { self.0.insert((x, y)); }
    }

    #[test]
    fn fill_square() {
        let mut pixels = PixelSet(HashSet::new());
        fill_polygon(&mut pixels, &[(2, 2), (6, 2), (6, 6), (2, 6)]);

        // Right and bottom edges are outside the shape
        assert!(pixels.0.len() == 16, "{}", pixels.0.len());
        assert!(pixels.0.contains(&(2, 2)));
        assert!(!pixels.0.contains(&(6, 6)));
    }

    #[test]
    fn fill_is_clipped() {
        let mut pixels = PixelSet(HashSet::new());
        fill_polygon(&mut pixels, &[(-10, -10), (10, -10), (10, 10), (-10, 10)]);

        assert!(pixels.0.len() == 100);
        assert!(pixels.0.iter().all(|(x, y)| *x >= 0 && *y >= 0));
    }

    #[test]
    fn degenerate_polygons_fill_nothing() {
        let mut pixels = PixelSet(HashSet::new());
        fill_polygon(&mut pixels, &[]);
        fill_polygon(&mut pixels, &[(1, 1), (5, 5)]);
        fill_polygon(&mut pixels, &[(1, 1), (5, 1), (9, 1)]);

        assert!(pixels.0.is_empty());
    }
}
