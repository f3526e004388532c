use super::rect::*;

use itertools::*;

///
/// Finds the bounding box of a set of points
///
/// The width and height are the distance between the extreme points, so the right and bottom-most points are
/// just outside of the box (matching the edge rules used by `polygon_contains`). An empty set of points produces
/// an empty rectangle.
///
pub fn bounding_box(points: &[(i32, i32)]) -> RectI {
    if points.is_empty() {
        return RectI::default();
    }

    let (mut min_x, mut min_y) = points[0];
    let (mut max_x, mut max_y) = points[0];

    for (x, y) in points.iter().skip(1) {
        min_x = min_x.min(*x);
        min_y = min_y.min(*y);
        max_x = max_x.max(*x);
        max_y = max_y.max(*y);
    }

    RectI::new(min_x, min_y, max_x.saturating_sub(min_x), max_y.saturating_sub(min_y))
}

///
/// Even-odd point-in-polygon test for a pixel position, using a ray cast towards negative x
///
/// `bounds` should be the bounding box of the polygon (as returned by `bounding_box`), or a subset of it: points
/// outside of the bounds are always treated as outside the polygon. Polygons with fewer than 3 points contain nothing.
///
pub fn polygon_contains(points: &[(i32, i32)], bounds: &RectI, x: i32, y: i32) -> bool {
    if points.len() <= 2 || !bounds.contains(x, y) {
        return false;
    }

    let x       = x as f64;
    let y       = y as f64;
    let mut hit = false;

    for (&(last_x, last_y), &(cur_x, cur_y)) in points.iter().circular_tuple_windows() {
        // Horizontal edges never cross the ray
        if cur_y == last_y {
            continue;
        }

        let left_x = if cur_x < last_x {
            if x >= last_x as f64 { continue; }
            cur_x
        } else {
            if x >= cur_x as f64 { continue; }
            last_x
        };

        let (test1, test2) = if cur_y < last_y {
            if y < cur_y as f64 || y >= last_y as f64 { continue; }
            if x < left_x as f64 { hit = !hit; continue; }

            (x - cur_x as f64, y - cur_y as f64)
        } else {
            if y < last_y as f64 || y >= cur_y as f64 { continue; }
            if x < left_x as f64 { hit = !hit; continue; }

            (x - last_x as f64, y - last_y as f64)
        };

        if test1 < (test2 / (last_y as f64 - cur_y as f64) * (last_x as f64 - cur_x as f64)) {
            hit = !hit;
        }
    }

    hit
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn square_contains_interior() {
        let square  = [(0, 0), (10, 0), (10, 10), (0, 10)];
        let bounds  = bounding_box(&square);

        assert!(bounds == RectI::new(0, 0, 10, 10));
        assert!(polygon_contains(&square, &bounds, 0, 0));
        assert!(polygon_contains(&square, &bounds, 5, 5));
        assert!(polygon_contains(&square, &bounds, 9, 9));
        assert!(!polygon_contains(&square, &bounds, 10, 5));
        assert!(!polygon_contains(&square, &bounds, -1, 5));
    }

    #[test]
    fn triangle_excludes_far_corner() {
        let triangle    = [(0, 0), (10, 0), (0, 10)];
        let bounds      = bounding_box(&triangle);

        assert!(polygon_contains(&triangle, &bounds, 1, 1));
        assert!(!polygon_contains(&triangle, &bounds, 8, 8));
    }

    #[test]
    fn degenerate_polygons_are_empty() {
        let line = [(0, 0), (10, 10)];
        assert!(!polygon_contains(&line, &bounding_box(&line), 5, 5));
        assert!(bounding_box(&[]).is_empty());
    }
}
