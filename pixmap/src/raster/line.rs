use super::plot_target::*;

use itertools::*;

///
/// Draws a line between two points (inclusive at both ends)
///
/// The same set of pixels is produced whichever order the end points are supplied in.
///
pub fn draw_line<TTarget: PlotTarget + ?Sized>(target: &mut TTarget, x1: i32, y1: i32, x2: i32, y2: i32) {
    let dx = x2 as i64 - x1 as i64;
    let dy = y2 as i64 - y1 as i64;

    if dx == 0 {
        // Vertical lines (including single points) are drawn as spans
        target.plot_vspan(x1, y1.min(y2), y1.max(y2));
    } else if dy == 0 {
        target.plot_span(x1.min(x2), x1.max(x2), y1);
    } else {
        // Work along the major axis, swapping x and y if the line is steep
        let swap_xy = dy.abs() > dx.abs();
        let (mut x1, mut y1, mut x2, mut y2) = if swap_xy { (y1, x1, y2, x2) } else { (x1, y1, x2, y2) };

        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
            std::mem::swap(&mut y1, &mut y2);
        }

        let dx              = x2 as i64 - x1 as i64;
        let dy              = y2 as i64 - y1 as i64;
        let negative_slope  = dy < 0;
        let dy              = dy.abs();

        let incr_h          = 2 * dy;
        let incr_hv         = 2 * (dy - dx);
        let mut d           = 2 * dy - dx;

        let mut x           = x1;
        let mut y           = y1;

        let mut plot        = |x: i32, y: i32| if swap_xy { target.plot(y, x) } else { target.plot(x, y) };

        plot(x, y);
        while x < x2 {
            if d <= 0 {
                d += incr_h;
            } else {
                d += incr_hv;
                y += if negative_slope { -1 } else { 1 };
            }
            x += 1;

            plot(x, y);
        }
    }
}

///
/// Draws the even-numbered pieces of a line divided into `divisions` equal parts
///
/// Each piece stops one pixel before the next piece starts, except for the last piece which includes the end point.
/// Pieces that are shorter than a pixel are skipped.
///
pub fn draw_dash_line<TTarget: PlotTarget + ?Sized>(target: &mut TTarget, x1: i32, y1: i32, x2: i32, y2: i32, divisions: i32) {
    if divisions <= 0 {
        return;
    }

    let dx      = x2 as i128 - x1 as i128;
    let dy      = y2 as i128 - y1 as i128;
    let length  = dx.abs().max(dy.abs());

    if length == 0 {
        target.plot(x1, y1);
        return;
    }

    // Position along the line for a distance along the major axis (always between the two end points)
    let point_at = |t: i128| ((x1 as i128 + dx * t / length) as i32, (y1 as i128 + dy * t / length) as i32);

    for piece in (0..divisions).step_by(2) {
        let piece   = piece as i128;
        let pieces  = divisions as i128;
        let start   = piece * length / pieces;
        let end     = if piece + 1 >= pieces { length } else { (piece + 1) * length / pieces - 1 };

        if end < start {
            continue;
        }

        let (sx, sy) = point_at(start);
        let (ex, ey) = point_at(end);
        draw_line(target, sx, sy, ex, ey);
    }
}

///
/// Draws lines joining a list of points, optionally joining the last point back to the first
///
pub fn draw_polyline<TTarget: PlotTarget + ?Sized>(target: &mut TTarget, points: &[(i32, i32)], closed: bool) {
    match points.len() {
        0 => { }
        1 => { target.plot(points[0].0, points[0].1); }
        _ => {
            if closed {
                for ((x1, y1), (x2, y2)) in points.iter().copied().circular_tuple_windows() {
                    draw_line(target, x1, y1, x2, y2);
                }
            } else {
                for ((x1, y1), (x2, y2)) in points.iter().copied().tuple_windows() {
                    draw_line(target, x1, y1, x2, y2);
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::*;

    use std::collections::{HashSet};

    /// Records the pixels that a rasterizer plots
    struct PixelSet(HashSet<(i32, i32)>);

    impl PlotTarget for PixelSet {
        fn plot_bounds(&self) -> RectI { RectI::new(-100, -100, 200, 200) }
        fn plot(&mut self, x: i32, y: i32) { self.0.insert((x, y)); }
    }

    fn line_pixels(x1: i32, y1: i32, x2: i32, y2: i32) -> HashSet<(i32, i32)> {
        let mut pixels = PixelSet(HashSet::new());
        draw_line(&mut pixels, x1, y1, x2, y2);
        pixels.0
    }

    #[test]
    fn lines_are_symmetric() {
        for (x1, y1, x2, y2) in [(0, 0, 10, 0), (0, 0, 10, 3), (0, 0, 3, 10), (2, 9, 7, -4), (-5, 5, 5, -5), (0, 0, 0, 7)] {
            assert!(line_pixels(x1, y1, x2, y2) == line_pixels(x2, y2, x1, y1), "{:?}", (x1, y1, x2, y2));
        }
    }

    #[test]
    fn line_includes_end_points() {
        let pixels = line_pixels(1, 2, 9, 5);

        assert!(pixels.contains(&(1, 2)));
        assert!(pixels.contains(&(9, 5)));
        assert!(pixels.len() == 9);
    }

    #[test]
    fn dash_line_draws_even_pieces() {
        let mut pixels = PixelSet(HashSet::new());
        draw_dash_line(&mut pixels, 0, 0, 10, 0, 10);

        let mut xs = pixels.0.iter().map(|(x, _)| *x).collect::<Vec<_>>();
        xs.sort();
        assert!(xs == vec![0, 2, 4, 6, 8], "{:?}", xs);
    }

    #[test]
    fn closed_polyline_returns_to_start() {
        let mut pixels = PixelSet(HashSet::new());
        draw_polyline(&mut pixels, &[(0, 0), (4, 0), (4, 4)], true);

        assert!(pixels.0.contains(&(2, 2)));
        assert!(pixels.0.contains(&(4, 2)));
    }

    #[test]
    fn extreme_lines_do_not_overflow() {
        let mut pixels = PixelSet(HashSet::new());

        draw_line(&mut pixels, i32::MIN, 0, i32::MAX, 0);
        draw_line(&mut pixels, 0, i32::MIN, 0, i32::MAX);
        draw_dash_line(&mut pixels, i32::MIN, 3, i32::MAX, 3, 4);

        assert!(pixels.0.contains(&(0, 0)));
        assert!(pixels.0.contains(&(0, 99)));

        // The even-numbered quarters of the dashed line are the far left one and the one starting just left of 0
        assert!(pixels.0.contains(&(0, 3)));
        assert!(pixels.0.contains(&(99, 3)));
        assert!(!pixels.0.contains(&(-100, 3)));
    }
}
