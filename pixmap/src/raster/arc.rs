use super::ellipse::*;
use super::plot_target::*;
use crate::geometry::*;

use smallvec::*;

///
/// An arc sweep after normalisation
///
/// Angles are in degrees, with 0 at 3 o'clock and positive sweeps running anticlockwise on the screen.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArcSweep {
    /// The arc covers the entire ellipse
    Full,

    /// The arc starts at `start` (0-359) and covers `sweep` degrees anticlockwise (1-359)
    Partial { start: i32, sweep: i32 },
}

impl ArcSweep {
    ///
    /// Normalises a start angle and a sweep, returning None if the arc covers nothing
    ///
    /// A negative sweep runs clockwise from the start angle, which is the same as a positive sweep from the end angle.
    ///
    pub fn normalize(start: i32, sweep: i32) -> Option<ArcSweep> {
        if sweep == 0 {
            return None;
        }

        let (start, sweep) = if sweep < 0 { (start + sweep, -sweep) } else { (start, sweep) };

        if sweep >= 360 {
            Some(ArcSweep::Full)
        } else {
            Some(ArcSweep::Partial { start: start.rem_euclid(360), sweep: sweep })
        }
    }
}

///
/// A pie slice polygon has at most 7 points: the center, the two points where the slice meets the bounding box and
/// up to four corners of the bounding box
///
pub type PieSlice = SmallVec<[(i32, i32); 7]>;

///
/// Works out where a ray from the center at a particular angle leaves a box
///
fn ray_exit(center: (f32, f32), angle: f32, bounds: &RectI) -> (i32, i32) {
    let radians     = angle.to_radians();
    let (dx, dy)    = (radians.cos(), -radians.sin());
    let (cx, cy)    = center;

    let mut t = f32::MAX;
    if dx > 1e-6        { t = t.min((bounds.right() as f32 - cx) / dx); }
    else if dx < -1e-6  { t = t.min((bounds.x as f32 - cx) / dx); }
    if dy > 1e-6        { t = t.min((bounds.bottom() as f32 - cy) / dy); }
    else if dy < -1e-6  { t = t.min((bounds.y as f32 - cy) / dy); }

    ((cx + dx*t).round() as i32, (cy + dy*t).round() as i32)
}

///
/// Angle from the center to a point, in degrees (0-360, anticlockwise on the screen)
///
#[inline]
fn angle_to(center: (i32, i32), point: (i32, i32)) -> f32 {
    let dx = point.0 as f32 - center.0 as f32;
    let dy = center.1 as f32 - point.1 as f32;

    dy.atan2(dx).to_degrees().rem_euclid(360.0)
}

///
/// Creates the polygon that bounds a pie slice of an ellipse
///
/// The slice starts at the center, runs out to the edge of `bounds` at the start angle, follows the edge of the box
/// around any corners the sweep passes and returns along the end angle.
///
pub fn pie_slice_polygon(center: (i32, i32), bounds: &RectI, start: i32, sweep: i32) -> PieSlice {
    let mut slice   = PieSlice::new();
    let center_f    = (center.0 as f32, center.1 as f32);

    slice.push(center);
    slice.push(ray_exit(center_f, start as f32, bounds));

    // Corners that the sweep passes
    let corners = [
        (bounds.right(), bounds.y),
        (bounds.x, bounds.y),
        (bounds.x, bounds.bottom()),
        (bounds.right(), bounds.bottom()),
    ];
    let mut passed = corners.iter()
        .map(|corner| ((angle_to(center, *corner) - start as f32).rem_euclid(360.0), *corner))
        .filter(|(offset, _)| *offset > 0.0 && *offset < sweep as f32)
        .collect::<SmallVec<[_; 4]>>();
    passed.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    slice.extend(passed.into_iter().map(|(_, corner)| corner));

    let end = ray_exit(center_f, (start + sweep) as f32, bounds);
    if slice.last() != Some(&end) {
        slice.push(end);
    }

    slice
}

///
/// The pie slice for an arc of the ellipse in the rectangle `(x, y, width, height)`
///
fn arc_slice(x: i32, y: i32, width: i32, height: i32, start: i32, sweep: i32) -> (PieSlice, RectI) {
    let center  = (x.saturating_add(width/2), y.saturating_add(height/2));
    let bounds  = RectI::new(x.saturating_sub(1), y.saturating_sub(1), width.saturating_add(2), height.saturating_add(2));
    let slice   = pie_slice_polygon(center, &bounds, start, sweep);
    let bbox    = bounding_box(&slice);

    (slice, bbox)
}

///
/// Draws the outline of part of an ellipse
///
/// Partial sweeps keep the outline pixels that are inside the pie slice polygon. The slice's bounding box excludes
/// its right and bottom edges, so a sweep that ends on the 0 degree line leaves out the pixel where the outline
/// crosses the center row on the right (`(x + width, y + height/2)` for even heights).
///
pub fn draw_arc<TTarget: PlotTarget + ?Sized>(target: &mut TTarget, x: i32, y: i32, width: i32, height: i32, start: i32, sweep: i32) {
    if !ellipse_touches(x, y, width, height, &target.plot_bounds()) {
        return;
    }

    match ArcSweep::normalize(start, sweep) {
        None                                => { }
        Some(ArcSweep::Full)                => { draw_oval(target, x, y, width, height); }
        Some(ArcSweep::Partial { start, sweep }) => {
            let (slice, bbox)   = arc_slice(x, y, width, height, start, sweep);
            let bounds          = bbox.intersection(&target.plot_bounds());

            walk_ellipse(x, y, width, height, EllipseMode::BoundaryOnly, |step| {
                for (px, py) in [(step.x_left, step.y_top), (step.x_right, step.y_top), (step.x_left, step.y_bottom), (step.x_right, step.y_bottom)] {
                    if polygon_contains(&slice, &bounds, px, py) {
                        target.plot(px, py);
                    }
                }
            });
        }
    }
}

///
/// Fills a pie slice of an ellipse
///
pub fn fill_arc<TTarget: PlotTarget + ?Sized>(target: &mut TTarget, x: i32, y: i32, width: i32, height: i32, start: i32, sweep: i32) {
    let limit = target.plot_bounds();
    fill_arc_within(target, x, y, width, height, start, sweep, &limit);
}

///
/// Fills a pie slice of an ellipse, only writing pixels that are inside `limit`
///
pub fn fill_arc_within<TTarget: PlotTarget + ?Sized>(target: &mut TTarget, x: i32, y: i32, width: i32, height: i32, start: i32, sweep: i32, limit: &RectI) {
    if !ellipse_touches(x, y, width, height, &limit.intersection(&target.plot_bounds())) {
        return;
    }

    match ArcSweep::normalize(start, sweep) {
        None                                => { }
        Some(ArcSweep::Full)                => {
            walk_ellipse(x, y, width, height, EllipseMode::SpanFill, |step| {
                fill_limited_span(target, limit, step.x_left, step.x_right, step.y_top);
                if step.y_top != step.y_bottom {
                    fill_limited_span(target, limit, step.x_left, step.x_right, step.y_bottom);
                }
            });
        }
        Some(ArcSweep::Partial { start, sweep }) => {
            let (slice, bbox)   = arc_slice(x, y, width, height, start, sweep);
            let bounds          = bbox.intersection(limit).intersection(&target.plot_bounds());

            let fill_row = |target: &mut TTarget, x_left: i32, x_right: i32, y: i32| {
                for px in x_left.max(bounds.x)..=x_right.min(bounds.right().saturating_sub(1)) {
                    if polygon_contains(&slice, &bounds, px, y) {
                        target.plot(px, y);
                    }
                }
            };

            walk_ellipse(x, y, width, height, EllipseMode::SpanFill, |step| {
                fill_row(target, step.x_left, step.x_right, step.y_top);
                if step.y_top != step.y_bottom {
                    fill_row(target, step.x_left, step.x_right, step.y_bottom);
                }
            });
        }
    }
}

#[inline]
fn fill_limited_span<TTarget: PlotTarget + ?Sized>(target: &mut TTarget, limit: &RectI, x1: i32, x2: i32, y: i32) {
    if y < limit.y || y >= limit.bottom() { return; }
    target.plot_span(x1.max(limit.x), x2.min(limit.right().saturating_sub(1)), y);
}

#[cfg(test)]
mod test {
    use super::*;

    use std::collections::{HashSet};

    struct PixelSet(HashSet<(i32, i32)>);

    impl PlotTarget for PixelSet {
        fn plot_bounds(&self) -> RectI { RectI::new(-100, -100, 200, 200) }
        fn plot(&mut self, x: i32, y: i32) { self.0.insert((x, y)); }
    }

    #[test]
    fn normalize_sweeps() {
        assert!(ArcSweep::normalize(10, 0).is_none());
        assert!(ArcSweep::normalize(0, 360) == Some(ArcSweep::Full));
        assert!(ArcSweep::normalize(90, -90) == Some(ArcSweep::Partial { start: 0, sweep: 90 }));
        assert!(ArcSweep::normalize(-30, 60) == Some(ArcSweep::Partial { start: 330, sweep: 60 }));
        assert!(ArcSweep::normalize(400, 10) == Some(ArcSweep::Partial { start: 40, sweep: 10 }));
    }

    #[test]
    fn quarter_slice_polygon() {
        let slice = pie_slice_polygon((10, 10), &RectI::new(-1, -1, 22, 22), 0, 90);

        assert!(slice.as_slice() == &[(10, 10), (21, 10), (21, -1), (10, -1)], "{:?}", slice);
    }

    #[test]
    fn quarter_arc_fills_top_right() {
        let mut pixels = PixelSet(HashSet::new());
        fill_arc(&mut pixels, 0, 0, 20, 20, 0, 90);

        assert!(!pixels.0.is_empty());
        assert!(pixels.0.iter().all(|(x, y)| *x >= 10 && *y <= 10), "{:?}", pixels.0);
        assert!(pixels.0.contains(&(15, 5)));
    }

    #[test]
    fn full_sweep_matches_oval() {
        let mut arc     = PixelSet(HashSet::new());
        let mut oval    = PixelSet(HashSet::new());
        fill_arc(&mut arc, 2, 3, 15, 12, 45, 360);
        fill_oval(&mut oval, 2, 3, 15, 12);

        assert!(arc.0 == oval.0);
    }

    #[test]
    fn huge_arcs_are_clipped() {
        let mut outline = PixelSet(HashSet::new());
        let mut filled  = PixelSet(HashSet::new());
        draw_arc(&mut outline, -30000, -30000, 70000, 70000, 90, 90);
        fill_arc(&mut filled, -30000, -30000, 70000, 70000, 90, 90);

        // The outline of the quarter is far outside the target, but the slice covers all of it
        assert!(outline.0.is_empty());
        assert!(filled.0.len() == 200 * 200, "{}", filled.0.len());
    }

    #[test]
    fn quarter_arc_leaves_out_center_row_end() {
        let mut pixels = PixelSet(HashSet::new());
        draw_arc(&mut pixels, 0, 0, 20, 20, 0, 90);

        assert!(pixels.0.contains(&(10, 0)));
        assert!(!pixels.0.contains(&(20, 10)));
    }
}
