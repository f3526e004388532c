use super::plot_target::*;
use crate::geometry::*;

///
/// How the ellipse walker reports the rows of an ellipse
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EllipseMode {
    /// Report every step around the boundary (for outlines)
    BoundaryOnly,

    /// Only report a step when it moves to a new row, so each row can be filled as a single span
    SpanFill,
}

///
/// A step of the ellipse walker: the four mirrored points `(x_left, y_top)`, `(x_right, y_top)`,
/// `(x_left, y_bottom)` and `(x_right, y_bottom)`
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EllipseStep {
    pub x_left:     i32,
    pub y_top:      i32,
    pub x_right:    i32,
    pub y_bottom:   i32,
}

///
/// Walks around the ellipse that fits the rectangle at `(x, y)` of size `width` x `height` using the midpoint method
///
/// The walker starts at the top of the ellipse and moves outwards one quadrant at a time, picking the move (along x,
/// along y or diagonally) whose decision value is closest to 0, and calls `step` with the position mirrored into all
/// four quadrants. Odd widths and heights are handled by shifting the right and bottom halves by one pixel.
///
/// Nothing is reported for rectangles with no area. The decision values are worked out in 128-bit arithmetic, which
/// is wide enough for any `i32` width and height.
///
pub fn walk_ellipse(x: i32, y: i32, width: i32, height: i32, mode: EllipseMode, mut step: impl FnMut(EllipseStep)) {
    if width <= 0 || height <= 0 {
        return;
    }

    let a           = width / 2;
    let b           = height / 2;
    let width_l     = width as i128;
    let height_l    = height as i128;
    let square_a    = width_l * width_l / 4;
    let square_b    = height_l * height_l / 4;
    let square_ab   = (width_l * width_l * height_l * height_l + 8) / 16;

    let center_x    = x.saturating_add(a);
    let center_y    = y.saturating_add(b);
    let delta_x     = width % 2;
    let delta_y     = height % 2;

    let mut current_x   = 0;
    let mut current_y   = b;

    let mut last_x1     = center_x - current_x;
    let mut last_x2     = center_x.saturating_add(current_x + delta_x);
    let mut last_y1     = center_y - current_y;
    let mut last_y2     = center_y.saturating_add(current_y + delta_y);

    while current_x <= a && current_y >= 0 {
        let cx          = current_x as i128;
        let cy          = current_y as i128;

        let delta_a     = (cx+1) * (cx+1) * square_b + cy * cy * square_a - square_ab;
        let delta_b     = (cx+1) * (cx+1) * square_b + (cy-1) * (cy-1) * square_a - square_ab;
        let delta_c     = cx * cx * square_b + (cy-1) * (cy-1) * square_a - square_ab;

        if delta_a <= 0 {
            current_x += 1;
        } else if delta_c >= 0 {
            current_y -= 1;
        } else {
            let min = delta_a.abs().min(delta_b.abs()).min(delta_c.abs());

            if min == delta_a.abs() {
                current_x += 1;
            } else if min == delta_c.abs() {
                current_y -= 1;
            } else {
                current_x += 1;
                current_y -= 1;
            }
        }

        let x1 = center_x.saturating_sub(current_x);
        let x2 = center_x.saturating_add(current_x + delta_x);
        let y1 = center_y.saturating_sub(current_y);
        let y2 = center_y.saturating_add(current_y + delta_y);

        if mode == EllipseMode::BoundaryOnly || last_y1 != y1 {
            step(EllipseStep { x_left: last_x1, y_top: last_y1, x_right: last_x2, y_bottom: last_y2 });

            last_y1 = y1;
            last_y2 = y2;
        }

        last_x1 = x1;
        last_x2 = x2;
    }

    // Rows in the middle of the ellipse are at the full width
    while last_y1 <= last_y2 {
        step(EllipseStep { x_left: center_x - a, y_top: last_y1, x_right: center_x.saturating_add(a + delta_x), y_bottom: last_y2 });

        last_y1 = last_y1.saturating_add(1);
        last_y2 = last_y2.saturating_sub(1);
    }
}

///
/// The pixels that the ellipse in the rectangle `(x, y, width, height)` can touch
///
/// The walker reaches `x + width` and `y + height`, so this is one pixel wider and taller than the rectangle.
///
#[inline]
pub fn ellipse_bounds(x: i32, y: i32, width: i32, height: i32) -> RectI {
    RectI::new(x, y, width.saturating_add(1), height.saturating_add(1))
}

///
/// True if an ellipse can put any pixels inside an area
///
#[inline]
pub fn ellipse_touches(x: i32, y: i32, width: i32, height: i32, area: &RectI) -> bool {
    !ellipse_bounds(x, y, width, height).intersection(area).is_empty()
}

///
/// Draws the outline of an ellipse
///
pub fn draw_oval<TTarget: PlotTarget + ?Sized>(target: &mut TTarget, x: i32, y: i32, width: i32, height: i32) {
    if !ellipse_touches(x, y, width, height, &target.plot_bounds()) {
        return;
    }

    walk_ellipse(x, y, width, height, EllipseMode::BoundaryOnly, |step| {
        target.plot(step.x_left, step.y_top);
        target.plot(step.x_right, step.y_top);
        target.plot(step.x_left, step.y_bottom);
        target.plot(step.x_right, step.y_bottom);
    });
}

///
/// Fills an ellipse
///
pub fn fill_oval<TTarget: PlotTarget + ?Sized>(target: &mut TTarget, x: i32, y: i32, width: i32, height: i32) {
    if !ellipse_touches(x, y, width, height, &target.plot_bounds()) {
        return;
    }

    walk_ellipse(x, y, width, height, EllipseMode::SpanFill, |step| {
        target.plot_span(step.x_left, step.x_right, step.y_top);

        if step.y_top != step.y_bottom {
            target.plot_span(step.x_left, step.x_right, step.y_bottom);
        }
    });
}
