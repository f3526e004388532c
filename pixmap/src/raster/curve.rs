use super::line::*;
use super::plot_target::*;

///
/// Draws a cubic bezier curve by stepping along it with forward differences
///
/// The curve is flattened into `segments` straight lines, followed by a final line to the end point. With no
/// segments, a single straight line is drawn from the start to the end point.
///
pub fn draw_curve<TTarget: PlotTarget + ?Sized>(target: &mut TTarget, start: (f32, f32), control1: (f32, f32), control2: (f32, f32), end: (f32, f32), segments: i32) {
    let (x1, y1)    = start;
    let (cx1, cy1)  = control1;
    let (cx2, cy2)  = control2;
    let (x2, y2)    = end;

    if segments <= 0 {
        draw_line(target, x1 as i32, y1 as i32, x2 as i32, y2 as i32);
        return;
    }

    let step    = 1.0 / (segments as f32);
    let step2   = step * step;
    let step3   = step2 * step;

    let pre1    = 3.0 * step;
    let pre2    = 3.0 * step2;
    let pre4    = 6.0 * step2;
    let pre5    = 6.0 * step3;

    let tmp1x   = x1 - cx1 * 2.0 + cx2;
    let tmp1y   = y1 - cy1 * 2.0 + cy2;
    let tmp2x   = (cx1 - cx2) * 3.0 - x1 + x2;
    let tmp2y   = (cy1 - cy2) * 3.0 - y1 + y2;

    let mut fx      = x1;
    let mut fy      = y1;
    let mut dfx     = (cx1 - x1) * pre1 + tmp1x * pre2 + tmp2x * step3;
    let mut dfy     = (cy1 - y1) * pre1 + tmp1y * pre2 + tmp2y * step3;
    let mut ddfx    = tmp1x * pre4 + tmp2x * pre5;
    let mut ddfy    = tmp1y * pre4 + tmp2y * pre5;
    let dddfx       = tmp2x * pre5;
    let dddfy       = tmp2y * pre5;

    for _ in 0..segments {
        let (last_x, last_y) = (fx, fy);

        fx      += dfx;
        fy      += dfy;
        dfx     += ddfx;
        dfy     += ddfy;
        ddfx    += dddfx;
        ddfy    += dddfy;

        draw_line(target, last_x as i32, last_y as i32, fx as i32, fy as i32);
    }

    draw_line(target, fx as i32, fy as i32, x2 as i32, y2 as i32);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::*;

    struct Points(Vec<(i32, i32)>);

    impl PlotTarget for Points {
        fn plot_bounds(&self) -> RectI { RectI::new(-100, -100, 200, 200) }
        fn plot(&mut self, x: i32, y: i32) { self.0.push((x, y)); }
    }

    #[test]
    fn straight_curve_follows_line() {
        let mut points = Points(vec![]);
        draw_curve(&mut points, (0.0, 0.0), (10.0 / 3.0, 0.0), (20.0 / 3.0, 0.0), (10.0, 0.0), 8);

        assert!(points.0.iter().all(|(_, y)| *y == 0));
        assert!(points.0.contains(&(0, 0)));
        assert!(points.0.contains(&(10, 0)));
    }

    #[test]
    fn curve_passes_near_control_hull() {
        let mut points = Points(vec![]);
        draw_curve(&mut points, (0.0, 0.0), (0.0, 20.0), (20.0, 20.0), (20.0, 0.0), 16);

        // The midpoint of this curve is at (10, 15)
        assert!(points.0.iter().any(|(x, y)| (x-10).abs() <= 1 && (y-15).abs() <= 1));
        assert!(points.0.iter().all(|(_, y)| *y >= 0 && *y <= 15));
    }

    #[test]
    fn no_segments_draws_line() {
        let mut points = Points(vec![]);
        draw_curve(&mut points, (0.0, 0.0), (5.0, 5.0), (5.0, 5.0), (4.0, 0.0), 0);

        assert!(points.0.len() == 5);
    }
}
