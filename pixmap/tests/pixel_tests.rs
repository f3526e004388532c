use flo_pixmap::*;

#[test]
pub fn fill_rect_then_read_pixel() {
    let mut pixmap = Pixmap::new(4, 4, true);
    pixmap.fill_rect_color(0, 0, 4, 4, 0xffff_0000);

    assert!(pixmap.get_pixel(2, 2) == Some(0xffff_0000));
    assert!(pixmap.pixels().iter().all(|pixel| *pixel == 0xffff_0000));
}

#[test]
pub fn fill_rect_color_leaves_current_color() {
    let mut pixmap = Pixmap::new(4, 4, true);
    pixmap.set_color(0xff00_ff00);
    pixmap.fill_rect_color(0, 0, 2, 2, 0xffff_0000);

    assert!(pixmap.color() == 0xff00_ff00);
}

#[test]
pub fn out_of_range_pixels() {
    let mut pixmap = Pixmap::new(4, 4, true);
    let before = pixmap.clone();

    pixmap.put_pixel(-1, 0, 0xffff_ffff)
        .put_pixel(4, 0, 0xffff_ffff)
        .put_pixel(0, 100, 0xffff_ffff);

    assert!(pixmap == before);
    assert!(pixmap.get_pixel(-1, 0).is_none());
    assert!(pixmap.get_pixel(4, 3).is_none());
    assert!(pixmap.get_pixel(3, 3) == Some(0));
}

#[test]
pub fn clip_blocks_put_pixel() {
    let mut pixmap = Pixmap::new(8, 8, true);
    pixmap.set_clip(2, 2, 2, 2);

    pixmap.put_pixel(0, 0, 0xffff_0000);
    assert!(pixmap.get_pixel(0, 0) == Some(0));

    pixmap.put_pixel(2, 2, 0xffff_0000);
    assert!(pixmap.get_pixel(2, 2) == Some(0xffff_0000));
}

#[test]
pub fn writes_outside_clip_change_nothing() {
    let mut pixmap = Pixmap::new(12, 12, true);
    pixmap.set_color(0xff10_2030).fill();
    pixmap.set_clip(3, 4, 5, 2);

    let before = pixmap.pixels().to_vec();

    for y in -2..14 {
        for x in -2..14 {
            if x >= 3 && x < 8 && y >= 4 && y < 6 { continue; }
            pixmap.put_pixel(x, y, 0xffff_ffff);
        }
    }

    assert!(pixmap.pixels() == &before[..]);
}

#[test]
pub fn clip_rect_intersects() {
    let mut pixmap = Pixmap::new(8, 8, true);
    pixmap.set_clip(0, 0, 4, 4)
        .clip_rect(2, 2, 4, 4);

    assert!(pixmap.clip_bounds() == RectI::new(2, 2, 2, 2), "{:?}", pixmap.clip_bounds());

    pixmap.set_color(0xffff_ffff).fill_rect(0, 0, 8, 8);
    assert!(pixmap.pixels().iter().filter(|pixel| **pixel != 0).count() == 4);
}

#[test]
pub fn translation_moves_drawing() {
    let mut pixmap = Pixmap::new(8, 8, true);
    pixmap.translate(2, 1)
        .translate(1, 1)
        .set_color(0xff00_00ff)
        .fill_rect(0, 0, 1, 1);

    assert!(pixmap.translation() == (3, 2));
    assert!(pixmap.get_pixel(3, 2) == Some(0xff00_00ff));
    assert!(pixmap.pixels().iter().filter(|pixel| **pixel != 0).count() == 1);
}

#[test]
pub fn composite_source_in_only_draws_over_pixels() {
    let mut pixmap = Pixmap::new(4, 1, true);
    pixmap.put_pixel(1, 0, 0xff00_0000);

    pixmap.set_composite(CompositeMode::SourceIn)
        .set_color(0xffff_0000)
        .fill_rect(0, 0, 4, 1);

    assert!(pixmap.pixels() == &[0, 0xffff_0000, 0, 0]);
}

#[test]
pub fn composite_source_out_only_draws_over_sentinel() {
    let mut pixmap = Pixmap::new(4, 1, true);
    pixmap.put_pixel(1, 0, 0xff00_0000);

    pixmap.set_composite(CompositeMode::SourceOut)
        .set_color(0xffff_0000)
        .fill_rect(0, 0, 4, 1);

    assert!(pixmap.pixels() == &[0xffff_0000, 0xff00_0000, 0xffff_0000, 0xffff_0000]);
}

#[test]
pub fn alpha_multiplier_applies_to_writes() {
    let mut pixmap = Pixmap::new(2, 1, true);
    pixmap.set_alpha(0.5)
        .put_pixel(0, 0, 0xffff_0000);

    assert!(pixmap.get_pixel(0, 0) == Some(0x7fff_0000), "{:x?}", pixmap.get_pixel(0, 0));
}

#[test]
pub fn set_data_rejects_wrong_length() {
    let mut pixmap = Pixmap::new(4, 4, true);

    assert!(pixmap.set_data(vec![0; 15]) == Err(PixmapError::DataLength { expected: 16, actual: 15 }));
    assert!(pixmap.set_data(vec![0xff00_0000; 16]).is_ok());
    assert!(pixmap.get_pixel(3, 3) == Some(0xff00_0000));
}

#[test]
pub fn from_pixels_checks_length() {
    assert!(Pixmap::from_pixels(vec![0; 5], 2, 2, true).is_err());
    assert!(Pixmap::from_pixels(vec![0; 4], 2, 2, true).is_ok());
}

#[test_log::test]
pub fn closed_pixmap_ignores_drawing() {
    let mut pixmap = Pixmap::new(4, 4, true);
    pixmap.close();

    pixmap.set_color(0xffff_ffff)
        .fill_rect(0, 0, 4, 4)
        .draw_line(0, 0, 3, 3)
        .fill_oval(0, 0, 4, 4)
        .put_pixel(1, 1, 0xffff_ffff)
        .fill()
        .grey_scale(1.0);

    assert!(pixmap.is_closed());
    assert!(pixmap.get_pixel(1, 1).is_none());
    assert!(pixmap.pixels().is_empty());
    assert!(pixmap.set_data(vec![0; 16]) == Err(PixmapError::Closed));
    assert!(pixmap.cpy().is_err());
}

#[test]
pub fn is_transparent_rules() {
    let mut pixmap = Pixmap::new(2, 1, true);
    pixmap.put_pixel(1, 0, 0xff00_0000);

    assert!(pixmap.is_transparent(0, 0));
    assert!(!pixmap.is_transparent(1, 0));
    assert!(pixmap.is_transparent(5, 0));

    let opaque = Pixmap::new(2, 1, false);
    assert!(!opaque.is_transparent(0, 0));
}

#[test]
pub fn color_empty() {
    let mut pixmap = Pixmap::new(3, 3, true);
    assert!(pixmap.is_color_empty());

    pixmap.put_pixel(1, 1, 0x0000_0001);
    assert!(!pixmap.is_color_empty());
}

#[test]
pub fn rgb_region_round_trip() {
    let mut pixmap  = Pixmap::new(4, 4, true);
    let region      = vec![0xff00_0001, 0xff00_0002, 0xff00_0003, 0xff00_0004];

    pixmap.set_rgb_region(1, 1, 2, 2, &region, 0, 2);

    assert!(pixmap.get_rgb_region(1, 1, 2, 2) == region);
    assert!(pixmap.get_rgb_region(3, 3, 2, 1) == vec![0, 0xffff_ffff]);
}

#[test]
pub fn clear_draw_ignores_clip() {
    let mut pixmap = Pixmap::new(4, 4, true);
    pixmap.set_clip(0, 0, 1, 1)
        .set_background(0xff11_2233)
        .clear_background();

    assert!(pixmap.pixels().iter().all(|pixel| *pixel == 0xff11_2233));

    pixmap.clear();
    assert!(pixmap.pixels().iter().all(|pixel| *pixel == 0));
}

#[test]
pub fn replace_color_swaps_exact_matches() {
    let mut pixmap = Pixmap::new(3, 1, true);
    pixmap.put_pixel(0, 0, 0xff00_0000).put_pixel(1, 0, 0xff00_0001);

    pixmap.replace_color(0xff00_0000, 0xffff_ffff);

    assert!(pixmap.pixels() == &[0xffff_ffff, 0xff00_0001, 0]);
}

#[test]
pub fn equality_compares_pixels() {
    let mut a = Pixmap::new(2, 2, true);
    let b = Pixmap::new(2, 2, true);
    let c = Pixmap::new(2, 2, false);

    assert!(a == b);
    assert!(a != c);

    a.put_pixel(0, 0, 1);
    assert!(a != b);
}

#[test]
pub fn pixmaps_without_pixels_are_empty() {
    assert!(Pixmap::new(0, 5, true).is_empty());
    assert!(Pixmap::new(5, 0, true).is_empty());
    assert!(Pixmap::new(0, 0, false).is_empty());
    assert!(!Pixmap::new(1, 1, true).is_empty());
}
