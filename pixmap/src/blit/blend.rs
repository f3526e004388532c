use crate::color::*;

///
/// Blends a source pixel over a destination pixel
///
/// Each colour channel moves towards the source by the source alpha, and the alpha channel is combined so that the
/// result is at least as opaque as either input. A destination with no alpha is replaced by the source outright, and
/// blending two fully transparent pixels produces the transparency sentinel (or 0 if there is no sentinel).
///
pub fn blend_over(src: u32, dst: u32, transparent: Option<u32>) -> u32 {
    let src_a = alpha_of(src) as i32;
    let dst_a = alpha_of(dst) as i32;

    if src_a == 0 && dst_a == 0 {
        return transparent.unwrap_or(TRANSPARENT);
    }

    if dst_a == 0 {
        return src;
    }

    let channel = |src: u8, dst: u8| {
        let src = src as i32;
        let dst = dst as i32;

        (dst + src_a * (src - dst) / 255) as u8
    };

    let r       = channel(red_of(src), red_of(dst));
    let g       = channel(green_of(src), green_of(dst));
    let b       = channel(blue_of(src), blue_of(dst));
    let alpha   = (1.0 - (1.0 - (src_a as f32) / 255.0) * (1.0 - (dst_a as f32) / 255.0)) * 255.0;

    argb(clamp_to_byte(alpha), r, g, b)
}
