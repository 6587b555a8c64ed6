//! Gradient backgrounds
//!
//! Every generator evaluates a ratio in `[0, 1]` for each pixel and linearly
//! interpolates between two anchor colors with it.

use image::{ImageBuffer, Rgb, RgbImage};

/// Create a radial gradient, `inner` at the canvas center fading to `outer`
/// at the corners
pub fn radial_gradient(width: u32, height: u32, inner: Rgb<u8>, outer: Rgb<u8>) -> RgbImage {
    let center_x = (width / 2) as f32;
    let center_y = (height / 2) as f32;
    let max_radius = (center_x * center_x + center_y * center_y).sqrt();

    ImageBuffer::from_fn(width, height, |x, y| {
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        let distance = (dx * dx + dy * dy).sqrt();

        // A 1x1 canvas has no corner distance
        let ratio = if max_radius > 0.0 {
            distance / max_radius
        } else {
            0.0
        };

        lerp_color(inner, outer, ratio)
    })
}

/// Create an eased top-to-bottom gradient
pub fn vertical_gradient(width: u32, height: u32, top: Rgb<u8>, bottom: Rgb<u8>) -> RgbImage {
    ImageBuffer::from_fn(width, height, |_, y| {
        let ratio = ease(y as f32 / height as f32);
        lerp_color(top, bottom, ratio)
    })
}

/// Create an eased gradient through three stops; the eased ratio crosses
/// `middle` at 0.5
pub fn vertical_gradient3(
    width: u32,
    height: u32,
    top: Rgb<u8>,
    middle: Rgb<u8>,
    bottom: Rgb<u8>,
) -> RgbImage {
    ImageBuffer::from_fn(width, height, |_, y| {
        let ratio = ease(y as f32 / height as f32);

        if ratio < 0.5 {
            lerp_color(top, middle, ratio * 2.0)
        } else {
            lerp_color(middle, bottom, (ratio - 0.5) * 2.0)
        }
    })
}

/// Cubic ease `r³(3 − 2r)`, fixed at 0 and 1
pub fn ease(ratio: f32) -> f32 {
    let ratio = ratio.clamp(0.0, 1.0);
    ratio * ratio * ratio * (3.0 - 2.0 * ratio)
}

/// Interpolate each channel between `from` and `to`, truncating toward zero
pub fn lerp_color(from: Rgb<u8>, to: Rgb<u8>, ratio: f32) -> Rgb<u8> {
    let ratio = ratio.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f32 * (1.0 - ratio) + b as f32 * ratio) as u8;

    Rgb([
        channel(from[0], to[0]),
        channel(from[1], to[1]),
        channel(from[2], to[2]),
    ])
}
