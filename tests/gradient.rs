use image::Rgb;
use lotus_icon_gen::gradient::{
    ease, lerp_color, radial_gradient, vertical_gradient, vertical_gradient3,
};

const BLUE: Rgb<u8> = Rgb([94, 114, 228]);
const PURPLE: Rgb<u8> = Rgb([142, 84, 233]);

fn close_to(actual: Rgb<u8>, expected: Rgb<u8>, tolerance: i16) -> bool {
    (0..3).all(|c| (actual[c] as i16 - expected[c] as i16).abs() <= tolerance)
}

#[test]
fn test_radial_center_is_inner_color() {
    for (width, height) in [(1024, 1024), (48, 48), (7, 5), (96, 40), (1, 1)] {
        let image = radial_gradient(width, height, BLUE, PURPLE);

        assert_eq!(image.dimensions(), (width, height));
        assert_eq!(
            *image.get_pixel(width / 2, height / 2),
            BLUE,
            "center of {width}x{height} should be the inner color"
        );
    }
}

#[test]
fn test_radial_corner_is_outer_color() {
    let image = radial_gradient(64, 64, BLUE, PURPLE);
    assert_eq!(*image.get_pixel(0, 0), PURPLE);
}

#[test]
fn test_radial_is_symmetric() {
    let image = radial_gradient(65, 65, BLUE, PURPLE);

    for offset in 1..32 {
        assert_eq!(
            image.get_pixel(32 - offset, 32),
            image.get_pixel(32 + offset, 32)
        );
        assert_eq!(
            image.get_pixel(32, 32 - offset),
            image.get_pixel(32, 32 + offset)
        );
    }
}

#[test]
fn test_vertical_top_and_bottom_rows() {
    let top = Rgb([10, 200, 40]);
    let bottom = Rgb([240, 20, 180]);

    for height in [1024, 96, 48] {
        let image = vertical_gradient(8, height, top, bottom);

        assert_eq!(*image.get_pixel(3, 0), top);
        let last = *image.get_pixel(3, height - 1);
        assert!(
            close_to(last, bottom, 8),
            "bottom row {last:?} should approximate {bottom:?} for height {height}"
        );
    }
}

#[test]
fn test_vertical_rows_are_uniform() {
    let image = vertical_gradient(16, 16, BLUE, PURPLE);

    for y in 0..16 {
        let first = *image.get_pixel(0, y);
        assert!((0..16).all(|x| *image.get_pixel(x, y) == first));
    }
}

#[test]
fn test_vertical_three_stops() {
    let top = Rgb([0, 0, 0]);
    let middle = Rgb([100, 100, 100]);
    let bottom = Rgb([200, 200, 200]);
    let image = vertical_gradient3(4, 1024, top, middle, bottom);

    assert_eq!(*image.get_pixel(0, 0), top);
    assert!(close_to(*image.get_pixel(0, 1023), bottom, 2));

    // Monotonic stops give a monotonic gradient passing through the middle
    let mut previous = 0;
    let mut saw_middle = false;
    for y in 0..1024 {
        let value = image.get_pixel(0, y)[0];
        assert!(value >= previous, "row {y} went backwards");
        saw_middle |= (value as i16 - 100).abs() <= 1;
        previous = value;
    }
    assert!(saw_middle);
}

#[test]
fn test_ease_curve() {
    assert_eq!(ease(0.0), 0.0);
    assert_eq!(ease(1.0), 1.0);
    assert!((ease(0.5) - 0.25).abs() < 1e-6);

    let mut previous = 0.0;
    for i in 1..=100 {
        let value = ease(i as f32 / 100.0);
        assert!(value >= previous);
        previous = value;
    }

    // Out-of-range input is pinned to the ends
    assert_eq!(ease(-0.5), 0.0);
    assert_eq!(ease(1.5), 1.0);
}

#[test]
fn test_lerp_color_truncates() {
    assert_eq!(lerp_color(BLUE, PURPLE, 0.0), BLUE);
    assert_eq!(lerp_color(BLUE, PURPLE, 1.0), PURPLE);
    // 94 * 0.5 + 142 * 0.5 = 118, 114 * 0.5 + 84 * 0.5 = 99, 228 * 0.5 + 233 * 0.5 = 230.5
    assert_eq!(lerp_color(BLUE, PURPLE, 0.5), Rgb([118, 99, 230]));
}
