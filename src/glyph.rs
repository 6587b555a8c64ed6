//! Lotus and zen circle glyphs drawn over an icon background.

use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_ellipse_mut, draw_polygon_mut, Canvas},
    point::Point,
};
use std::f32::consts::PI;

/// Number of steps along each side of a petal outline
pub const PETAL_STEPS: usize = 30;

/// Radius of each dot of the zen circle
pub const ZEN_DOT_RADIUS: i32 = 2;

/// Zen circle sampling runs from this angle up to `360 - ZEN_GAP_DEGREES`
pub const ZEN_GAP_DEGREES: u32 = 15;

/// Angular spacing between zen circle dots
pub const ZEN_STEP_DEGREES: usize = 2;

/// The shape of a lotus glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotusStyle {
    /// Eight overlapping ellipses around a center disc
    Classic,
    /// One upward petal, for small icons
    Single,
    /// Two angled side petals behind a larger upward center petal
    Triple,
}

/// Compute the closed outline of a petal growing from `base` along
/// `angle_degrees` (image coordinates, y pointing down)
///
/// The first half walks the +90° side from base to tip, the second half walks
/// back along the −90° side, so the outline always holds
/// `2 * (PETAL_STEPS + 1)` points.
pub fn petal_outline(
    base: (f32, f32),
    angle_degrees: f32,
    length: f32,
    width: f32,
) -> Vec<(f32, f32)> {
    let angle = angle_degrees.to_radians();
    let (axis_x, axis_y) = (angle.cos(), angle.sin());
    let (perp_x, perp_y) = (-axis_y, axis_x);

    let point_at = |step: usize, side: f32| {
        let t = step as f32 / PETAL_STEPS as f32;
        let along = t * length;
        let across = petal_half_width(t, width) * side;
        (
            base.0 + axis_x * along + perp_x * across,
            base.1 + axis_y * along + perp_y * across,
        )
    };

    let mut outline = Vec::with_capacity(2 * (PETAL_STEPS + 1));
    outline.extend((0..=PETAL_STEPS).map(|step| point_at(step, 1.0)));
    outline.extend((0..=PETAL_STEPS).rev().map(|step| point_at(step, -1.0)));
    outline
}

/// Distance from the petal axis to either edge at `t` along the axis
///
/// Peaks at `width` halfway up and tapers by up to 30% past the midpoint,
/// giving a pointed tip.
pub fn petal_half_width(t: f32, width: f32) -> f32 {
    let taper = if t > 0.5 {
        1.0 - 0.3 * (t - 0.5) / 0.5
    } else {
        1.0
    };

    width * (t * PI).sin() * taper
}

/// Fill a single petal. Petals without area, or whose outline collapses to
/// fewer than three pixels, are skipped.
pub fn draw_petal<C>(
    canvas: &mut C,
    base: (f32, f32),
    angle_degrees: f32,
    length: f32,
    width: f32,
    color: C::Pixel,
) where
    C: Canvas,
{
    if !(length > 0.0 && width > 0.0) {
        log::debug!("Skipping empty petal at {base:?} (length {length}, width {width})");
        return;
    }

    let mut polygon: Vec<Point<i32>> = petal_outline(base, angle_degrees, length, width)
        .into_iter()
        .map(|(x, y)| Point::new(x.round() as i32, y.round() as i32))
        .collect();

    // The outline starts and ends on the base point; the fill closes it itself
    polygon.dedup();
    while polygon.len() > 1 && polygon.first() == polygon.last() {
        polygon.pop();
    }

    if polygon.len() < 3 {
        log::debug!("Skipping degenerate petal at {base:?} (length {length}, width {width})");
        return;
    }

    draw_polygon_mut(canvas, &polygon, color);
}

/// Draw a lotus glyph of roughly `size` pixels centered on `center`
pub fn draw_lotus<C>(
    canvas: &mut C,
    style: LotusStyle,
    center: (i32, i32),
    size: u32,
    color: C::Pixel,
) where
    C: Canvas,
{
    log::debug!("Drawing {style:?} lotus of size {size} at {center:?}");

    match style {
        LotusStyle::Classic => draw_classic_lotus(canvas, center, size, color),
        LotusStyle::Single => {
            let size = size as f32;
            let base = (center.0 as f32, center.1 as f32 + size * 0.35);
            draw_petal(canvas, base, -90.0, size * 0.7, size * 0.2, color);
            draw_center_dot(canvas, base, size * 0.07, color);
        }
        LotusStyle::Triple => {
            let size = size as f32;
            let base = (center.0 as f32, center.1 as f32 + size * 0.3);

            // Back to front so the center petal overlaps the side ones
            for angle in [-130.0, -50.0] {
                draw_petal(canvas, base, angle, size * 0.45, size * 0.14, color);
            }
            draw_petal(canvas, base, -90.0, size * 0.6, size * 0.17, color);
            draw_center_dot(canvas, base, size * 0.06, color);
        }
    }
}

fn draw_classic_lotus<C>(canvas: &mut C, center: (i32, i32), size: u32, color: C::Pixel)
where
    C: Canvas,
{
    let petal_width = size / 3;
    let petal_height = size / 2;
    let offset = (size / 4) as f32;

    for i in 0..8 {
        let angle = (i as f32 * 45.0).to_radians();
        let x = center.0 as f32 + angle.cos() * offset;
        let y = center.1 as f32 + angle.sin() * offset;

        draw_filled_ellipse_mut(
            canvas,
            (x.round() as i32, y.round() as i32),
            (petal_width / 2) as i32,
            (petal_height / 2) as i32,
            color,
        );
    }

    let center_size = size / 3;
    draw_filled_circle_mut(canvas, center, (center_size / 2) as i32, color);
}

fn draw_center_dot<C>(canvas: &mut C, at: (f32, f32), radius: f32, color: C::Pixel)
where
    C: Canvas,
{
    let radius = (radius.round() as i32).max(1);
    draw_filled_circle_mut(
        canvas,
        (at.0.round() as i32, at.1.round() as i32),
        radius,
        color,
    );
}

/// Angles, in degrees, at which the zen circle places a dot
///
/// The open stretch `[345°, 360°) ∪ [0°, 15°)` is never sampled.
pub fn zen_circle_angles() -> impl Iterator<Item = u32> {
    (ZEN_GAP_DEGREES..360 - ZEN_GAP_DEGREES).step_by(ZEN_STEP_DEGREES)
}

/// Dot centers of a zen circle of `radius` around `center`
pub fn zen_circle_points(center: (f32, f32), radius: f32) -> Vec<(f32, f32)> {
    zen_circle_angles()
        .map(|degrees| {
            let angle = (degrees as f32).to_radians();
            (
                center.0 + angle.cos() * radius,
                center.1 + angle.sin() * radius,
            )
        })
        .collect()
}

/// Draw an enso: a ring of small dots left open at one point
pub fn draw_zen_circle<C>(canvas: &mut C, center: (i32, i32), radius: u32, color: C::Pixel)
where
    C: Canvas,
{
    log::debug!("Drawing zen circle of radius {radius} at {center:?}");

    for (x, y) in zen_circle_points((center.0 as f32, center.1 as f32), radius as f32) {
        draw_filled_circle_mut(
            canvas,
            (x.round() as i32, y.round() as i32),
            ZEN_DOT_RADIUS,
            color,
        );
    }
}
