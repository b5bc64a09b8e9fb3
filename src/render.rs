// src/render.rs
use crate::canvas::{Canvas, Circle};
use crate::icon::IconSpec;
use crate::utils::scaled_floor;
use image::{Rgb, RgbImage};

/// Dark green background, also used to carve the crescent.
pub const BASE: Rgb<u8> = Rgb([0x1B, 0x7A, 0x4A]);
/// Light green of the outer disk and the inner ring's outline.
pub const ACCENT: Rgb<u8> = Rgb([0x2E, 0xCC, 0x71]);
pub const WHITE: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

/// Pixel width from which the crescent is drawn.
pub const CRESCENT_MIN_WIDTH: u32 = 60;
/// Pixel width from which the star dot is drawn.
pub const STAR_MIN_WIDTH: u32 = 120;

/// Render the icon for `logical_size` points at `scale`.
pub fn render_icon(logical_size: f64, scale: u32) -> RgbImage {
    render_canvas(IconSpec::new(logical_size, scale).pixel_dimension())
}

/// Render the icon onto a `width`×`width` canvas.
///
/// Detail tiers are gated on the pixel width, so a small logical size at a
/// high scale still gets the crescent and the star.
pub fn render_canvas(width: u32) -> RgbImage {
    let mut img = RgbImage::new(width, width);
    paint_icon(&mut img, width);
    img
}

/// Paint every layer of a `width`×`width` icon onto `canvas`, back to front.
pub fn paint_icon<C: Canvas>(canvas: &mut C, width: u32) {
    let center = (i64::from(width / 2), i64::from(width / 2));

    canvas.fill_background(BASE);

    // Outer disk
    let radius = scaled_floor(width, 0.4);
    canvas.draw_circle(
        &Circle::filled(center, radius, ACCENT)
            .with_stroke(WHITE, scaled_floor(width, 0.02).max(2)),
    );

    // Inner disk
    let inner_radius = scaled_floor(radius, 0.7);
    canvas.draw_circle(
        &Circle::filled(center, inner_radius, BASE)
            .with_stroke(ACCENT, scaled_floor(width, 0.015).max(1)),
    );

    if width >= CRESCENT_MIN_WIDTH {
        draw_crescent(canvas, center, radius);
    }

    if width >= STAR_MIN_WIDTH {
        draw_star(canvas, center, radius, width);
    }
}

/// A white disk with a background-coloured disk of the same size painted over
/// it from the other side, leaving a crescent on the right.
fn draw_crescent<C: Canvas>(canvas: &mut C, (cx, cy): (i64, i64), radius: u32) {
    let moon_radius = scaled_floor(radius, 0.5);
    let moon_offset = i64::from(scaled_floor(moon_radius, 0.3));

    canvas.draw_circle(&Circle::filled((cx + moon_offset, cy), moon_radius, WHITE));
    canvas.draw_circle(&Circle::filled((cx - moon_offset, cy), moon_radius, BASE));
}

fn draw_star<C: Canvas>(canvas: &mut C, (cx, cy): (i64, i64), radius: u32, width: u32) {
    let star_size = scaled_floor(width, 0.03).max(3);
    let star_center = (
        cx + i64::from(scaled_floor(radius, 0.6)),
        cy - i64::from(scaled_floor(radius, 0.4)),
    );
    canvas.draw_circle(&Circle::filled(star_center, star_size, WHITE));
}
