//! Low-level drawing primitives shared across widgets.
//!
//! # Squircle
//!
//! Icon tiles are superellipses with exponent 4 (`|x/r|^4 + |y/r|^4 = 1`).
//! The shape is filled one scanline at a time: for each row the half-width is
//! `r * (1 - (dy/r)^4)^(1/4)`, which keeps the fill symmetric and lets
//! translucent layers go through [`Framebuffer::blend_span`] without
//! double-blending any pixel.
//!
//! # Scaled Sprites
//!
//! Sprites are resampled with nearest neighbour. Each sprite pixel's own
//! alpha is multiplied by the layer alpha, so a half-transparent icon drawn
//! at alpha 100 ends up fainter still.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, RoundedRectangle},
};
use micromath::F32;

use crate::{colors::BAR_TRACK, framebuffer::Framebuffer, sprite::Sprite};

/// Fill a squircle of half-size `radius` centred on `center`.
///
/// `alpha` 255 draws opaque, anything lower blends over the frame.
pub fn fill_squircle(
    fb: &mut Framebuffer,
    center: Point,
    radius: f32,
    color: Rgb565,
    alpha: u8,
) {
    if radius <= 0.0 {
        return;
    }
    let extent = F32(radius).round().0 as i32;
    for dy in -extent..extent {
        // Sample the row at its pixel centre.
        let t = F32((dy as f32 + 0.5) / radius).abs();
        if t >= 1.0 {
            continue;
        }
        let half = (F32(1.0) - t * t * t * t).sqrt().sqrt() * radius;
        let half = half.round().0 as i32;
        if half == 0 {
            continue;
        }
        fb.blend_span(center.x - half, center.y + dy, half * 2, color, alpha);
    }
}

/// Fill a rounded rectangle (opaque).
pub fn fill_rounded_rect(
    fb: &mut Framebuffer,
    area: Rectangle,
    radius: u32,
    color: Rgb565,
) {
    RoundedRectangle::with_equal_corners(area, Size::new(radius, radius))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(fb)
        .ok();
}

/// Blit `sprite` scaled to `size` with its top-left corner at `top_left`.
///
/// Zero-sized targets draw nothing.
pub fn draw_sprite_scaled(
    fb: &mut Framebuffer,
    sprite: &Sprite<'_>,
    top_left: Point,
    size: Size,
    alpha: u8,
) {
    let src = sprite.size();
    if size.width == 0 || size.height == 0 || src.width == 0 || src.height == 0 || alpha == 0 {
        return;
    }
    for ty in 0..size.height {
        let sy = ty * src.height / size.height;
        for tx in 0..size.width {
            let sx = tx * src.width / size.width;
            let (color, px_alpha) = sprite.pixel(sx, sy);
            let a = (u16::from(px_alpha) * u16::from(alpha) / 255) as u8;
            fb.blend_pixel(top_left + Point::new(tx as i32, ty as i32), color, a);
        }
    }
}

/// Draw a horizontal usage bar: dark track plus a `percent`-wide fill.
pub fn draw_usage_bar(
    fb: &mut Framebuffer,
    top_left: Point,
    size: Size,
    percent: f32,
    color: Rgb565,
) {
    Rectangle::new(top_left, size)
        .into_styled(PrimitiveStyle::with_fill(BAR_TRACK))
        .draw(fb)
        .ok();

    let used = (size.width as f32 * percent.clamp(0.0, 100.0) / 100.0) as u32;
    if used > 0 {
        Rectangle::new(top_left, Size::new(used, size.height))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(fb)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;

    use super::*;
    use crate::colors::BLACK;

    const RED: Rgb565 = Rgb565::RED;

    #[test]
    fn test_squircle_covers_center_not_corners() {
        let mut fb = Framebuffer::new();
        let c = Point::new(80, 60);
        fill_squircle(&mut fb, c, 20.0, RED, 255);
        assert_eq!(fb.pixel(c), Some(RED));
        // Superellipse reaches further into the corners than a circle but not to them.
        assert_eq!(fb.pixel(c + Point::new(-20, -20)), Some(BLACK));
        assert_eq!(fb.pixel(c + Point::new(19, 19)), Some(BLACK));
        assert_eq!(fb.pixel(c + Point::new(12, 12)), Some(RED));
    }

    #[test]
    fn test_squircle_is_symmetric() {
        let mut fb = Framebuffer::new();
        let c = Point::new(80, 60);
        fill_squircle(&mut fb, c, 20.0, RED, 255);
        for dy in 0..20 {
            for dx in 0..20 {
                let a = fb.pixel(c + Point::new(dx, dy));
                let b = fb.pixel(c + Point::new(-dx - 1, -dy - 1));
                assert_eq!(a, b, "asymmetric at ({dx}, {dy})");
            }
        }
    }

    #[test]
    fn test_squircle_row_widths() {
        let mut fb = Framebuffer::new();
        let c = Point::new(80, 60);
        fill_squircle(&mut fb, c, 20.0, RED, 255);
        let row_width = |y: i32| (0..160).filter(|&x| fb.pixel(Point::new(x, y)) == Some(RED)).count();
        // Flat sides, pinched top and bottom rows.
        assert_eq!(row_width(60), 40);
        assert_eq!(row_width(50), 40);
        assert_eq!(row_width(79), 22);
        assert_eq!(row_width(40), 22);
        assert_eq!(row_width(80), 0);
    }

    #[test]
    fn test_squircle_zero_radius_draws_nothing() {
        let mut fb = Framebuffer::new();
        fill_squircle(&mut fb, Point::new(80, 60), 0.0, RED, 255);
        assert!(fb.pixels().iter().all(|&p| p == BLACK));
    }

    #[test]
    fn test_sprite_scaled_nearest_neighbour() {
        #[rustfmt::skip]
        let data = [
            255, 0, 0, 255,   0, 0, 255, 255,
        ];
        let sprite = Sprite::new(2, 1, &data).unwrap();
        let mut fb = Framebuffer::new();
        draw_sprite_scaled(&mut fb, &sprite, Point::new(10, 10), Size::new(4, 2), 255);
        assert_eq!(fb.pixel(Point::new(10, 10)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(11, 11)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(12, 10)), Some(Rgb565::BLUE));
        assert_eq!(fb.pixel(Point::new(13, 11)), Some(Rgb565::BLUE));
        assert_eq!(fb.pixel(Point::new(14, 10)), Some(BLACK));
    }

    #[test]
    fn test_sprite_transparent_pixels_skipped() {
        let data = [255, 255, 255, 0];
        let sprite = Sprite::new(1, 1, &data).unwrap();
        let mut fb = Framebuffer::new();
        draw_sprite_scaled(&mut fb, &sprite, Point::new(0, 0), Size::new(3, 3), 255);
        assert!(fb.pixels().iter().all(|&p| p == BLACK));
    }

    #[test]
    fn test_usage_bar_fill_width() {
        let mut fb = Framebuffer::new();
        draw_usage_bar(&mut fb, Point::new(0, 0), Size::new(100, 4), 25.0, RED);
        assert_eq!(fb.pixel(Point::new(24, 0)), Some(RED));
        assert_eq!(fb.pixel(Point::new(25, 0)), Some(BAR_TRACK));
        assert_eq!(fb.pixel(Point::new(99, 3)), Some(BAR_TRACK));
    }

    #[test]
    fn test_usage_bar_clamps_overflow() {
        let mut fb = Framebuffer::new();
        draw_usage_bar(&mut fb, Point::new(0, 0), Size::new(50, 2), 180.0, RED);
        assert_eq!(fb.pixel(Point::new(49, 1)), Some(RED));
        assert_eq!(fb.pixel(Point::new(50, 1)), Some(BLACK));
    }
}
