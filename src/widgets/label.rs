//! Text widgets: the launcher's floating name label and the debug screen's
//! label/value rows.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::Text,
};

use super::primitives::fill_rounded_rect;
use crate::{
    colors::{BLACK, PHOSPHOR, blend},
    config::{CENTER_X, LABEL_CORNER_RADIUS, LABEL_HEIGHT, LABEL_PADDING_X, LABEL_TEXT_ALPHA},
    framebuffer::Framebuffer,
    styles::{LEFT_ALIGNED, SMALL_FONT, text_width},
};

/// Gap between a row label and its value.
const VALUE_GAP: i32 = 3;

/// Vertical offset of label text inside its background.
const LABEL_TEXT_INSET_Y: i32 = 3;

/// Draw `text` centred on the screen inside a highlight-coloured pill whose
/// top edge sits at `y`.
pub fn draw_floating_label(
    fb: &mut Framebuffer,
    text: &str,
    y: i32,
) {
    // The pill is opaque, so translucent black text over it is a fixed colour.
    let text_color = blend(BLACK, PHOSPHOR, LABEL_TEXT_ALPHA);
    let style = MonoTextStyle::new(SMALL_FONT, text_color);
    let w = text_width(&style, text) as i32;
    let x = CENTER_X - w / 2;

    let pill = Rectangle::new(
        Point::new(x - LABEL_PADDING_X, y),
        Size::new((w + LABEL_PADDING_X * 2) as u32, LABEL_HEIGHT),
    );
    fill_rounded_rect(fb, pill, LABEL_CORNER_RADIUS, PHOSPHOR);

    Text::with_text_style(text, Point::new(x, y + LABEL_TEXT_INSET_Y), style, LEFT_ALIGNED)
        .draw(fb)
        .ok();
}

/// Draw a `label value` row: the label in the highlight colour, the value
/// just after the label's measured width.
pub fn draw_label_value(
    fb: &mut Framebuffer,
    pos: Point,
    label: &str,
    value: &str,
    value_color: Rgb565,
) {
    let label_style = MonoTextStyle::new(SMALL_FONT, PHOSPHOR);
    Text::with_text_style(label, pos, label_style, LEFT_ALIGNED)
        .draw(fb)
        .ok();

    let value_x = pos.x + text_width(&label_style, label) as i32 + VALUE_GAP;
    Text::with_text_style(
        value,
        Point::new(value_x, pos.y),
        MonoTextStyle::new(SMALL_FONT, value_color),
        LEFT_ALIGNED,
    )
    .draw(fb)
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WHITE;

    #[test]
    fn test_floating_label_is_centered() {
        let mut fb = Framebuffer::new();
        // "abcd" is 24px wide: pill spans 80 - 12 - 4 = 64 .. 64 + 32 = 96
        draw_floating_label(&mut fb, "abcd", 50);
        assert_eq!(fb.pixel(Point::new(66, 57)), Some(PHOSPHOR));
        assert_eq!(fb.pixel(Point::new(93, 57)), Some(PHOSPHOR));
        assert_eq!(fb.pixel(Point::new(63, 57)), Some(BLACK));
        assert_eq!(fb.pixel(Point::new(96, 57)), Some(BLACK));
    }

    #[test]
    fn test_floating_label_offscreen_is_clipped() {
        let mut fb = Framebuffer::new();
        draw_floating_label(&mut fb, "gallery", -200);
        assert!(fb.pixels().iter().all(|&p| p == BLACK));
    }

    #[test]
    fn test_label_value_draws_both_parts() {
        let mut fb = Framebuffer::new();
        draw_label_value(&mut fb, Point::new(5, 25), "Free:", "1.0KB", WHITE);
        let label_px = fb.pixels()[..].iter().filter(|&&p| p == PHOSPHOR).count();
        let value_px = fb.pixels()[..].iter().filter(|&&p| p == WHITE).count();
        assert!(label_px > 0);
        assert!(value_px > 0);
        // Value starts after "Free:" (30px) + 3px gap.
        for y in 25..35 {
            for x in 5..38 {
                assert_ne!(fb.pixel(Point::new(x, y)), Some(WHITE));
            }
        }
    }
}
