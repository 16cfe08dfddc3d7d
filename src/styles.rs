//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle` and `TextStyle` are `const` so they live in read-only data.
//! All styles use [`Baseline::Top`]: text positions are the top-left (or
//! top-centre) of the glyph box, matching the layout constants.
//!
//! # Text Measurement
//!
//! Fonts are consumed as a black box: [`text_width`] asks the text renderer
//! for the bounding box of a string instead of counting glyphs here.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    prelude::Point,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder, renderer::TextRenderer},
};
use profont::PROFONT_12_POINT;

use crate::colors::{SOFT_WHITE, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text, top baseline.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Left-aligned text, top baseline.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Right-aligned text, top baseline.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small font for labels and values (6x10).
/// Usage: `MonoTextStyle::new(SMALL_FONT, dynamic_color)`
pub const SMALL_FONT: &MonoFont = &FONT_6X10;

/// Large font for debug page titles (`ProFont` 12pt).
pub const LARGE_FONT: &MonoFont = &PROFONT_12_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text for the launcher header.
pub const SMALL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Large soft-white text for debug page titles.
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, SOFT_WHITE);

/// Pixel width of `text` when rendered with `style`.
pub fn text_width(
    style: &MonoTextStyle<'_, Rgb565>,
    text: &str,
) -> u32 {
    style
        .measure_string(text, Point::zero(), Baseline::Top)
        .bounding_box
        .size
        .width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_scales_with_length() {
        let one = text_width(&SMALL_STYLE_WHITE, "a");
        let four = text_width(&SMALL_STYLE_WHITE, "abcd");
        assert_eq!(one, 6);
        assert_eq!(four, 24);
    }

    #[test]
    fn test_text_width_empty() {
        assert_eq!(text_width(&SMALL_STYLE_WHITE, ""), 0);
    }
}
