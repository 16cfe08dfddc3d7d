//! Launcher background and header bar.
//!
//! Positions are pre-computed constants; styles are const `PrimitiveStyle`s.

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;

use crate::{
    colors::{BACKGROUND, HEADER_BG},
    config::SCREEN_WIDTH,
    framebuffer::Framebuffer,
    styles::{LEFT_ALIGNED, RIGHT_ALIGNED, SMALL_STYLE_WHITE},
};

// =============================================================================
// Header Layout Constants
// =============================================================================

/// Header bar height. The first grid row's tiles start just below it.
pub const HEADER_HEIGHT: u32 = 14;

const HEADER_RECT: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));

/// Title position (left, 4px in).
const HEADER_TITLE_POS: Point = Point::new(4, 2);

/// Position of the "n/count" counter (right-aligned, 4px from edge).
const HEADER_COUNT_POS: Point = Point::new((SCREEN_WIDTH - 4) as i32, 2);

const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(HEADER_BG);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Clear the whole frame to the launcher background.
pub fn draw_background(fb: &mut Framebuffer) { fb.clear(BACKGROUND).ok(); }

/// Draw the header bar with the title and, when something is selected, the
/// 1-based position of the selection.
pub fn draw_header(
    fb: &mut Framebuffer,
    title: &str,
    position: Option<(usize, usize)>,
) {
    HEADER_RECT.into_styled(HEADER_FILL_STYLE).draw(fb).ok();

    Text::with_text_style(title, HEADER_TITLE_POS, SMALL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(fb)
        .ok();

    if let Some((index, count)) = position {
        let mut counter: String<12> = String::new();
        let _ = write!(counter, "{}/{count}", index + 1);
        Text::with_text_style(&counter, HEADER_COUNT_POS, SMALL_STYLE_WHITE, RIGHT_ALIGNED)
            .draw(fb)
            .ok();
    }
}
