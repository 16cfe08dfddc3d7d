//! Color constants and blending helpers.
//!
//! The badge palette is specified in 8-bit RGB; [`rgb`] packs it into RGB565
//! at compile time so every constant here is free at runtime.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! Blending happens per channel in that reduced space.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pack an 8-bit RGB triple into RGB565.
pub const fn rgb(
    r: u8,
    g: u8,
    b: u8,
) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

/// Dim an 8-bit RGB triple by 1.8 for the inactive tile variant.
const fn faded(
    r: u8,
    g: u8,
    b: u8,
) -> Rgb565 {
    rgb(
        (r as u16 * 10 / 18) as u8,
        (g as u16 * 10 / 18) as u8,
        (b as u16 * 10 / 18) as u8,
    )
}

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Overlays, shadows, debug page background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Header text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Launcher Colors
// =============================================================================

/// Launcher background behind the grid.
pub const BACKGROUND: Rgb565 = rgb(16, 18, 28);

/// Header bar fill.
pub const HEADER_BG: Rgb565 = rgb(34, 38, 52);

/// Yellow-green highlight. Label background, debug labels and separators.
pub const PHOSPHOR: Rgb565 = rgb(211, 250, 55);

/// Bright tile colours, picked by `icon index % 9`.
pub const BOLD: [Rgb565; 9] = [
    rgb(211, 250, 55),  // Yellow-green
    rgb(48, 148, 255),  // Blue
    rgb(95, 237, 131),  // Green
    rgb(225, 46, 251),  // Magenta
    rgb(216, 189, 14),  // Yellow
    rgb(255, 128, 210), // Pink
    rgb(255, 140, 60),  // Orange
    rgb(100, 200, 255), // Cyan
    rgb(180, 120, 255), // Purple
];

/// Faded variants of [`BOLD`] for tiles that are not selected.
pub const FADED: [Rgb565; 9] = [
    faded(211, 250, 55),
    faded(48, 148, 255),
    faded(95, 237, 131),
    faded(225, 46, 251),
    faded(216, 189, 14),
    faded(255, 128, 210),
    faded(255, 140, 60),
    faded(100, 200, 255),
    faded(180, 120, 255),
];

// =============================================================================
// Debug Screen Colors
// =============================================================================

/// Soft white for titles and values.
pub const SOFT_WHITE: Rgb565 = rgb(235, 245, 255);

/// [`SOFT_WHITE`] at alpha 100 over black. Hints and the page indicator.
pub const FADED_WHITE: Rgb565 = rgb(92, 96, 100);

/// Connected / healthy usage.
pub const GREEN: Rgb565 = rgb(46, 160, 67);

/// Disconnected / critical usage / errors.
pub const RED: Rgb565 = rgb(220, 50, 47);

/// Elevated usage.
pub const ORANGE: Rgb565 = rgb(255, 165, 0);

/// Usage bar track.
pub const BAR_TRACK: Rgb565 = rgb(50, 50, 50);

/// Tile colour for an icon, bold when selected.
#[inline]
pub const fn tile_color(
    index: usize,
    active: bool,
) -> Rgb565 {
    if active {
        BOLD[index % BOLD.len()]
    } else {
        FADED[index % FADED.len()]
    }
}

/// Alpha-blend `fg` over `bg` (`alpha` 255 = opaque foreground).
pub fn blend(
    fg: Rgb565,
    bg: Rgb565,
    alpha: u8,
) -> Rgb565 {
    match alpha {
        0 => bg,
        u8::MAX => fg,
        _ => {
            let a = u16::from(alpha);
            let mix = |f: u8, b: u8| ((u16::from(f) * a + u16::from(b) * (255 - a) + 127) / 255) as u8;
            Rgb565::new(mix(fg.r(), bg.r()), mix(fg.g(), bg.g()), mix(fg.b(), bg.b()))
        }
    }
}
