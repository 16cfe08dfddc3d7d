//! Application configuration constants.
//!
//! # Pre-computed Layout Constants
//!
//! Grid geometry, label placement and animation timings are `const` values so
//! the per-frame code never recomputes them. Screen-specific positions (debug
//! page rows, header text) live next to the drawing code that uses them.

use core::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (badge panel, landscape).
pub const SCREEN_WIDTH: u32 = 160;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 120;

/// Screen center X coordinate. Used for centering labels and page titles.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Icon Grid
// =============================================================================

/// Icons per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Edge length of one grid cell in pixels (both axes).
pub const CELL_SIZE: i32 = 48;

/// X coordinate of the first column's icon centre.
pub const GRID_MARGIN_X: i32 = 33;

/// Y coordinate of the first row's icon centre.
pub const GRID_MARGIN_Y: i32 = 42;

/// Rows that stay on screen before the grid starts scrolling.
pub const PINNED_ROWS: usize = 2;

/// Upper bound on installed apps shown in the grid.
pub const MAX_ICONS: usize = 16;

// =============================================================================
// Icon Tile
// =============================================================================

/// Squircle half-size in pixels (the tile is 40x40).
pub const SQUIRCLE_RADIUS: f32 = 20.0;

/// Scale of the drop shadow relative to the tile.
pub const SHADOW_SCALE: f32 = 1.1;

/// Alpha of the black shadow and shade layers.
pub const SHADE_ALPHA: u8 = 30;

/// Height every sprite is scaled to when blitted onto a tile.
pub const SPRITE_HEIGHT: u32 = 24;

/// Distance from the tile centre up to the sprite's top edge.
pub const SPRITE_Y_OFFSET: i32 = 13;

/// Sprite alpha on the selected tile.
pub const ACTIVE_SPRITE_ALPHA: u8 = 255;

/// Sprite alpha on every other tile.
pub const INACTIVE_SPRITE_ALPHA: u8 = 100;

// =============================================================================
// Floating Label
// =============================================================================

/// Top edge of the active icon's name label before scrolling.
pub const LABEL_Y: i32 = 100;

/// Horizontal padding between label text and its background.
pub const LABEL_PADDING_X: i32 = 4;

/// Label background height.
pub const LABEL_HEIGHT: u32 = 15;

/// Label background corner radius.
pub const LABEL_CORNER_RADIUS: u32 = 4;

/// Alpha of the black label text over the highlight colour.
pub const LABEL_TEXT_ALPHA: u8 = 150;

// =============================================================================
// Animation Timing
// =============================================================================

/// One spin oscillation unit in milliseconds (`cos(elapsed / period)`).
pub const SPIN_PERIOD_MS: u64 = 100;

/// Spin length in periods.
pub const SPIN_PERIODS: u64 = 6;

/// Total spin duration; the icon returns to idle once this much time has passed.
pub const SPIN_DURATION_MS: u64 = SPIN_PERIOD_MS * SPIN_PERIODS;

/// Number of quantisation steps on each side of zero for the spin width.
pub const SPIN_LEVELS: f32 = 3.0;

/// Smallest width magnitude a spinning icon may collapse to.
pub const SPIN_MIN_WIDTH: f32 = 0.1;

/// Fade accumulator value on the first frame.
pub const FADE_START: u8 = 30;

/// Fade accumulator increment per frame.
pub const FADE_STEP: u8 = 30;

/// Fade accumulator ceiling; once reached the overlay is gone for good.
pub const FADE_MAX: u8 = u8::MAX;

// =============================================================================
// Run Loop Timing
// =============================================================================

/// Target frame time (~50 FPS). The run loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Minimum time between accepted button state changes.
pub const DEBOUNCE_MS: u64 = 50;

// =============================================================================
// App Resources
// =============================================================================

/// Directory holding one sub-directory per installed app.
pub const APPS_ROOT: &str = "/system/apps";

/// Icon image expected inside each app directory.
pub const ICON_FILE: &str = "icon.png";

/// Capacity of a resource path string (`/system/apps/<id>/icon.png`).
pub const PATH_LEN: usize = 64;
