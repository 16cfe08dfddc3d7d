//! Time-driven animations: the icon spin and the startup fade-in.
//!
//! # Spin
//!
//! When an icon becomes the selection it "flips" once: its horizontal scale
//! follows a cosine that is quantised to thirds, so the sprite snaps through
//! a few discrete widths instead of sliding smoothly:
//!
//! ```text
//! width = round(cos(elapsed / 100ms) * 3) / 3
//! ```
//!
//! The width is a pure function of `now - start_tick`, so asking for it
//! several times in one frame always gives the same answer. Positive widths
//! are at least `0.1`; everything else, a rounded zero included, is at most
//! `-0.1` and shows the back face. After 600 ms the spin ends and the width
//! is back to 1.
//!
//! # Fade
//!
//! The launcher fades in from black over its first frames. A single
//! accumulator climbs by 30 each frame; the overlay alpha is `255 - level`
//! until the accumulator saturates.

use crate::config::{
    FADE_MAX,
    FADE_START,
    FADE_STEP,
    SPIN_DURATION_MS,
    SPIN_LEVELS,
    SPIN_MIN_WIDTH,
    SPIN_PERIOD_MS,
};

// =============================================================================
// Spin
// =============================================================================

/// Spin state of a single icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Spin {
    #[default]
    Idle,
    Spinning {
        start_tick: u64,
    },
}

impl Spin {
    /// Start spinning at `now`.
    #[inline]
    pub const fn start(now: u64) -> Self { Self::Spinning { start_tick: now } }

    #[inline]
    pub const fn is_spinning(&self) -> bool { matches!(self, Self::Spinning { .. }) }

    /// Return to idle once the spin has run its full duration.
    pub const fn advance(
        &mut self,
        now: u64,
    ) {
        if let Self::Spinning { start_tick } = *self
            && now.saturating_sub(start_tick) >= SPIN_DURATION_MS
        {
            *self = Self::Idle;
        }
    }

    /// Horizontal scale at `now`. Idle icons are 1.0.
    pub fn width(
        &self,
        now: u64,
    ) -> f32 {
        match *self {
            Self::Idle => 1.0,
            Self::Spinning { start_tick } => spin_width(now.saturating_sub(start_tick)),
        }
    }
}

/// Quantised spin width `elapsed` milliseconds into a spin.
///
/// Never returns a magnitude below [`SPIN_MIN_WIDTH`].
pub fn spin_width(elapsed: u64) -> f32 {
    let raw = micromath::F32(elapsed as f32 / SPIN_PERIOD_MS as f32).cos();
    let width = (raw * SPIN_LEVELS).round().0 / SPIN_LEVELS;
    if width > 0.0 {
        width.max(SPIN_MIN_WIDTH)
    } else {
        width.min(-SPIN_MIN_WIDTH)
    }
}

// =============================================================================
// Fade
// =============================================================================

/// Startup fade-in accumulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fade {
    level: u8,
}

impl Fade {
    pub const fn new() -> Self { Self { level: FADE_START } }

    #[inline]
    pub const fn level(&self) -> u8 { self.level }

    #[inline]
    pub const fn is_done(&self) -> bool { self.level >= FADE_MAX }

    /// Overlay alpha for this frame, advancing the accumulator.
    ///
    /// `None` once the fade has finished; it never restarts.
    pub const fn step(&mut self) -> Option<u8> {
        if self.is_done() {
            return None;
        }
        let alpha = FADE_MAX - self.level;
        self.level = self.level.saturating_add(FADE_STEP);
        Some(alpha)
    }
}

impl Default for Fade {
    fn default() -> Self { Self::new() }
}
