//! A single launcher icon: tile, sprite and spin state.
//!
//! Each frame the compositor calls [`Icon::activate`] with whether the icon
//! is the selection and then [`Icon::draw`]. Becoming active after being
//! inactive starts a spin; staying active does not restart it.
//!
//! Drawing order per icon:
//!
//! 1. shadow squircle at 1.1x, translucent black
//! 2. body squircle nudged up-left by a pixel, tile colour
//! 3. shade squircle nudged down-right, translucent black
//! 4. sprite, squashed horizontally by the spin width; skipped while the
//!    back face is showing

use embedded_graphics::prelude::{Point, Size};
use log::debug;
use micromath::F32;

use crate::{
    animations::Spin,
    colors::{BLACK, tile_color},
    config::{
        ACTIVE_SPRITE_ALPHA,
        INACTIVE_SPRITE_ALPHA,
        SHADE_ALPHA,
        SHADOW_SCALE,
        SPRITE_HEIGHT,
        SPRITE_Y_OFFSET,
        SQUIRCLE_RADIUS,
    },
    discovery::AppEntry,
    framebuffer::Framebuffer,
    sprite::Sprite,
    widgets::{draw_sprite_scaled, fill_squircle},
};

/// Body offset from the icon centre; the shade sits the same distance the
/// other way.
const BODY_NUDGE: Point = Point::new(-1, -1);
const SHADE_NUDGE: Point = Point::new(1, 1);

/// Per-frame geometry derived from the spin state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconTransform {
    /// Horizontal scale, `1.0` when idle, never zero.
    pub width: f32,
    /// Signed sprite width in pixels (`width * sprite width`).
    pub sprite_width: f32,
    /// Distance from the centre to the sprite's left edge.
    pub sprite_offset: f32,
}

pub struct Icon<'a> {
    index: usize,
    app: &'a AppEntry,
    sprite: Sprite<'a>,
    /// Unscrolled centre.
    position: Point,
    active: bool,
    spin: Spin,
}

impl<'a> Icon<'a> {
    pub const fn new(
        index: usize,
        app: &'a AppEntry,
        sprite: Sprite<'a>,
        position: Point,
    ) -> Self {
        Self {
            index,
            app,
            sprite,
            position,
            active: false,
            spin: Spin::Idle,
        }
    }

    #[inline]
    pub const fn index(&self) -> usize { self.index }

    #[inline]
    pub const fn app(&self) -> &'a AppEntry { self.app }

    #[inline]
    pub const fn name(&self) -> &'static str { self.app.name }

    #[inline]
    pub const fn position(&self) -> Point { self.position }

    #[inline]
    pub const fn is_active(&self) -> bool { self.active }

    #[inline]
    pub const fn spin(&self) -> Spin { self.spin }

    /// Set the active flag. Returns `true` when this started a spin.
    pub fn activate(
        &mut self,
        active: bool,
        now: u64,
    ) -> bool {
        let started = active && !self.active;
        if started {
            debug!("Icon {} ({}) spinning at {now}", self.index, self.app.id);
            self.spin = Spin::start(now);
        }
        self.active = active;
        started
    }

    /// Spin geometry at `now`. Pure: does not advance the spin.
    pub fn transform(
        &self,
        now: u64,
    ) -> IconTransform {
        let width = self.spin.width(now);
        let sprite_width = width * self.sprite.size().width as f32;
        IconTransform {
            width,
            sprite_width,
            sprite_offset: F32(sprite_width).abs().0 / 2.0,
        }
    }

    /// Draw the icon shifted vertically by `y_offset`.
    pub fn draw(
        &mut self,
        fb: &mut Framebuffer,
        y_offset: i32,
        now: u64,
    ) {
        self.spin.advance(now);
        let t = self.transform(now);

        let center = self.position + Point::new(0, y_offset);

        fill_squircle(fb, center, SQUIRCLE_RADIUS * SHADOW_SCALE, BLACK, SHADE_ALPHA);
        fill_squircle(fb, center + BODY_NUDGE, SQUIRCLE_RADIUS, tile_color(self.index, self.active), u8::MAX);
        fill_squircle(fb, center + SHADE_NUDGE, SQUIRCLE_RADIUS, BLACK, SHADE_ALPHA);

        if t.sprite_width > 0.0 {
            let alpha = if self.active { ACTIVE_SPRITE_ALPHA } else { INACTIVE_SPRITE_ALPHA };
            let top_left = Point::new(
                F32(center.x as f32 - t.sprite_offset - 1.0).round().0 as i32,
                center.y - SPRITE_Y_OFFSET,
            );
            let size = Size::new(F32(t.sprite_width).round().0 as u32, SPRITE_HEIGHT);
            draw_sprite_scaled(fb, &self.sprite, top_left, size, alpha);
        }
    }
}
