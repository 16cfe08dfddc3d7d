//! The launcher: icon grid, floating label and startup fade.
//!
//! # Frame Order
//!
//! ```text
//! input ─▶ selection ─▶ (launch?) ─▶ background + header
//!                                      ─▶ scroll offset
//!                                      ─▶ icons (activate, draw)
//!                                      ─▶ active label
//!                                      ─▶ fade overlay
//! ```
//!
//! Input is consumed once at the top of [`Launcher::update`]. A launch request
//! returns before anything is drawn, so the run loop can switch apps without
//! presenting a stale frame.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    prelude::*,
    primitives::Rectangle,
    text::Text,
};
use heapless::Vec;
use log::{debug, info};

use crate::{
    animations::Fade,
    colors::{BLACK, SOFT_WHITE},
    config::{CENTER_X, CENTER_Y, LABEL_Y, MAX_ICONS, SCREEN_HEIGHT, SCREEN_WIDTH},
    discovery::{AppEntry, AppPath},
    framebuffer::Framebuffer,
    icon::Icon,
    input::{Button, InputFrame},
    layout::GridLayout,
    selection::{Selection, delta_for},
    sprite::Sprite,
    styles::{CENTERED, SMALL_FONT},
    widgets::{draw_background, draw_floating_label, draw_header},
};

/// Resource path of the app to start.
pub type LaunchPath = AppPath;

const TITLE: &str = "Apps";

const EMPTY_MESSAGE: &str = "No apps installed";

const FULL_SCREEN: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

pub struct Launcher<'a> {
    icons: Vec<Icon<'a>, MAX_ICONS>,
    selection: Selection,
    layout: GridLayout,
    fade: Fade,
}

impl<'a> Launcher<'a> {
    /// Build the grid from installed apps in display order.
    ///
    /// Apps beyond [`MAX_ICONS`] are ignored.
    pub fn new<I>(apps: I) -> Self
    where
        I: IntoIterator<Item = (&'a AppEntry, Sprite<'a>)>,
    {
        let layout = GridLayout::BADGE;
        let icons: Vec<Icon<'a>, MAX_ICONS> = apps
            .into_iter()
            .take(MAX_ICONS)
            .enumerate()
            .map(|(index, (app, sprite))| Icon::new(index, app, sprite, layout.position(index)))
            .collect();
        info!("Launcher ready with {} icons", icons.len());

        Self {
            selection: Selection::new(icons.len()),
            icons,
            layout,
            fade: Fade::new(),
        }
    }

    #[inline]
    pub fn icons(&self) -> &[Icon<'a>] { &self.icons }

    #[inline]
    pub const fn active(&self) -> Option<usize> { self.selection.active() }

    /// Current vertical scroll of the grid.
    pub const fn scroll_offset(&self) -> i32 {
        match self.selection.active() {
            Some(active) => self.layout.scroll_offset(active),
            None => 0,
        }
    }

    #[inline]
    pub const fn fade(&self) -> Fade { self.fade }

    /// Run one frame. Returns the app to launch, if B was pressed.
    pub fn update(
        &mut self,
        fb: &mut Framebuffer,
        input: &InputFrame,
    ) -> Option<LaunchPath> {
        let delta = delta_for(input.pressed, self.layout.columns);
        if let Some(change) = self.selection.apply_delta(delta) {
            debug!("Selection {} -> {}", change.from, change.to);
            if change.crosses_row(self.layout.columns) {
                debug!("Scrolled to offset {}", self.scroll_offset());
            }
        }

        if input.pressed(Button::B)
            && let Some(active) = self.selection.active()
        {
            let app = self.icons[active].app();
            info!("Launching {} ({})", app.name, app.id);
            return Some(app.path());
        }

        draw_background(fb);
        let active = self.selection.active();
        draw_header(fb, TITLE, active.map(|i| (i, self.icons.len())));

        let offset = self.scroll_offset();
        for (i, icon) in self.icons.iter_mut().enumerate() {
            icon.activate(active == Some(i), input.ticks);
            icon.draw(fb, offset, input.ticks);
        }

        match active {
            Some(i) => draw_floating_label(fb, self.icons[i].name(), LABEL_Y + offset),
            None => {
                Text::with_text_style(
                    EMPTY_MESSAGE,
                    Point::new(CENTER_X, CENTER_Y),
                    MonoTextStyle::new(SMALL_FONT, SOFT_WHITE),
                    CENTERED,
                )
                .draw(fb)
                .ok();
            }
        }

        if let Some(alpha) = self.fade.step() {
            fb.blend_rect(&FULL_SCREEN, BLACK, alpha);
        }

        None
    }
}
