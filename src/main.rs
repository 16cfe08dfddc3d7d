// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Instant millis -> u64 ticks
#![allow(clippy::cast_precision_loss)] // u64 -> f32 in simulated stats

//! Badge launcher desktop simulator.
//!
//! Plays the part of the badge run loop: opens a 160x120 window, discovers
//! installed apps under `BADGE_ROOT`, decodes their icons, and drives the
//! launcher (or the debug screen) once per frame at ~50 FPS.
//!
//! # Keys
//!
//! | Key | Badge button |
//! |-----|--------------|
//! | `A` / Left | A (previous) |
//! | `C` / Right | C (next) |
//! | `B` / Enter | B (launch / action) |
//! | Up / Down | UP / DOWN |
//! | `H` / Escape | HOME (back to the launcher) |
//!
//! # Environment
//!
//! - `RUST_LOG`: log filter (default `info`)
//! - `BADGE_ROOT`: host directory used as the badge's `/` (default `assets`)
//! - `BADGE_WIFI_SSID`: network name shown on the debug screen

mod host;
mod pages;
mod simulated;

use std::{
    env,
    thread,
    time::Instant,
};

use anyhow::Context;
use badge_launcher::{
    Button,
    ButtonSet,
    DebugScreen,
    Framebuffer,
    InputFrame,
    Launcher,
    config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH},
    discovery::{APPS, discover_apps},
    input::ButtonPad,
};
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode};
use host::{HostFs, LoadedIcon};
use log::{error, info, warn};
use pages::Page;
use simulated::SimulatedSystem;

/// Host directory used when `BADGE_ROOT` is unset.
const DEFAULT_ROOT: &str = "assets";

/// Window pixels per badge pixel.
const WINDOW_SCALE: u32 = 4;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let root = env::var("BADGE_ROOT").unwrap_or_else(|_| DEFAULT_ROOT.into());
    let fs = HostFs::new(&root);
    if !fs.root().is_dir() {
        warn!("Badge root {} does not exist, no apps will be found", fs.root().display());
    }

    let installed = discover_apps(&APPS, &fs);
    let icons = host::load_icons(&fs, &installed);
    info!("{} of {} apps installed under {root}", icons.len(), APPS.len());

    let mut system = SimulatedSystem::from_env(&root);

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Badge Launcher", &output_settings);
    window.update(&display);

    // 38KB frame, keep it off the stack.
    let mut fb = Box::new(Framebuffer::new());
    let mut launcher = new_launcher(&icons).context("Failed to build launcher")?;
    let mut debug_screen = DebugScreen::new();
    let mut page = Page::default();

    let mut pad = ButtonPad::new();
    let mut held = ButtonSet::EMPTY;
    let start = Instant::now();

    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();
        let ticks = start.elapsed().as_millis() as u64;

        // Keys pressed and released within one frame still count as a press.
        let mut tapped = ButtonSet::EMPTY;
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat, badge buttons do not auto-repeat
                    if repeat {
                        continue;
                    }
                    if let Some(button) = button_for(keycode) {
                        held.insert(button);
                        tapped.insert(button);
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => {
                    if let Some(button) = button_for(keycode) {
                        held.remove(button);
                    }
                }
                _ => {}
            }
        }
        let input = InputFrame::new(pad.poll(held.union(tapped), ticks), ticks);

        if input.pressed(Button::Home) {
            info!("Home");
            page = Page::Launcher;
            launcher = new_launcher(&icons).context("Failed to rebuild launcher")?;
        }

        match page {
            Page::Launcher => {
                if let Some(path) = launcher.update(&mut fb, &input) {
                    match Page::for_launch_path(&path) {
                        Some(next) => {
                            info!("Switching to {next:?}");
                            page = next;
                            debug_screen = DebugScreen::new();
                        }
                        None => warn!("{path} has no simulator screen"),
                    }
                }
            }
            Page::Debug => debug_screen.update(&mut fb, &input, &mut system),
        }

        let area = display.bounding_box();
        display.fill_contiguous(&area, fb.pixels().iter().copied()).ok();
        window.update(&display);

        // Sleep to maintain target frame rate (~50 FPS)
        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}

/// Fresh launcher over the decoded icons, restarting the fade-in.
fn new_launcher(icons: &[LoadedIcon]) -> badge_launcher::Result<Launcher<'_>> {
    let apps = icons
        .iter()
        .map(|icon| icon.sprite().map(|sprite| (icon.app, sprite)))
        .collect::<badge_launcher::Result<Vec<_>>>()?;
    Ok(Launcher::new(apps))
}

/// Badge button for a keyboard key.
fn button_for(keycode: Keycode) -> Option<Button> {
    match keycode {
        Keycode::A | Keycode::Left => Some(Button::A),
        Keycode::B | Keycode::Return => Some(Button::B),
        Keycode::C | Keycode::Right => Some(Button::C),
        Keycode::Up => Some(Button::Up),
        Keycode::Down => Some(Button::Down),
        Keycode::H | Keycode::Escape => Some(Button::Home),
        _ => None,
    }
}
