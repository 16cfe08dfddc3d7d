//! Badge launcher library - testable core of the app launcher.
//!
//! This library contains everything that runs on the badge: the icon grid
//! layout/scroll/animation engine, the frame compositor, the debug-info
//! screen and the framebuffer they draw into. The simulator binary
//! (`main.rs`) adds the desktop window, host filesystem probing, PNG decoding
//! and simulated system statistics.
//!
//! # Module Map
//!
//! - [`layout`]: Grid cell placement and row-based scroll offset
//! - [`selection`]: Active index with wraparound deltas
//! - [`animations`]: Icon spin state machine and the startup fade
//! - [`icon`]: Per-icon state and drawing
//! - [`screens`]: Launcher compositor and debug-info pages
//! - [`framebuffer`]: RGB565 `DrawTarget` with alpha blending
//! - [`widgets`]: Squircles, sprites, labels, bars
//! - [`discovery`]: Installed-app catalogue and probe filter
//! - [`sysinfo`]: Query interface for the debug pages
//! - [`input`]: Badge buttons and edge detection
//!
//! # Testing
//!
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), the library itself is
//! `no_std` so the same code can drive the badge display.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Configuration and styling
pub mod colors;
pub mod config;
pub mod styles;

// Errors
pub mod error;

// Core engine
pub mod animations;
pub mod icon;
pub mod layout;
pub mod selection;

// Rendering
pub mod framebuffer;
pub mod sprite;
pub mod widgets;

// Collaborator interfaces
pub mod discovery;
pub mod input;
pub mod sysinfo;

// Screens
pub mod screens;

pub use error::{LauncherError, Result};
pub use framebuffer::Framebuffer;
pub use input::{Button, ButtonSet, InputFrame};
pub use screens::{DebugScreen, LaunchPath, Launcher};
