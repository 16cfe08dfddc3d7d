//! Full-screen UIs driven once per frame by the run loop.
//!
//! - **Launcher** ([`launcher`]): icon grid with spin animation, floating
//!   label and startup fade. Returns the path of the app to launch.
//! - **Debug Info** ([`debug`]): four pages of network, memory, system and
//!   storage details from a [`SystemInfo`](crate::sysinfo::SystemInfo)
//!   implementation.
//!
//! Each screen takes the [`InputFrame`](crate::InputFrame) for the tick and
//! redraws the whole [`Framebuffer`](crate::Framebuffer). Neither blocks nor
//! reads a clock: time comes in through `InputFrame::ticks`.

pub mod debug;
pub mod launcher;

pub use debug::{DebugPage, DebugScreen};
pub use launcher::{LaunchPath, Launcher};
