//! Widget components drawn into the [`Framebuffer`](crate::Framebuffer).
//!
//! - [`primitives`]: squircle tiles, rounded rectangles, scaled sprite blits,
//!   usage bars
//! - [`label`]: floating name label and label/value rows
//! - [`header`]: launcher background and header bar
//!
//! Widgets never hold state. Screens call them every frame with the values
//! they need; fixed positions are `const` and text formatting goes through
//! `heapless::String`.

mod header;
mod label;
mod primitives;

pub use header::{HEADER_HEIGHT, draw_background, draw_header};
pub use label::{draw_floating_label, draw_label_value};
pub use primitives::{draw_sprite_scaled, draw_usage_bar, fill_rounded_rect, fill_squircle};
