//! Borrowed RGBA sprite view.
//!
//! Icons never own pixel data. The run loop decodes each `icon.png` once and
//! hands the launcher a [`Sprite`] that points into that buffer.

use embedded_graphics::{pixelcolor::Rgb565, prelude::Size};

use crate::{
    colors::rgb,
    error::{LauncherError, Result},
};

/// Bytes per RGBA8888 pixel.
const BYTES_PER_PIXEL: usize = 4;

/// Read-only RGBA8888 image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite<'a> {
    size: Size,
    data: &'a [u8],
}

impl<'a> Sprite<'a> {
    /// Wrap `data` as a `width x height` image.
    ///
    /// # Errors
    ///
    /// [`LauncherError::SpriteSize`] when the slice is not exactly
    /// `width * height * 4` bytes long.
    pub fn new(
        width: u32,
        height: u32,
        data: &'a [u8],
    ) -> Result<Self> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(LauncherError::SpriteSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            size: Size::new(width, height),
            data,
        })
    }

    #[inline]
    pub const fn size(&self) -> Size { self.size }

    /// Colour and alpha at `(x, y)`. Coordinates must be inside the sprite.
    pub fn pixel(
        &self,
        x: u32,
        y: u32,
    ) -> (Rgb565, u8) {
        let idx = (y as usize * self.size.width as usize + x as usize) * BYTES_PER_PIXEL;
        let px = &self.data[idx..idx + BYTES_PER_PIXEL];
        (rgb(px[0], px[1], px[2]), px[3])
    }
}
