//! In-memory RGB565 framebuffer with alpha blending.
//!
//! The launcher composites every frame into a [`Framebuffer`] and the run loop
//! pushes the finished frame to the panel (or the simulator window) in one go.
//! Opaque drawing goes through the regular [`DrawTarget`] interface so every
//! `embedded-graphics` primitive and font works unchanged. Translucent layers
//! (shadows, faded sprites, the startup fade) use the `blend_*` methods, which
//! mix the new colour with what is already in the buffer.
//!
//! # Clipping
//!
//! Every write is clipped to the screen. Scrolled icons and labels routinely
//! sit partly or fully outside the visible area.

use embedded_graphics::{
    Pixel,
    pixelcolor::Rgb565,
    prelude::{Dimensions, DrawTarget, OriginDimensions, Point, Size},
    primitives::Rectangle,
};

use crate::{
    colors::{BLACK, blend},
    config::{SCREEN_HEIGHT, SCREEN_WIDTH},
};

const WIDTH: usize = SCREEN_WIDTH as usize;
const HEIGHT: usize = SCREEN_HEIGHT as usize;

/// Number of pixels in one frame.
pub const PIXEL_COUNT: usize = WIDTH * HEIGHT;

/// Screen-sized RGB565 frame, row-major.
pub struct Framebuffer {
    pixels: [Rgb565; PIXEL_COUNT],
}

impl Framebuffer {
    /// Create a black frame.
    pub const fn new() -> Self {
        Self {
            pixels: [BLACK; PIXEL_COUNT],
        }
    }

    /// All pixels, row-major. Used by the run loop to present the frame.
    #[inline]
    pub const fn pixels(&self) -> &[Rgb565] { &self.pixels }

    /// Colour at `point`, or `None` when off screen.
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        Self::index(point.x, point.y).map(|idx| self.pixels[idx])
    }

    #[inline]
    fn index(
        x: i32,
        y: i32,
    ) -> Option<usize> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        Some(y as usize * WIDTH + x as usize)
    }

    /// Blend a single pixel over the current contents.
    pub fn blend_pixel(
        &mut self,
        point: Point,
        color: Rgb565,
        alpha: u8,
    ) {
        if alpha == 0 {
            return;
        }
        if let Some(idx) = Self::index(point.x, point.y) {
            self.pixels[idx] = blend(color, self.pixels[idx], alpha);
        }
    }

    /// Blend a horizontal run of `len` pixels starting at `(x, y)`.
    pub fn blend_span(
        &mut self,
        x: i32,
        y: i32,
        len: i32,
        color: Rgb565,
        alpha: u8,
    ) {
        if alpha == 0 || len <= 0 || y < 0 || y >= HEIGHT as i32 {
            return;
        }
        let start = x.max(0);
        let end = (x + len).min(WIDTH as i32);
        if start >= end {
            return;
        }
        let row = y as usize * WIDTH;
        for px in &mut self.pixels[row + start as usize..row + end as usize] {
            *px = blend(color, *px, alpha);
        }
    }

    /// Blend a filled rectangle over the current contents.
    pub fn blend_rect(
        &mut self,
        area: &Rectangle,
        color: Rgb565,
        alpha: u8,
    ) {
        let area = area.intersection(&self.bounding_box());
        if area.size == Size::zero() {
            return;
        }
        for y in area.rows() {
            self.blend_span(area.top_left.x, y, area.size.width as i32, color, alpha);
        }
    }
}

impl Default for Framebuffer {
    fn default() -> Self { Self::new() }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(idx) = Self::index(point.x, point.y) {
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(
        &mut self,
        area: &Rectangle,
        colors: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // Colours are laid out over the full (unclipped) area, so walk it all
        // and drop the off-screen ones.
        let mut colors = colors.into_iter();
        for y in area.rows() {
            for x in area.columns() {
                let Some(color) = colors.next() else {
                    return Ok(());
                };
                if let Some(idx) = Self::index(x, y) {
                    self.pixels[idx] = color;
                }
            }
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }

        let x_start = drawable_area.top_left.x as usize;
        let width = drawable_area.size.width as usize;
        for y in drawable_area.rows() {
            let row = y as usize * WIDTH + x_start;
            self.pixels[row..row + width].fill(color);
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.pixels.fill(color);
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}
