/// RGBA frame buffer with point and line drawing
use std::mem;

use image::{Rgba, RgbaImage};

/// Bytes per pixel: red, green, blue, alpha
pub const CHANNELS: usize = 4;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Fully opaque color
pub fn opaque(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

/// A row-major RGBA8 pixel buffer
///
/// Starts zeroed (transparent black). Drawing takes `&mut self`, so a buffer
/// has exactly one writer at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * CHANNELS],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw interleaved RGBA bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Color at `(x, y)`, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = self.offset(x, y);
        let mut color = [0; CHANNELS];
        color.copy_from_slice(&self.pixels[offset..offset + CHANNELS]);
        Some(Rgba(color))
    }

    /// Write one pixel without a bounds check
    ///
    /// The caller guarantees `x < width` and `y < height`.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds"
        );
        let offset = self.offset(x, y);
        self.pixels[offset..offset + CHANNELS].copy_from_slice(&color.0);
    }

    /// Write one pixel if it lies on the canvas. Returns whether it was written.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, color: Rgba<u8>) -> bool {
        if self.contains(x, y) {
            self.set_pixel(x as u32, y as u32, color);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Draw a line between two pixel coordinates, endpoints included
    ///
    /// Lines with |slope| > 1 are stepped along y, the rest along x. The
    /// other coordinate is the truncated exact slope offset from the lower
    /// endpoint. Pixels off the canvas are skipped.
    pub fn draw_line(
        &mut self,
        mut x0: i32,
        mut y0: i32,
        mut x1: i32,
        mut y1: i32,
        color: Rgba<u8>,
    ) {
        let delta = |a: i32, b: i32| i64::from(b) - i64::from(a);
        // |delta| < 2^33, so the product fits in i128 and the quotient back in i32
        let slope_offset = |along: i64, num: i64, den: i64| {
            (i128::from(along) * i128::from(num) / i128::from(den)) as i64
        };
        let steep = delta(y0, y1).abs() > delta(x0, x1).abs();

        if steep {
            if y0 > y1 {
                mem::swap(&mut x0, &mut x1);
                mem::swap(&mut y0, &mut y1);
            }
            let (dx, dy) = (delta(x0, x1), delta(y0, y1));
            let first = y0.max(0);
            let last = y1.min(last_index(self.height));
            for y in first..=last {
                let x = i64::from(x0) + slope_offset(delta(y0, y), dx, dy);
                self.plot(x as i32, y, color);
            }
        } else {
            if x0 > x1 {
                mem::swap(&mut x0, &mut x1);
                mem::swap(&mut y0, &mut y1);
            }
            let (dx, dy) = (delta(x0, x1), delta(y0, y1));
            if dx == 0 {
                self.plot(x0, y0, color);
                return;
            }
            let first = x0.max(0);
            let last = x1.min(last_index(self.width));
            for x in first..=last {
                let y = i64::from(y0) + slope_offset(delta(x0, x), dy, dx);
                self.plot(x, y as i32, color);
            }
        }
    }

    /// Convert into an `image` buffer
    pub fn into_image(self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.pixels)
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (x as usize + y as usize * self.width as usize) * CHANNELS
    }
}

/// Highest pixel index along an axis of `len` pixels, as a signed coordinate
fn last_index(len: u32) -> i32 {
    i32::try_from(i64::from(len) - 1).unwrap_or(i32::MAX)
}
