//! Frame: one complete rendered raster.

use super::color::Color;
use thiserror::Error;

/// A fully rendered frame in xRGB32 layout.
///
/// Frames are produced by one render pass and handed to a presentation
/// backend whole, so a viewer can never observe a partially drawn picture.
/// The pixel data is plain bytes, which keeps frames cheap to move between
/// threads.
#[derive(Clone, Debug)]
pub struct Frame {
    width: i32,
    height: i32,
    stride: i32,
    data: Vec<u8>,
}

/// Failure while turning a Cairo surface into a [`Frame`].
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("cairo surface operation failed: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("surface pixel data is still borrowed: {0}")]
    Borrow(#[from] cairo::BorrowError),
}

impl Frame {
    /// Builds a frame filled with a single color.
    pub fn solid(width: i32, height: i32, color: Color) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let stride = width * 4;
        let pixel = color.to_xrgb().to_ne_bytes();
        let mut data = Vec::with_capacity((stride * height) as usize);
        for _ in 0..(width * height) {
            data.extend_from_slice(&pixel);
        }
        Self {
            width,
            height,
            stride,
            data,
        }
    }

    /// Copies the pixels out of a finished image surface.
    ///
    /// The surface must not have a live drawing context; drop the
    /// `cairo::Context` before calling this.
    pub fn from_surface(mut surface: cairo::ImageSurface) -> Result<Self, FrameError> {
        surface.flush();
        let width = surface.width();
        let height = surface.height();
        let stride = surface.stride();
        let data = surface.data()?.to_vec();
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Frame width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Reads back one pixel as an opaque color.
    ///
    /// Returns `None` outside the frame bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.stride + x * 4) as usize;
        let word = u32::from_ne_bytes([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]);
        Some(Color::from_xrgb(word & 0x00ff_ffff))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};

    #[test]
    fn solid_frame_reads_back_uniformly() {
        let frame = Frame::solid(8, 4, RED);
        assert_eq!(frame.width(), 8);
        assert_eq!(frame.height(), 4);
        for y in 0..4 {
            for x in 0..8 {
                assert_eq!(frame.pixel(x, y), Some(RED));
            }
        }
    }

    #[test]
    fn out_of_bounds_pixel_is_none() {
        let frame = Frame::solid(2, 2, WHITE);
        assert_eq!(frame.pixel(-1, 0), None);
        assert_eq!(frame.pixel(0, 2), None);
        assert_eq!(frame.pixel(2, 0), None);
    }
}
