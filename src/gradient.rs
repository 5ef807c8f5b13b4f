//! Gradient strip synthesis.
//!
//! Each bar is rasterized to an RGBA8 pixel buffer and cached as a
//! `peniko::Image`. A bar sweeps its own channel 0→255 left to right while
//! the other two channels are held at the current color, so a bar only needs
//! regenerating when those two fixed values or the pixel size change — never
//! per frame.

use std::sync::Arc;

use floem::peniko::{self, Blob};

use crate::color::{BarColor, Channel};
use crate::constants;

/// Rasterize one channel's bar: a track-colored wash with a 1 px border all
/// around and an 8-row gradient over the inner `width - 2` columns.
pub(crate) fn rasterize_bar(channel: Channel, color: BarColor, width: u32) -> Vec<u8> {
    let height = constants::BAR_TEXTURE_HEIGHT;
    let (wash_r, wash_g, wash_b) = constants::TRACK_FORE;

    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in buf.chunks_exact_mut(4) {
        px[0] = wash_r;
        px[1] = wash_g;
        px[2] = wash_b;
        px[3] = 255;
    }

    if width <= 2 {
        return buf;
    }
    let inner = width - 2;

    for x in 0..inner {
        let value = (f64::from(x) * 255.0 / f64::from(inner) + 0.5) as u8;
        let (r, g, b) = match channel {
            Channel::Red => (value, color.g(), color.b()),
            Channel::Green => (color.r(), value, color.b()),
            Channel::Blue => (color.r(), color.g(), value),
        };
        for row in 1..9u32 {
            let offset = ((row * width + x + 1) * 4) as usize;
            buf[offset] = r;
            buf[offset + 1] = g;
            buf[offset + 2] = b;
        }
    }

    buf
}

/// The two channel values a bar's gradient holds fixed.
fn fixed_values(channel: Channel, color: BarColor) -> (u8, u8) {
    match channel {
        Channel::Red => (color.g(), color.b()),
        Channel::Green => (color.r(), color.b()),
        Channel::Blue => (color.r(), color.g()),
    }
}

/// Cached bar image for one channel.
pub(crate) struct BarImage {
    channel: Channel,
    img: Option<peniko::Image>,
    hash: Vec<u8>,
    cached_fixed: (u8, u8),
    cached_dims: (u32, u32),
}

impl BarImage {
    pub(crate) fn new(channel: Channel) -> Self {
        Self {
            channel,
            img: None,
            hash: Vec::new(),
            cached_fixed: (0, 0),
            cached_dims: (0, 0),
        }
    }

    /// Rebuild the image if the fixed channel values or the pixel width have
    /// changed since the last build. The cached image is swapped whole; no
    /// partially written buffer is ever observable.
    pub(crate) fn ensure(&mut self, color: BarColor, width_px: u32) {
        if width_px == 0 {
            return;
        }
        let fixed = fixed_values(self.channel, color);
        let dims = (width_px, constants::BAR_TEXTURE_HEIGHT);
        if self.cached_dims == dims && self.cached_fixed == fixed {
            return;
        }

        let pixels = rasterize_bar(self.channel, color, width_px);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, dims.0, dims.1);

        self.hash = blob.id().to_le_bytes().to_vec();
        self.img = Some(img);
        self.cached_fixed = fixed;
        self.cached_dims = dims;
    }

    pub(crate) fn image(&self) -> Option<(&peniko::Image, &[u8])> {
        self.img.as_ref().map(|img| (img, self.hash.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(buf: &[u8], width: u32, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let offset = ((y * width + x) * 4) as usize;
        (buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3])
    }

    const WASH: (u8, u8, u8, u8) = (0xE5, 0xE0, 0xE4, 255);

    #[test]
    fn buffer_has_width_by_ten_pixels() {
        let buf = rasterize_bar(Channel::Red, BarColor::WHITE, 150);
        assert_eq!(buf.len(), 150 * 10 * 4);
    }

    #[test]
    fn border_rows_and_columns_stay_washed() {
        let width = 150;
        let buf = rasterize_bar(Channel::Green, BarColor::from_rgb(10, 20, 30), width);
        for x in 0..width {
            assert_eq!(pixel(&buf, width, x, 0), WASH, "top row, column {x}");
            assert_eq!(pixel(&buf, width, x, 9), WASH, "bottom row, column {x}");
        }
        for y in 0..10 {
            assert_eq!(pixel(&buf, width, 0, y), WASH, "left border, row {y}");
            assert_eq!(pixel(&buf, width, width - 1, y), WASH, "right border, row {y}");
        }
    }

    #[test]
    fn columns_sweep_the_edited_channel() {
        let width = 150;
        let inner = width - 2;
        let color = BarColor::from_rgb(10, 20, 30);
        let buf = rasterize_bar(Channel::Green, color, width);
        for x in [0u32, 1, 50, 100, inner - 1] {
            let expected = (f64::from(x) * 255.0 / f64::from(inner) + 0.5) as u8;
            for row in 1..9u32 {
                assert_eq!(
                    pixel(&buf, width, x + 1, row),
                    (10, expected, 30, 255),
                    "column {x}, row {row}"
                );
            }
        }
    }

    #[test]
    fn other_channels_come_from_the_current_color() {
        let width = 50;
        let color = BarColor::from_rgb(200, 100, 50);
        let red = rasterize_bar(Channel::Red, color, width);
        let blue = rasterize_bar(Channel::Blue, color, width);
        let (_, g, b, _) = pixel(&red, width, 10, 4);
        assert_eq!((g, b), (100, 50));
        let (r, g, _, _) = pixel(&blue, width, 10, 4);
        assert_eq!((r, g), (200, 100));
    }

    #[test]
    fn degenerate_width_is_wash_only() {
        let buf = rasterize_bar(Channel::Blue, BarColor::WHITE, 2);
        for x in 0..2 {
            for y in 0..10 {
                assert_eq!(pixel(&buf, 2, x, y), WASH);
            }
        }
    }
}
