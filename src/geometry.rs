//! Pixel/value maps and band layout for the three slider bars.
//!
//! The value→pixel and pixel→value maps are rounded inverses of each other
//! (within one unit either way), so a marker always sits over the gradient
//! column that encodes the current channel value.

use floem::kurbo::Rect;

use crate::color::Channel;
use crate::constants;

/// Marker position within the client area, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Marker {
    pub x: f64,
    pub y: f64,
}

/// Track width the marker can travel: client width minus the 1 px bar border
/// on each side.
pub(crate) fn usable_width(client_width: f64) -> f64 {
    (client_width - 2.0).max(1.0)
}

/// Marker x for a channel value: `round(value × usable / 255)`.
pub(crate) fn value_to_marker_x(value: u8, usable: f64) -> f64 {
    (f64::from(value) * usable / 255.0 + 0.5).floor()
}

/// Channel value for a marker x, clamped into the track:
/// `round(clamp(x) × 255 / usable)`.
pub(crate) fn marker_x_to_value(x: f64, usable: f64) -> u8 {
    let clamped = x.clamp(0.0, usable);
    (clamped * 255.0 / usable + 0.5).floor() as u8
}

/// Top of a channel's band.
pub(crate) fn band_top(channel: Channel) -> f64 {
    channel.index() as f64 * constants::BAND_STEP
}

/// The pointer hit rectangle for a channel: full client width, 12 px tall.
pub(crate) fn band_hit_rect(channel: Channel, client_width: f64) -> Rect {
    let top = band_top(channel);
    Rect::new(0.0, top, client_width, top + constants::BAND_HIT_HEIGHT)
}

/// Marker y within the client area. The offset differs between the resting
/// state and an active pointer drag.
pub(crate) fn marker_y(channel: Channel, dragging: bool) -> f64 {
    let offset = if dragging {
        constants::MARKER_DRAG_OFFSET
    } else {
        constants::MARKER_REST_OFFSET
    };
    band_top(channel) + offset
}
