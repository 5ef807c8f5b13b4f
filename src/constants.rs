//! Sizing and color constants for the bar widget.

/// Default widget width in logical pixels.
pub const DEFAULT_WIDTH: f32 = 150.0;

/// Widget height. The control pins itself to this regardless of requested bounds.
pub const CLIENT_HEIGHT: f32 = 45.0;

/// Horizontal inset between the widget bounds and the client area, each side.
pub const CLIENT_INSET: f64 = 4.0;

/// Bar image height in rows: 8 gradient rows plus a 1 px border top and bottom.
pub const BAR_TEXTURE_HEIGHT: u32 = 10;

/// Visible height of a gradient strip.
pub const BAR_STRIP_HEIGHT: f64 = 8.0;

/// Vertical distance between consecutive channel bands.
pub const BAND_STEP: f64 = 15.0;

/// Height of a band's pointer hit rectangle.
pub const BAND_HIT_HEIGHT: f64 = 12.0;

/// Marker vertical offset within its band at rest.
pub const MARKER_REST_OFFSET: f64 = 9.0;

/// Marker vertical offset while the pointer is driving the marker.
pub const MARKER_DRAG_OFFSET: f64 = 11.0;

/// Track wash color: bar borders, the space outside the gradient, and the markers.
pub const TRACK_FORE: (u8, u8, u8) = (0xE5, 0xE0, 0xE4);

/// Gap between editor panel elements.
#[cfg(feature = "editor")]
pub const GAP: f32 = 8.0;

/// Padding around the editor panel.
#[cfg(feature = "editor")]
pub const PADDING: f32 = 8.0;

/// Border radius for the swatch.
#[cfg(feature = "editor")]
pub const RADIUS: f32 = 4.0;

/// Channel input field width.
#[cfg(feature = "editor")]
pub const INPUT_WIDTH: f32 = 28.0;

/// Hex input field width.
#[cfg(feature = "editor")]
pub const HEX_INPUT_WIDTH: f32 = 64.0;

/// Input font size.
#[cfg(feature = "editor")]
pub const INPUT_FONT: f32 = 11.0;

/// Label font size.
#[cfg(feature = "editor")]
pub const LABEL_FONT: f32 = 10.0;
