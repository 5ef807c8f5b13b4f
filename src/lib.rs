//! # floem-colorbar
//!
//! An RGB slider-bar color picker widget for [Floem](https://github.com/lapce/floem).
//!
//! Three horizontal gradient bars — red, green, blue — each with a draggable
//! marker. A bar's gradient sweeps its own channel while holding the other two
//! at the current color, so the strips re-tint as the color moves. Arrow keys
//! nudge the last-pressed bar one pixel at a time.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_colorbar::{color_bar, BarColor};
//!
//! let color = RwSignal::new(BarColor::from_rgb(59, 130, 246));
//! // Use `color_bar(color)` in your Floem view tree, or
//! // `color_bar_editor(color)` for the bars plus numeric/hex inputs.
//! ```

mod color;
mod color_bar;
mod constants;
mod drag;
mod geometry;
mod gradient;
#[cfg(feature = "editor")]
mod inputs;
#[cfg(feature = "editor")]
mod panel;
mod state;

pub use color::{BarColor, Channel, ChannelIndexError};
pub use color_bar::{color_bar, ColorBar};

#[cfg(feature = "editor")]
pub use panel::color_bar_editor;
