//! Core types for the hourglass animation.
//!
//! Holds the explicit theme handed to the glyph: the display mode, the
//! accent paint and the fixed paints derived from them.

mod color;
mod paint;
mod theme;

pub use color::hsl_to_rgb;
pub use paint::{Paint, PaintError};
pub use theme::{
    ACCENT_PALETTE, DARK_SPHERE, DisplayMode, HourglassTheme, LIGHT_SPHERE, SAND_WHITE,
};
