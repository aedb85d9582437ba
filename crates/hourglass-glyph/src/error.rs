//! Glyph error types

use thiserror::Error;

/// Errors that can occur while building or rendering the glyph
#[derive(Error, Debug)]
pub enum GlyphError {
    /// The generated SVG could not be parsed
    #[error("SVG parsing error: {0}")]
    Parse(String),

    /// A layer's path data produced no drawable path
    #[error("layer `{0}` has no drawable path data")]
    MissingLayer(&'static str),

    /// Requested raster size is empty
    #[error("invalid raster size {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}
