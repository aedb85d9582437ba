//! The hourglass glyph.
//!
//! Four path records drawn in a fixed order inside a 120×120 view box:
//! a white sand fill, an accent sand mask that slides vertically, a sphere
//! with an hourglass cut-out, and an accent outline on top. A [`Scene`] binds
//! those records to a theme and a pose and can be written out as SVG. A
//! [`ThemedGlyph`] holds the layers parsed for one theme and rasterizes them
//! at any pose.
//!
//! ```ignore
//! let glyph = Glyph::load()?;
//! let themed = glyph.themed(&theme)?;
//! let raster = themed.rasterize(animator.tick(now_ms), 60, 60)?;
//! ```

mod error;
mod layers;
mod rasterize;
mod scene;
mod themed;

pub use error::GlyphError;
pub use layers::{FillSource, Glyph, LAYERS, LayerId, Motion, PathRecord};
pub use rasterize::Raster;
pub use scene::{Layer, Scene, VIEW_BOX};
pub use themed::ThemedGlyph;
