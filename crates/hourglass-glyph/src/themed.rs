//! Layers parsed once per theme and rendered per frame through transforms.

use std::fmt;

use hourglass_core::HourglassTheme;
use hourglass_motion::Pose;
use tiny_skia::Transform;
use usvg::{Group, Node, Tree};

use crate::error::GlyphError;
use crate::layers::{LayerId, Motion, PathRecord};
use crate::rasterize::{Raster, blank_pixmap, fit_transform};
use crate::scene::{VIEW_BOX, layer_document};

struct ParsedLayer {
    id: LayerId,
    motion: Motion,
    tree: Tree,
}

/// The glyph's layers resolved against one theme.
///
/// Parsing happens once, when the theme is applied; [`ThemedGlyph::rasterize`]
/// only applies the pose's rotation and sand offset as transforms.
pub struct ThemedGlyph {
    theme: HourglassTheme,
    layers: Vec<ParsedLayer>,
}

impl ThemedGlyph {
    pub(crate) fn new(records: &[PathRecord], theme: &HourglassTheme) -> Result<Self, GlyphError> {
        let options = usvg::Options::default();
        let layers = records
            .iter()
            .map(|record| -> Result<ParsedLayer, GlyphError> {
                let svg = layer_document(record.id, record.data, &record.fill.resolve(theme));
                let tree = Tree::from_str(&svg, &options)
                    .map_err(|e| GlyphError::Parse(e.to_string()))?;
                // usvg drops paths whose data draws nothing.
                if !contains_path(tree.root(), record.id.svg_id()) {
                    return Err(GlyphError::MissingLayer(record.id.svg_id()));
                }
                Ok(ParsedLayer {
                    id: record.id,
                    motion: record.motion,
                    tree,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(accent = %theme.accent, mode = theme.mode.as_str(), "glyph themed");
        Ok(Self {
            theme: *theme,
            layers,
        })
    }

    pub fn theme(&self) -> &HourglassTheme {
        &self.theme
    }

    /// Render the layers in paint order at `pose` into a `width` × `height`
    /// grid, the view box scaled to fit and centered.
    pub fn rasterize(&self, pose: Pose, width: u32, height: u32) -> Result<Raster, GlyphError> {
        let mut pixmap = blank_pixmap(width, height)?;
        let center = VIEW_BOX / 2.0;
        let rotated = fit_transform(VIEW_BOX, VIEW_BOX, width, height)
            .pre_concat(Transform::from_rotate_at(pose.rotation_deg, center, center));

        for layer in &self.layers {
            let transform = match layer.motion {
                Motion::Static => rotated,
                Motion::SandOffset => {
                    rotated.pre_concat(Transform::from_translate(0.0, pose.sand_offset))
                }
            };
            resvg::render(&layer.tree, transform, &mut pixmap.as_mut());
        }
        Ok(Raster::from_pixmap(&pixmap))
    }
}

impl fmt::Debug for ThemedGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemedGlyph")
            .field("theme", &self.theme)
            .field("layers", &self.layers.iter().map(|l| l.id).collect::<Vec<_>>())
            .finish()
    }
}

fn contains_path(group: &Group, id: &str) -> bool {
    group.children().iter().any(|node| match node {
        Node::Path(path) => path.id() == id,
        Node::Group(child) => contains_path(child, id),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{FillSource, Glyph, LAYERS};
    use hourglass_core::Paint;

    /// Rasterize the full SVG document of the composed scene in one pass.
    fn render_document(theme: &HourglassTheme, pose: Pose, side: u32) -> Raster {
        let svg = Glyph::load().unwrap().compose(theme, pose).to_svg();
        let tree = Tree::from_str(&svg, &usvg::Options::default()).unwrap();
        let mut pixmap = blank_pixmap(side, side).unwrap();
        let transform = fit_transform(VIEW_BOX, VIEW_BOX, side, side);
        resvg::render(&tree, transform, &mut pixmap.as_mut());
        Raster::from_pixmap(&pixmap)
    }

    #[test]
    fn test_matches_scene_document() {
        let theme = HourglassTheme::from_flag("light", Paint::rgb(200, 30, 90));
        let themed = Glyph::load().unwrap().themed(&theme).unwrap();
        let pose = Pose {
            rotation_deg: 63.0,
            sand_offset: 19.5,
        };

        let expected = render_document(&theme, pose, 96);
        let actual = themed.rasterize(pose, 96, 96).unwrap();
        let mut worst = 0;
        for y in 0..96 {
            for x in 0..96 {
                let (a, e) = (actual.pixel(x, y).unwrap(), expected.pixel(x, y).unwrap());
                for (a, e) in a.iter().zip(e.iter()) {
                    worst = worst.max(a.abs_diff(*e));
                }
            }
        }
        assert!(worst <= 4, "max channel difference {worst}");
    }

    #[test]
    fn test_reused_across_frames() {
        let theme = HourglassTheme::default();
        let themed = Glyph::load().unwrap().themed(&theme).unwrap();
        let still = themed.rasterize(Pose::INITIAL, 40, 40).unwrap();
        let moved = Pose {
            rotation_deg: 90.0,
            sand_offset: 0.0,
        };
        let _ = themed.rasterize(moved, 40, 40).unwrap();
        let again = themed.rasterize(Pose::INITIAL, 40, 40).unwrap();

        for y in 0..40 {
            for x in 0..40 {
                assert_eq!(still.pixel(x, y), again.pixel(x, y), "({x}, {y})");
            }
        }
        assert_eq!(themed.theme(), &theme);
    }

    #[test]
    fn test_zero_dimensions_error() {
        let themed = Glyph::load()
            .unwrap()
            .themed(&HourglassTheme::default())
            .unwrap();
        assert!(themed.rasterize(Pose::INITIAL, 0, 24).is_err());
        assert!(themed.rasterize(Pose::INITIAL, 24, 0).is_err());
    }

    #[test]
    fn test_empty_layer_is_missing() {
        let mut records = LAYERS;
        records[2] = PathRecord {
            data: "M10,10",
            fill: FillSource::Sphere,
            ..records[2]
        };
        assert!(matches!(
            ThemedGlyph::new(&records, &HourglassTheme::default()),
            Err(GlyphError::MissingLayer("hourglass-sphere"))
        ));
    }

    #[test]
    fn test_debug_lists_layers() {
        let themed = Glyph::load()
            .unwrap()
            .themed(&HourglassTheme::default())
            .unwrap();
        let debug = format!("{themed:?}");
        assert!(debug.contains("SandFill"));
        assert!(debug.contains("Outline"));
    }
}
