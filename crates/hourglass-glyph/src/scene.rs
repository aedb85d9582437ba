//! A composed frame of the glyph.

use std::fmt::Write as _;

use hourglass_core::Paint;

use crate::layers::LayerId;

/// Side of the square view box, in user units.
pub const VIEW_BOX: f32 = 120.0;

/// A path record bound to concrete values.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub id: LayerId,
    pub data: &'static str,
    pub fill: Paint,
    /// Vertical translation in view-box units.
    pub translate_y: f32,
}

/// One frame: layers in paint order plus the rotation of the whole view box
/// about its center.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub rotation_deg: f32,
    pub layers: Vec<Layer>,
}

impl Scene {
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    /// Render a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let center = VIEW_BOX / 2.0;
        let mut svg = String::with_capacity(4096);

        svg.push_str(&svg_open_tag());
        let _ = writeln!(
            svg,
            r#"  <g transform="rotate({:.3} {center} {center})">"#,
            self.rotation_deg
        );

        for layer in &self.layers {
            let path = path_element(layer.id, layer.data, &layer.fill);
            if layer.translate_y == 0.0 {
                let _ = writeln!(svg, "    {path}");
            } else {
                let _ = writeln!(
                    svg,
                    r#"    <g transform="translate(0 {:.3})">{path}</g>"#,
                    layer.translate_y
                );
            }
        }

        svg.push_str("  </g>\n</svg>\n");
        svg
    }
}

/// A document holding a single untransformed layer.
pub(crate) fn layer_document(id: LayerId, data: &str, fill: &Paint) -> String {
    format!("{}  {}\n</svg>\n", svg_open_tag(), path_element(id, data, fill))
}

fn svg_open_tag() -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" height="{VIEW_BOX}" viewBox="0 0 {VIEW_BOX} {VIEW_BOX}" width="{VIEW_BOX}">"#
    ) + "\n"
}

fn path_element(id: LayerId, data: &str, fill: &Paint) -> String {
    format!(
        r#"<path id="{}" d="{}" {} fill-rule="nonzero"/>"#,
        id.svg_id(),
        data,
        fill_attributes(fill)
    )
}

/// `fill` (and `fill-opacity` for translucent hex colors) for a paint.
fn fill_attributes(paint: &Paint) -> String {
    match *paint {
        Paint::Hex { r, g, b, a: 255 } => format!(r##"fill="#{r:02X}{g:02X}{b:02X}""##),
        Paint::Hex { r, g, b, a } => format!(
            r##"fill="#{r:02X}{g:02X}{b:02X}" fill-opacity="{:.3}""##,
            f32::from(a) / 255.0
        ),
        Paint::Hsla { .. } => format!(r#"fill="{paint}""#),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::Glyph;
    use hourglass_core::HourglassTheme;
    use hourglass_motion::Pose;

    fn scene(flag: &str, accent: &str, pose: Pose) -> Scene {
        let theme = HourglassTheme::from_flag(flag, accent.parse().unwrap());
        Glyph::load().unwrap().compose(&theme, pose)
    }

    #[test]
    fn test_svg_paint_order() {
        let svg = scene("dark", "#00FF00", Pose::INITIAL).to_svg();
        let positions: Vec<usize> = [
            "sand-fill-color",
            "hourglass-sand-mask",
            "hourglass-sphere",
            "hourglass-outline",
        ]
        .iter()
        .map(|id| svg.find(&format!(r#"id="{id}""#)).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_svg_transforms() {
        let pose = Pose {
            rotation_deg: -180.0,
            sand_offset: 17.5,
        };
        let svg = scene("light", "#FF0000", pose).to_svg();
        assert!(svg.contains(r#"rotate(-180.000 60 60)"#));
        assert!(svg.contains(r#"<g transform="translate(0 17.500)"><path id="hourglass-sand-mask""#));
        assert!(svg.contains(r#"fill="hsla(255,50%,98%,1.00)""#));
        assert!(svg.contains(r##"fill="#FF0000""##));

        let svg = scene("light", "#FF0000", Pose::INITIAL).to_svg();
        assert!(!svg.contains("translate("));
    }

    #[test]
    fn test_translucent_accent() {
        let svg = scene("dark", "#FF000080", Pose::INITIAL).to_svg();
        assert!(svg.contains(r#"fill-opacity="0.502""#));
    }

    #[test]
    fn test_svg_parses() {
        let svg = scene("dark", "#123456", Pose::INITIAL).to_svg();
        let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
        assert_eq!(tree.size().width(), VIEW_BOX);
        assert_eq!(tree.size().height(), VIEW_BOX);
    }

    #[test]
    fn test_layer_document() {
        let doc = layer_document(LayerId::Outline, "M0,0 L10,0 L10,10 Z", &Paint::rgb(255, 0, 0));
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains(r##"<path id="hourglass-outline" d="M0,0 L10,0 L10,10 Z" fill="#FF0000""##));
        assert!(!doc.contains("transform"));
        assert!(doc.ends_with("</svg>\n"));
    }
}
