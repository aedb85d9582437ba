//! Terminal rendering of a rasterized scene with half-block cells.

use hourglass_glyph::Raster;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Pixels fainter than this are left to the terminal background.
const MIN_ALPHA: u8 = 96;

/// Build one line per two raster rows. The upper pixel of a cell is drawn
/// with `▀`'s foreground, the lower one with its background.
pub fn hourglass_lines(raster: &Raster) -> Vec<Line<'static>> {
    (0..raster.height().div_ceil(2))
        .map(|row| {
            let spans: Vec<Span> = (0..raster.width())
                .map(|x| {
                    let top = raster.opaque_rgb(x, row * 2, MIN_ALPHA);
                    let bottom = raster.opaque_rgb(x, row * 2 + 1, MIN_ALPHA);
                    render_cell(top, bottom)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_cell(top: Option<[u8; 3]>, bottom: Option<[u8; 3]>) -> Span<'static> {
    let rgb = |[r, g, b]: [u8; 3]| Color::Rgb(r, g, b);
    match (top, bottom) {
        (Some(t), Some(b)) => Span::styled("▀", Style::new().fg(rgb(t)).bg(rgb(b))),
        (Some(t), None) => Span::styled("▀", Style::new().fg(rgb(t))),
        (None, Some(b)) => Span::styled("▄", Style::new().fg(rgb(b))),
        (None, None) => Span::raw(" "),
    }
}

/// Glyph side in columns for an area, leaving `reserved_rows` free.
/// Each row holds two pixels, so a square glyph `n` columns wide needs
/// `n / 2` rows.
pub fn glyph_side(width: u16, height: u16, reserved_rows: u16, max_side: u16) -> u16 {
    let rows = height.saturating_sub(reserved_rows);
    let side = width.min(rows.saturating_mul(2)).min(max_side);
    side - side % 2
}
