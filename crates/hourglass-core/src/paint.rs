//! Paint tokens: the colors a glyph layer can be filled with.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::hsl_to_rgb;

/// Errors produced while parsing a paint token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaintError {
    #[error("empty color token")]
    Empty,
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),
    #[error("invalid hsl color `{0}`")]
    InvalidHsl(String),
    #[error("unsupported color syntax `{0}`")]
    Unsupported(String),
}

/// A color token.
///
/// Tokens keep the notation they were written in so they can be written
/// back into SVG output and config files unchanged in meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Paint {
    /// Hex RGB color with alpha.
    Hex { r: u8, g: u8, b: u8, a: u8 },
    /// HSL color. Hue in degrees, saturation and lightness in percent,
    /// alpha in 0.0..=1.0.
    Hsla { h: f32, s: f32, l: f32, a: f32 },
}

impl Paint {
    /// Opaque hex color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Paint::Hex { r, g, b, a: 255 }
    }

    /// Resolve to 8-bit RGBA.
    pub fn rgba(&self) -> [u8; 4] {
        match *self {
            Paint::Hex { r, g, b, a } => [r, g, b, a],
            Paint::Hsla { h, s, l, a } => {
                let [r, g, b] = hsl_to_rgb(h, s / 100.0, l / 100.0);
                [r, g, b, (a.clamp(0.0, 1.0) * 255.0).round() as u8]
            }
        }
    }

    /// Convert to a Ratatui color. Alpha is dropped.
    pub fn color(&self) -> Color {
        let [r, g, b, _] = self.rgba();
        Color::Rgb(r, g, b)
    }

    fn parse_hex(token: &str) -> Result<Self, PaintError> {
        let invalid = || PaintError::InvalidHex(token.to_string());
        let digits = token.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let nibble = |i: usize| {
            u8::from_str_radix(&digits[i..i + 1], 16)
                .map(|v| v * 17)
                .map_err(|_| invalid())
        };

        match digits.len() {
            3 => Ok(Paint::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Ok(Paint::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Paint::Hex {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            _ => Err(invalid()),
        }
    }

    fn parse_hsl(token: &str) -> Result<Self, PaintError> {
        let invalid = || PaintError::InvalidHsl(token.to_string());
        let lower = token.to_ascii_lowercase();

        let (args, with_alpha) = if let Some(rest) = lower.strip_prefix("hsla(") {
            (rest, true)
        } else if let Some(rest) = lower.strip_prefix("hsl(") {
            (rest, false)
        } else {
            return Err(invalid());
        };
        let args = args.strip_suffix(')').ok_or_else(invalid)?;

        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(invalid());
        }

        let number = |s: &str| s.parse::<f32>().ok().filter(|v| v.is_finite());
        let percent = |s: &str| {
            s.strip_suffix('%')
                .and_then(number)
                .filter(|v| (0.0..=100.0).contains(v))
        };

        let h = number(parts[0]).ok_or_else(invalid)?;
        let s = percent(parts[1]).ok_or_else(invalid)?;
        let l = percent(parts[2]).ok_or_else(invalid)?;
        let a = if with_alpha {
            number(parts[3])
                .filter(|v| (0.0..=1.0).contains(v))
                .ok_or_else(invalid)?
        } else {
            1.0
        };

        Ok(Paint::Hsla { h, s, l, a })
    }
}

impl FromStr for Paint {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(PaintError::Empty);
        }
        if token.starts_with('#') {
            return Self::parse_hex(token);
        }
        if token.to_ascii_lowercase().starts_with("hsl") {
            return Self::parse_hsl(token);
        }
        Err(PaintError::Unsupported(token.to_string()))
    }
}

impl TryFrom<String> for Paint {
    type Error = PaintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Paint> for String {
    fn from(paint: Paint) -> Self {
        paint.to_string()
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Paint::Hex { r, g, b, a: 255 } => write!(f, "#{r:02X}{g:02X}{b:02X}"),
            Paint::Hex { r, g, b, a } => write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}"),
            Paint::Hsla { h, s, l, a } => write!(
                f,
                "hsla({},{}%,{}%,{a:.2})",
                Trimmed(h),
                Trimmed(s),
                Trimmed(l)
            ),
        }
    }
}

/// Prints whole numbers without a fractional part.
struct Trimmed(f32);

impl fmt::Display for Trimmed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!("#FF0000".parse(), Ok(Paint::rgb(255, 0, 0)));
        assert_eq!("#fff".parse(), Ok(Paint::rgb(255, 255, 255)));
        assert_eq!(
            "#00FF0080".parse(),
            Ok(Paint::Hex {
                r: 0,
                g: 255,
                b: 0,
                a: 128
            })
        );
        assert!(matches!("#12345".parse::<Paint>(), Err(PaintError::InvalidHex(_))));
        assert!(matches!("#GG0000".parse::<Paint>(), Err(PaintError::InvalidHex(_))));
    }

    #[test]
    fn test_parse_hsla() {
        assert_eq!(
            "hsla(262, 55%, 18%, 1.00)".parse(),
            Ok(Paint::Hsla {
                h: 262.0,
                s: 55.0,
                l: 18.0,
                a: 1.0
            })
        );
        assert_eq!(
            "HSL(10, 20%, 30%)".parse(),
            Ok(Paint::Hsla {
                h: 10.0,
                s: 20.0,
                l: 30.0,
                a: 1.0
            })
        );
        assert!(matches!("hsla(1, 2%, 3%)".parse::<Paint>(), Err(PaintError::InvalidHsl(_))));
        assert!(matches!("hsl(1, 200%, 3%)".parse::<Paint>(), Err(PaintError::InvalidHsl(_))));
        assert!(matches!("hsl(1, 2, 3%)".parse::<Paint>(), Err(PaintError::InvalidHsl(_))));
    }

    #[test]
    fn test_parse_other() {
        assert_eq!("  ".parse::<Paint>(), Err(PaintError::Empty));
        assert_eq!(
            "white".parse::<Paint>(),
            Err(PaintError::Unsupported("white".to_string()))
        );
        assert!(matches!("Black".parse::<Paint>(), Err(PaintError::Unsupported(_))));
        assert!(matches!("rgb(1,2,3)".parse::<Paint>(), Err(PaintError::Unsupported(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Paint::rgb(255, 0, 0).to_string(), "#FF0000");
        assert_eq!("#0f0".parse::<Paint>().unwrap().to_string(), "#00FF00");
        assert_eq!(
            "hsla(255, 50%, 98%, 1)".parse::<Paint>().unwrap().to_string(),
            "hsla(255,50%,98%,1.00)"
        );
        assert_eq!(
            "hsl(12.5, 40%, 60%)".parse::<Paint>().unwrap().to_string(),
            "hsla(12.5,40%,60%,1.00)"
        );
    }

    #[test]
    fn test_rgba() {
        assert_eq!(Paint::rgb(1, 2, 3).rgba(), [1, 2, 3, 255]);
        let red = Paint::Hsla {
            h: 0.0,
            s: 100.0,
            l: 50.0,
            a: 0.5,
        };
        assert_eq!(red.rgba(), [255, 0, 0, 128]);
        assert_eq!(red.color(), Color::Rgb(255, 0, 0));
    }
}
