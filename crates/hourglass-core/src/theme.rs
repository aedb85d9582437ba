//! Display mode and theme paints.

use serde::{Deserialize, Serialize};

use crate::paint::Paint;

/// Sphere fill used in dark mode.
pub const DARK_SPHERE: Paint = Paint::Hsla {
    h: 262.0,
    s: 55.0,
    l: 18.0,
    a: 1.0,
};

/// Sphere fill used in light mode.
pub const LIGHT_SPHERE: Paint = Paint::Hsla {
    h: 255.0,
    s: 50.0,
    l: 98.0,
    a: 1.0,
};

/// Static fill behind the sand mask.
pub const SAND_WHITE: Paint = Paint::rgb(255, 255, 255);

/// Accents offered when cycling colors interactively.
pub const ACCENT_PALETTE: [Paint; 6] = [
    Paint::rgb(0x1E, 0x5A, 0xFF),
    Paint::rgb(0x00, 0xC2, 0xA8),
    Paint::rgb(0xFF, 0x49, 0x4A),
    Paint::rgb(0xFF, 0xA7, 0x00),
    Paint::rgb(0xA2, 0x5B, 0xFF),
    Paint::rgb(0xFF, 0x5C, 0xA0),
];

/// Display mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DisplayMode {
    Light,
    #[default]
    Dark,
}

impl DisplayMode {
    /// Interpret a display-mode flag. Only the exact string `"light"` is
    /// light mode; everything else is dark.
    pub fn from_flag(flag: &str) -> Self {
        if flag == "light" {
            DisplayMode::Light
        } else {
            DisplayMode::Dark
        }
    }

    /// Switch to the other mode.
    pub fn toggle(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }
}

impl From<String> for DisplayMode {
    fn from(flag: String) -> Self {
        DisplayMode::from_flag(&flag)
    }
}

impl From<DisplayMode> for String {
    fn from(mode: DisplayMode) -> Self {
        mode.as_str().to_string()
    }
}

/// The theme values the hourglass reads: display mode and accent paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourglassTheme {
    pub mode: DisplayMode,
    pub accent: Paint,
}

impl Default for HourglassTheme {
    fn default() -> Self {
        Self {
            mode: DisplayMode::default(),
            accent: ACCENT_PALETTE[0],
        }
    }
}

impl HourglassTheme {
    pub fn new(mode: DisplayMode, accent: Paint) -> Self {
        Self { mode, accent }
    }

    /// Build a theme from a raw display-mode flag.
    pub fn from_flag(flag: &str, accent: Paint) -> Self {
        Self::new(DisplayMode::from_flag(flag), accent)
    }

    /// Fill of the sphere layer.
    pub fn sphere_fill(&self) -> Paint {
        match self.mode {
            DisplayMode::Dark => DARK_SPHERE,
            DisplayMode::Light => LIGHT_SPHERE,
        }
    }

    pub fn accent(&self) -> Paint {
        self.accent
    }

    /// Move the accent to the next palette entry. Accents outside the
    /// palette restart at its first entry.
    pub fn cycle_accent(&mut self) {
        let next = ACCENT_PALETTE
            .iter()
            .position(|p| *p == self.accent)
            .map_or(0, |i| (i + 1) % ACCENT_PALETTE.len());
        self.accent = ACCENT_PALETTE[next];
    }
}
