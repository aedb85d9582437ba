//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;
use hourglass_config::Config;
use hourglass_core::{DisplayMode, Paint};

/// A rotating hourglass for the terminal.
#[derive(Debug, Parser)]
#[command(name = "hourglass", version, about)]
pub struct Cli {
    /// Display mode flag; anything other than "light" is dark
    #[arg(long)]
    pub mode: Option<String>,

    /// Accent color (#RGB, #RRGGBB, #RRGGBBAA, hsl(...) or hsla(...))
    #[arg(long)]
    pub accent: Option<Paint>,

    /// Refresh ticks per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Config file to use instead of the platform default
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the frame at ELAPSED_MS after mount as SVG and exit
    #[arg(long, value_name = "ELAPSED_MS")]
    pub svg: Option<u64>,
}

impl Cli {
    /// Override config values with the flags that were given.
    pub fn apply(&self, config: &mut Config) {
        if let Some(mode) = &self.mode {
            config.mode = DisplayMode::from_flag(mode);
        }
        if let Some(accent) = self.accent {
            config.accent = accent;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        *config = std::mem::take(config).normalized();
    }
}
