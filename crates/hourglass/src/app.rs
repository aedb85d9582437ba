//! The terminal application: refresh loop, input and layout.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use hourglass_config::Config;
use hourglass_core::HourglassTheme;
use hourglass_glyph::{Glyph, ThemedGlyph};
use hourglass_motion::HourglassAnimator;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

use crate::widget::{glyph_side, hourglass_lines};

/// Rows kept below the glyph for the status and help lines.
const RESERVED_ROWS: u16 = 3;

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Theme currently shown.
    theme: HourglassTheme,
    /// Loaded config, written back on save.
    config: Config,
    config_path: PathBuf,
    glyph: Glyph,
    /// Layers parsed for `theme`, rebuilt when the theme changes.
    themed: ThemedGlyph,
    animator: HourglassAnimator,
    /// Clock origin for the animator.
    started: Instant,
    /// One-line feedback shown above the help text.
    status: Option<String>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, config_path: PathBuf, glyph: Glyph) -> color_eyre::Result<Self> {
        let theme = config.theme();
        let themed = glyph.themed(&theme)?;
        Ok(Self {
            running: false,
            theme,
            config,
            config_path,
            glyph,
            themed,
            animator: HourglassAnimator::new(),
            started: Instant::now(),
            status: None,
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.animator.mount(self.now_ms());
        while self.running {
            self.animator.tick(self.now_ms());
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        self.animator.unmount();
        tracing::info!("stopped");
        Ok(())
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let accent = self.theme.accent().color();
        let side = glyph_side(area.width, area.height, RESERVED_ROWS, self.config.max_size);

        let rows = Layout::vertical([
            Constraint::Fill(1),               // Top padding
            Constraint::Length(side / 2),      // Glyph
            Constraint::Fill(1),               // Bottom padding
            Constraint::Length(1),             // Status
            Constraint::Length(1),             // Spacing
            Constraint::Length(1),             // Help text
        ])
        .split(area);
        let [_, glyph_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(side),
            Constraint::Fill(1),
        ])
        .areas(rows[1]);

        if side > 0 {
            let pose = self.animator.pose();
            match self.themed.rasterize(pose, u32::from(side), u32::from(side)) {
                Ok(raster) => {
                    frame.render_widget(Paragraph::new(hourglass_lines(&raster)), glyph_area)
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to rasterize frame");
                    frame.render_widget(
                        Paragraph::new(e.to_string()).alignment(Alignment::Center),
                        rows[1],
                    );
                }
            }
        }

        if let Some(status) = &self.status {
            let status = Paragraph::new(status.as_str())
                .style(Style::new().dark_gray())
                .alignment(Alignment::Center);
            frame.render_widget(status, rows[3]);
        }

        let pause_label = if self.animator.is_mounted() {
            " pause  "
        } else {
            " resume  "
        };
        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "m".bold().fg(accent),
            format!(" {} mode  ", self.theme.mode.toggle().as_str()).dark_gray(),
            "c".bold().fg(accent),
            " cycle color  ".dark_gray(),
            "r".bold().fg(accent),
            " restart  ".dark_gray(),
            "p".bold().fg(accent),
            pause_label.dark_gray(),
            "s".bold().fg(accent),
            " save".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, rows[5]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with the refresh interval as timeout so the animation keeps
    /// moving without input.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(self.config.tick_ms()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('m')) => self.toggle_mode(),
            (_, KeyCode::Char('c')) => self.cycle_accent(),
            (_, KeyCode::Char('r')) => self.restart(),
            (_, KeyCode::Char('p')) => self.toggle_pause(),
            (_, KeyCode::Char('s')) => self.save_config(),
            _ => {}
        }
    }

    fn toggle_mode(&mut self) {
        self.theme.mode = self.theme.mode.toggle();
        tracing::debug!(mode = self.theme.mode.as_str(), "display mode changed");
        self.retheme();
    }

    fn cycle_accent(&mut self) {
        self.theme.cycle_accent();
        tracing::debug!(accent = %self.theme.accent, "accent changed");
        self.retheme();
    }

    /// Parse the layers again for the current theme.
    fn retheme(&mut self) {
        match self.glyph.themed(&self.theme) {
            Ok(themed) => self.themed = themed,
            Err(e) => {
                tracing::error!(error = %e, "failed to apply theme");
                self.status = Some(format!("theme failed: {e}"));
            }
        }
    }

    /// Remount, starting both loops over.
    fn restart(&mut self) {
        self.animator.mount(self.now_ms());
        self.status = None;
    }

    /// Unmount to freeze at the initial pose, mount again to resume from it.
    fn toggle_pause(&mut self) {
        if self.animator.is_mounted() {
            self.animator.unmount();
        } else {
            self.animator.mount(self.now_ms());
        }
    }

    fn save_config(&mut self) {
        self.config.set_theme(&self.theme);
        self.status = Some(match self.config.save_to(&self.config_path) {
            Ok(()) => format!("saved {}", self.config_path.display()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to save config");
                format!("save failed: {e}")
            }
        });
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
