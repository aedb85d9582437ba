use clap::Parser;
use hourglass_config::Config;
use hourglass_glyph::Glyph;
use hourglass_motion::HourglassAnimator;

mod app;
mod cli;
mod logging;
mod widget;

use app::App;
use cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let log_path = logging::init();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let mut config = Config::load_from(&config_path)?;
    cli.apply(&mut config);
    let glyph = Glyph::load()?;

    tracing::info!(
        mode = config.mode.as_str(),
        accent = %config.accent,
        fps = config.fps,
        log = ?log_path,
        "starting"
    );

    if let Some(elapsed_ms) = cli.svg {
        let pose = HourglassAnimator::new().pose_at(elapsed_ms);
        print!("{}", glyph.compose(&config.theme(), pose).to_svg());
        return Ok(());
    }

    let app = App::new(config, config_path, glyph)?;
    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}
