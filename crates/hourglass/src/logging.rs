//! File logging. The terminal belongs to the UI, so events go to
//! `<data dir>/hourglass.log`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "HOURGLASS_LOG";
const LOG_FILE: &str = "hourglass.log";

/// Install the global subscriber. Returns the log file path, or `None` when
/// there is no usable log file; the program then runs without logging.
pub fn init() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "hourglass")?;
    let (file, path) = match open_log(dirs.data_local_dir()) {
        Ok(opened) => opened,
        Err(e) => {
            eprintln!("hourglass: logging disabled: {e}");
            return None;
        }
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();

    Some(path)
}

/// Open `dir/hourglass.log` for appending, creating `dir` if needed.
fn open_log(dir: &Path) -> io::Result<(File, PathBuf)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}
