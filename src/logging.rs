use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::error::GameError;

/// Initializes the global logger, appending to `path`.
///
/// The terminal is in raw alternate-screen mode while a game runs, so log
/// lines go to a file instead of stderr.  Only info level and above are
/// written.
pub fn init(path: impl AsRef<Path>) -> Result<(), GameError> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| GameError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)));

    // `try_init` only fails if a logger was already set; keep the first one.
    let _ = builder.try_init();
    Ok(())
}
