use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("could not access high score file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("high score file {path:?} does not hold an integer: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseIntError,
    },
    #[error("high score file {path:?} holds a negative score ({value})")]
    Negative { path: PathBuf, value: i64 },
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal setup failed: {0}")]
    TerminalSetup(#[source] io::Error),
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
    #[error("could not open log file {path:?}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
