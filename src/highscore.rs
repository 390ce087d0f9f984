/// High-score persistence: one non-negative decimal integer in a text file.
///
/// Loading never fails from the caller's point of view: a missing, empty,
/// unparsable or negative file reads as 0 and the reason is logged.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::HighScoreError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HighScoreFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict read: a missing or empty file is 0, anything malformed is an
    /// error.
    pub fn read(&self) -> Result<u32, HighScoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(source) => {
                return Err(HighScoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        parse_score(content.trim()).map_err(|e| match e {
            ParseFailure::Syntax(source) => HighScoreError::Parse {
                path: self.path.clone(),
                source,
            },
            ParseFailure::Negative(value) => HighScoreError::Negative {
                path: self.path.clone(),
                value,
            },
        })
    }

    /// Lenient read used at startup.
    pub fn load(&self) -> u32 {
        self.read().unwrap_or_else(|e| {
            warn!("{e}; using high score 0");
            0
        })
    }

    /// Overwrite the file with `score`.
    pub fn write(&self, score: u32) -> Result<(), HighScoreError> {
        fs::write(&self.path, score.to_string()).map_err(|source| HighScoreError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Write, logging instead of failing.
    pub fn save(&self, score: u32) {
        if let Err(e) = self.write(score) {
            warn!("{e}; high score not saved");
        }
    }
}

enum ParseFailure {
    Syntax(std::num::ParseIntError),
    Negative(i64),
}

fn parse_score(text: &str) -> Result<u32, ParseFailure> {
    if text.is_empty() {
        return Ok(0);
    }
    let value: i64 = text.parse().map_err(ParseFailure::Syntax)?;
    if value < 0 {
        return Err(ParseFailure::Negative(value));
    }
    u32::try_from(value).or(Ok(u32::MAX))
}
