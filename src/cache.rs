//! Optional JSON artifacts for reuse across runs: the enumerated path list
//! and the dedup listing of score classes. The on-disk layout round-trips
//! through this module but carries no further schema guarantee.

use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path as FilePath;

use serde::{Deserialize, Serialize};

use crate::path::Path;
use crate::score::ScoreClasses;

/// Reasons reading or writing an artifact may fail.
#[derive(Debug)]
pub enum CacheError {
    /// The underlying file could not be read or written.
    Io(std::io::Error),
    /// The artifact did not hold what was expected.
    Format(serde_json::Error),
}

impl Display for CacheError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "artifact i/o failed: {}", e),
            Self::Format(e) => write!(f, "malformed artifact: {}", e),
        }
    }
}

impl std::error::Error for CacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Format(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for CacheError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(value: serde_json::Error) -> Self {
        Self::Format(value)
    }
}

/// One score class as persisted: the expression rendered for inspection and
/// the paths folding to it, machine-readable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoreClassRecord {
    /// The class's score expression, rendered.
    pub expression: String,
    /// Every path folding to that expression.
    pub paths: Vec<Path>,
}

/// Persist an enumerated path list.
pub fn save_paths(file: impl AsRef<FilePath>, paths: &[Path]) -> Result<(), CacheError> {
    let writer = BufWriter::new(File::create(file)?);
    serde_json::to_writer_pretty(writer, paths)?;
    Ok(())
}

/// Reload a previously persisted path list.
pub fn load_paths(file: impl AsRef<FilePath>) -> Result<Vec<Path>, CacheError> {
    let reader = BufReader::new(File::open(file)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Persist a dedup listing, one record per score class. Class order is
/// unspecified.
pub fn save_score_classes(file: impl AsRef<FilePath>, classes: &ScoreClasses) -> Result<(), CacheError> {
    let records = classes.iter()
        .map(|(expression, paths)| ScoreClassRecord {
            expression: expression.to_string(),
            paths: paths.clone(),
        })
        .collect::<Vec<_>>();

    let writer = BufWriter::new(File::create(file)?);
    serde_json::to_writer_pretty(writer, &records)?;
    Ok(())
}

/// Reload a previously persisted dedup listing.
pub fn load_score_classes(file: impl AsRef<FilePath>) -> Result<Vec<ScoreClassRecord>, CacheError> {
    let reader = BufReader::new(File::open(file)?);
    Ok(serde_json::from_reader(reader)?)
}
