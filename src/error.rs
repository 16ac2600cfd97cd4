//! Error types for dictionary curation
//!
//! Every failure is fatal: the run aborts before the output file is touched.

use std::io;
use std::path::PathBuf;

/// Errors produced while curating a dictionary
#[derive(Debug, thiserror::Error)]
pub enum CurateError {
    /// Neither a raw wordlist nor an existing dataset was found
    #[error(
        "nothing to curate: neither wordlist {} nor dataset {} exists",
        wordlist.display(),
        dataset.display()
    )]
    MissingInput { wordlist: PathBuf, dataset: PathBuf },

    /// The existing dataset is not a JSON array of objects
    #[error("failed to parse dataset {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A source file could not be read
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The curated output could not be written
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The curated entries could not be encoded
    #[error("failed to encode curated dataset")]
    Serialize(#[source] serde_json::Error),

    /// The word pattern is not a valid regex
    #[error("invalid word pattern")]
    Pattern(#[from] regex::Error),
}

impl CurateError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CurateError>;
