//! Crate error type, in the idiom of the pack's `thiserror`-based error
//! enums (e.g. `dt-spatial::error::SpatialError`) rather than the teacher's
//! inline `.expect(...)` calls, since this crate propagates failures up to
//! `main` instead of crashing on them.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{file}:{line}: malformed line {text:?}")]
    ParseLine {
        file: &'static str,
        line: usize,
        text: String,
    },
}

pub type SimResult<T> = Result<T, SimError>;
