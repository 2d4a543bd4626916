// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures. Anything here aborts the run before a result is emitted.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {page} page '{path}': {source}")]
    Input {
        page: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} page is empty")]
    EmptyInput(&'static str),

    #[error("cannot write output '{path}': {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why one nested marks table was dropped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("table is not inside a row")]
    Detached,

    #[error("owning row has no course code cell")]
    NoCodeCell,

    #[error("code cell holds header text '{0}'")]
    HeaderCode(String),
}
