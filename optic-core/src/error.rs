use thiserror::Error;
use std::io;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid option name: {0:?}")]
    InvalidName(String),

    #[error("Invalid argument(s): {}", .0.join(", "))]
    UnknownOptions(Vec<String>),

    #[error("{} {} required.", .0.join(", "), if .0.len() == 1 { "is" } else { "are" })]
    MissingRequired(Vec<String>),

    #[error("Invalid manifest: {0}")]
    Manifest(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// True for the failures that `CliEngine::handle` reports to the output
    /// sink instead of returning.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::UnknownOptions(_) | Error::MissingRequired(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
