// third-party imports
use thiserror::Error;

/// Error is an error which may occur in this library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid property path {0:?}")]
    InvalidPath(String),
    #[error(transparent)]
    Wildcards(#[from] wildmatch::Error),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
