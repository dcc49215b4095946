//! Error types for html2md operations.

use thiserror::Error;

/// Errors that abort a conversion.
///
/// Structural events (end of stream, a closed element, an element that is not
/// legal in the current grammar) are not errors; see
/// [`Signal`](crate::markdown::Signal).
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
