//! Error types for the silkcode library.

use std::io;

use thiserror::Error;

use crate::alphabet::AlphabetKind;

/// Errors produced by the silkcode library.
#[derive(Debug, Error)]
pub enum SilkcodeError {
    /// A key is outside the inclusive range [0, 255].
    #[error("{name} must be a number between 0 and 255, got {value}")]
    KeyOutOfRange {
        /// Which key was rejected (`keybase` or `keying`).
        name: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// Line width of zero.
    #[error("line width must be at least 1")]
    InvalidLineWidth,

    /// Strict decoding met a symbol that is not part of the active alphabet.
    #[error("symbol {symbol:?} at position {position} is not in the {alphabet} alphabet")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Zero-based index of the symbol among non-break characters.
        position: u64,
        /// Alphabet the stream was decoded with.
        alphabet: AlphabetKind,
    },

    /// Read or write failure on one of the streams.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SilkcodeError>;
