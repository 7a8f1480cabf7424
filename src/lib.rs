//! silkcode: reversible byte-to-wide-character stream transcoder.
//!
//! Maps every byte of a stream to one of 256 printable wide characters and
//! back. Before lookup, the byte at position `i` is shifted by
//! `(keybase * (i + 1) + keying) mod 256`, so repeated input bytes produce
//! varying symbols. Encoded output is wrapped with CRLF line breaks.
//!
//! The shift is an obfuscation, not encryption.
//!
//! # Architecture
//!
//! ```text
//! Alphabet     (256-symbol table + reverse index, one per AlphabetKind)
//!     ↕
//! Encoder / Decoder  (positional shift, line wrapping, rune scanning)
//!     ↕
//! Transcoder   (configuration + mode dispatch)
//! ```
//!
//! # Examples
//!
//! Stream a buffer through the encoder and back:
//!
//! ```
//! use silkcode::{KeyPair, Mode, Transcoder};
//!
//! let transcoder = Transcoder::new(KeyPair::new(7, 99).unwrap());
//!
//! let mut encoded = Vec::new();
//! transcoder.process(&b"\x00\x01binary\xff"[..], &mut encoded, Mode::Encode).unwrap();
//!
//! let mut decoded = Vec::new();
//! transcoder.process(&encoded[..], &mut decoded, Mode::Decode).unwrap();
//! assert_eq!(decoded, b"\x00\x01binary\xff");
//! ```
//!
//! Pick a narrower line width and the Hangul alphabet:
//!
//! ```
//! use silkcode::{AlphabetKind, KeyPair, LineWidth, Transcoder, TranscoderConfig};
//!
//! let config = TranscoderConfig::new(KeyPair::new(0, 0).unwrap())
//!     .with_line_width(LineWidth::new(2).unwrap())
//!     .with_alphabet(AlphabetKind::Hangul);
//! let transcoder = Transcoder::with_config(config);
//!
//! assert_eq!(transcoder.encode_to_string(&[0, 1, 2]).unwrap(), "가각\r\n갂\r\n");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod config;
pub mod error;

mod decoder;
mod encoder;
mod transcoder;
pub(crate) mod utils;

pub use alphabet::{Alphabet, AlphabetKind};
pub use config::{KeyPair, LineWidth, TranscoderConfig};
pub use error::{Result, SilkcodeError};
pub use transcoder::{Mode, TranscodeStats, Transcoder};
