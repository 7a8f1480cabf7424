//! Transcoder: the public entry point for encoding and decoding streams.

use std::io::{self, Read, Write};

use tracing::debug;

use crate::config::{KeyPair, TranscoderConfig};
use crate::error::{Result, SilkcodeError};
use crate::{decoder, encoder};

/// Direction of a transcoding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Bytes to symbols.
    #[default]
    Encode,
    /// Symbols to bytes.
    Decode,
}

impl Mode {
    /// `Decode` when `decode` is set, otherwise `Encode`.
    pub fn from_decode_flag(decode: bool) -> Self {
        if decode {
            Mode::Decode
        } else {
            Mode::Encode
        }
    }
}

/// Counters describing one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscodeStats {
    /// Bytes read (encode) or written (decode).
    pub bytes: u64,
    /// Symbols written (encode) or read (decode).
    pub symbols: u64,
    /// CRLF sequences written (encode), or CR and LF characters skipped (decode).
    pub line_breaks: u64,
    /// Symbols outside the alphabet that decoded via the fallback byte.
    pub unknown_symbols: u64,
}

/// Reversible byte-to-symbol stream transcoder.
///
/// Holds no per-stream state: every call to [`encode`](Self::encode),
/// [`decode`](Self::decode) or [`process`](Self::process) starts again at
/// position 0, so one transcoder can serve any number of streams.
///
/// # Examples
///
/// ```
/// use silkcode::{KeyPair, Transcoder};
///
/// let transcoder = Transcoder::new(KeyPair::new(17, 42).unwrap());
///
/// let text = transcoder.encode_to_string(b"hello").unwrap();
/// assert!(text.ends_with("\r\n"));
///
/// let bytes = transcoder.decode_str(&text).unwrap();
/// assert_eq!(bytes, b"hello");
/// ```
#[derive(Debug, Clone)]
pub struct Transcoder {
    config: TranscoderConfig,
}

impl Transcoder {
    /// Creates a transcoder with default width, CJK alphabet and lenient decoding.
    pub fn new(keys: KeyPair) -> Self {
        Self::with_config(TranscoderConfig::new(keys))
    }

    /// Creates a transcoder from a full configuration.
    pub fn with_config(config: TranscoderConfig) -> Self {
        Transcoder { config }
    }

    /// The configuration every run uses.
    pub fn config(&self) -> &TranscoderConfig {
        &self.config
    }

    /// Encodes `reader` to `writer` until end of stream.
    ///
    /// # Errors
    /// Returns [`SilkcodeError::Io`](crate::SilkcodeError::Io) on any read or
    /// write failure. Output produced before the failure is flushed.
    pub fn encode<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<TranscodeStats> {
        encoder::encode(&self.config, reader, writer)
    }

    /// Decodes `reader` to `writer` until end of stream.
    ///
    /// # Errors
    /// Returns [`SilkcodeError::Io`](crate::SilkcodeError::Io) on any read or
    /// write failure, and
    /// [`SilkcodeError::UnknownSymbol`](crate::SilkcodeError::UnknownSymbol)
    /// in strict mode when a symbol is not in the alphabet.
    pub fn decode<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<TranscodeStats> {
        decoder::decode(&self.config, reader, writer)
    }

    /// Runs the encoder or the decoder depending on `mode`.
    pub fn process<R: Read, W: Write>(
        &self,
        reader: R,
        writer: W,
        mode: Mode,
    ) -> Result<TranscodeStats> {
        debug!(
            ?mode,
            keybase = self.config.keys.keybase(),
            keying = self.config.keys.keying(),
            width = self.config.line_width.get(),
            alphabet = %self.config.alphabet,
            strict = self.config.strict,
            "starting run"
        );
        let stats = match mode {
            Mode::Decode => self.decode(reader, writer)?,
            Mode::Encode => self.encode(reader, writer)?,
        };
        debug!(
            bytes = stats.bytes,
            symbols = stats.symbols,
            line_breaks = stats.line_breaks,
            unknown_symbols = stats.unknown_symbols,
            "run complete"
        );
        Ok(stats)
    }

    /// Encodes an in-memory buffer to a `String`.
    pub fn encode_to_string(&self, data: &[u8]) -> Result<String> {
        let mut out = Vec::with_capacity(data.len() * 3 + 2);
        self.encode(data, &mut out)?;
        String::from_utf8(out)
            .map_err(|e| SilkcodeError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Decodes an in-memory string to bytes.
    pub fn decode_str(&self, text: &str) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(text.len() / 3);
        self.decode(text.as_bytes(), &mut out)?;
        Ok(out)
    }
}
