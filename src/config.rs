//! Transcoder configuration: key pair, line width, alphabet selection.

use std::num::NonZeroUsize;

use crate::alphabet::AlphabetKind;
use crate::error::{Result, SilkcodeError};

/// Largest value accepted for either key.
pub const MAX_KEY: i64 = 255;

/// Default number of symbols per encoded line.
pub const DEFAULT_LINE_WIDTH: usize = 32;

/// The two keys that drive the positional shift.
///
/// The shift applied at stream position `i` is
/// `(keybase * (i + 1) + keying) mod 256`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPair {
    keybase: u8,
    keying: u8,
}

impl KeyPair {
    /// Validates and builds a key pair.
    ///
    /// # Errors
    /// Returns [`SilkcodeError::KeyOutOfRange`] if either key is outside [0, 255].
    ///
    /// # Examples
    ///
    /// ```
    /// use silkcode::KeyPair;
    ///
    /// assert!(KeyPair::new(255, 255).is_ok());
    /// assert!(KeyPair::new(256, 0).is_err());
    /// assert!(KeyPair::new(0, -1).is_err());
    /// ```
    pub fn new(keybase: i64, keying: i64) -> Result<Self> {
        Ok(KeyPair {
            keybase: Self::check("keybase", keybase)?,
            keying: Self::check("keying", keying)?,
        })
    }

    /// Builds a key pair from values already known to be in range.
    pub const fn from_bytes(keybase: u8, keying: u8) -> Self {
        KeyPair { keybase, keying }
    }

    fn check(name: &'static str, value: i64) -> Result<u8> {
        u8::try_from(value).map_err(|_| SilkcodeError::KeyOutOfRange { name, value })
    }

    /// Multiplicative key.
    pub fn keybase(&self) -> u8 {
        self.keybase
    }

    /// Additive key.
    pub fn keying(&self) -> u8 {
        self.keying
    }

    /// Shift applied at zero-based stream `position`.
    ///
    /// All arithmetic is modulo 256, so only the low byte of `position + 1`
    /// matters.
    ///
    /// # Examples
    ///
    /// ```
    /// use silkcode::KeyPair;
    ///
    /// let keys = KeyPair::new(3, 7).unwrap();
    /// assert_eq!(keys.shift(0), 10);
    /// assert_eq!(keys.shift(1), 13);
    /// assert_eq!(keys.shift(255), 7);
    /// ```
    pub fn shift(&self, position: u64) -> u8 {
        let step = position.wrapping_add(1) as u8;
        self.keybase.wrapping_mul(step).wrapping_add(self.keying)
    }
}

/// Symbols per encoded line. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineWidth(NonZeroUsize);

impl LineWidth {
    /// Wraps a symbols-per-line count.
    ///
    /// # Errors
    /// Returns [`SilkcodeError::InvalidLineWidth`] if `width` is zero.
    pub fn new(width: usize) -> Result<Self> {
        NonZeroUsize::new(width)
            .map(LineWidth)
            .ok_or(SilkcodeError::InvalidLineWidth)
    }

    /// Symbols per line.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for LineWidth {
    fn default() -> Self {
        match NonZeroUsize::new(DEFAULT_LINE_WIDTH) {
            Some(width) => LineWidth(width),
            None => unreachable!(),
        }
    }
}

impl TryFrom<usize> for LineWidth {
    type Error = SilkcodeError;

    fn try_from(width: usize) -> Result<Self> {
        LineWidth::new(width)
    }
}

/// Everything a [`Transcoder`](crate::Transcoder) needs for one stream run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscoderConfig {
    /// Shift keys.
    pub keys: KeyPair,
    /// Symbols per line when encoding. Ignored when decoding.
    pub line_width: LineWidth,
    /// Active alphabet for both directions.
    pub alphabet: AlphabetKind,
    /// Reject symbols outside the alphabet while decoding instead of mapping
    /// them to the fallback byte.
    pub strict: bool,
}

impl TranscoderConfig {
    /// Configuration with default width (32), CJK alphabet and lenient decoding.
    pub fn new(keys: KeyPair) -> Self {
        TranscoderConfig {
            keys,
            line_width: LineWidth::default(),
            alphabet: AlphabetKind::default(),
            strict: false,
        }
    }

    /// Sets the encoded line width.
    pub fn with_line_width(mut self, line_width: LineWidth) -> Self {
        self.line_width = line_width;
        self
    }

    /// Selects the alphabet.
    pub fn with_alphabet(mut self, alphabet: AlphabetKind) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Enables or disables strict decoding.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
