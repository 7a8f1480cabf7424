//! Alphabet lookup: byte value to symbol and back.
//!
//! An [`Alphabet`] wraps one of the fixed tables in [`tables`] together with
//! a reverse index built once on first use. Both alphabets live for the whole
//! process and are never mutated.

pub(crate) mod tables;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

pub use tables::ALPHABET_SIZE;

/// Byte value returned by [`Alphabet::byte_for`] for symbols outside the alphabet.
pub const FALLBACK_BYTE: u8 = 0;

/// Selects one of the built-in alphabets.
///
/// Encoding and decoding must use the same kind; a stream encoded with one
/// alphabet does not decode with the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlphabetKind {
    /// Full-width CJK ideographs.
    #[default]
    Cjk,
    /// Hangul syllables U+AC00..=U+ACFF.
    Hangul,
}

impl AlphabetKind {
    /// All built-in alphabets.
    pub const ALL: [AlphabetKind; 2] = [AlphabetKind::Cjk, AlphabetKind::Hangul];

    /// Short lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            AlphabetKind::Cjk => "cjk",
            AlphabetKind::Hangul => "hangul",
        }
    }

    /// Returns the shared alphabet for this kind, building its reverse index
    /// on first call.
    pub fn alphabet(self) -> &'static Alphabet {
        static CJK: OnceLock<Alphabet> = OnceLock::new();
        static HANGUL: OnceLock<Alphabet> = OnceLock::new();
        match self {
            AlphabetKind::Cjk => CJK.get_or_init(|| Alphabet::build(self, &tables::CJK)),
            AlphabetKind::Hangul => HANGUL.get_or_init(|| Alphabet::build(self, &tables::HANGUL)),
        }
    }
}

impl fmt::Display for AlphabetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlphabetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlphabetKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown alphabet '{}', expected cjk or hangul", s))
    }
}

/// An ordered set of exactly 256 distinct symbols with a reverse index.
#[derive(Debug)]
pub struct Alphabet {
    kind: AlphabetKind,
    symbols: &'static [char; ALPHABET_SIZE],
    index: HashMap<char, u8>,
}

impl Alphabet {
    fn build(kind: AlphabetKind, symbols: &'static [char; ALPHABET_SIZE]) -> Self {
        let index = symbols
            .iter()
            .enumerate()
            .map(|(value, &symbol)| (symbol, value as u8))
            .collect();
        Alphabet {
            kind,
            symbols,
            index,
        }
    }

    /// Which built-in alphabet this is.
    pub fn kind(&self) -> AlphabetKind {
        self.kind
    }

    /// The symbol table, indexed by byte value.
    pub fn symbols(&self) -> &'static [char; ALPHABET_SIZE] {
        self.symbols
    }

    /// Returns the symbol for `value`. Total over all bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use silkcode::alphabet::AlphabetKind;
    ///
    /// let cjk = AlphabetKind::Cjk.alphabet();
    /// assert_eq!(cjk.symbol_for(0), '丢');
    /// ```
    pub fn symbol_for(&self, value: u8) -> char {
        self.symbols[value as usize]
    }

    /// Returns the byte value of `symbol`, or [`FALLBACK_BYTE`] when the
    /// symbol is not in the alphabet.
    ///
    /// The silent fallback keeps lenient decoding from failing on foreign
    /// input. Use [`try_byte_for`](Self::try_byte_for) to detect misses.
    ///
    /// # Examples
    ///
    /// ```
    /// use silkcode::alphabet::AlphabetKind;
    ///
    /// let cjk = AlphabetKind::Cjk.alphabet();
    /// assert_eq!(cjk.byte_for('虎'), 1);
    /// assert_eq!(cjk.byte_for('x'), 0);
    /// ```
    pub fn byte_for(&self, symbol: char) -> u8 {
        self.try_byte_for(symbol).unwrap_or(FALLBACK_BYTE)
    }

    /// Returns the byte value of `symbol`, or `None` if it is not in the alphabet.
    pub fn try_byte_for(&self, symbol: char) -> Option<u8> {
        self.index.get(&symbol).copied()
    }
}
