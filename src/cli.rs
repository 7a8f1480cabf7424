//! Command-line surface of the `silkcode` binary.

use std::str::FromStr;

use clap::{ArgAction, Parser};

use silkcode::config::{DEFAULT_LINE_WIDTH, MAX_KEY};
use silkcode::{AlphabetKind, KeyPair, LineWidth, Mode, SilkcodeError, TranscoderConfig};

/// Disguise a byte stream as wide-character text, and turn it back.
///
/// Reads standard input and writes standard output.
#[derive(Parser, Debug)]
#[command(name = "silkcode", version, allow_negative_numbers = true)]
pub(crate) struct Cli {
    /// Multiplicative key (0-255)
    #[arg(value_parser = clap::value_parser!(i64).range(0..=MAX_KEY))]
    pub keybase: i64,

    /// Additive key (0-255)
    #[arg(value_parser = clap::value_parser!(i64).range(0..=MAX_KEY))]
    pub keying: i64,

    /// Decode mode
    #[arg(short, long)]
    pub decode: bool,

    /// Symbols per output line when encoding
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_LINE_WIDTH as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub width: u64,

    /// Symbol alphabet; encoder and decoder must agree
    #[arg(
        short,
        long,
        default_value_t = AlphabetKind::Cjk,
        value_parser = AlphabetKind::from_str
    )]
    pub alphabet: AlphabetKind,

    /// Fail on symbols outside the alphabet instead of decoding them as zero
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub(crate) fn mode(&self) -> Mode {
        Mode::from_decode_flag(self.decode)
    }

    /// Builds the transcoder configuration from parsed arguments.
    pub(crate) fn config(&self) -> silkcode::Result<TranscoderConfig> {
        let keys = KeyPair::new(self.keybase, self.keying)?;
        let width =
            usize::try_from(self.width).map_err(|_| SilkcodeError::InvalidLineWidth)?;
        Ok(TranscoderConfig::new(keys)
            .with_line_width(LineWidth::new(width)?)
            .with_alphabet(self.alphabet)
            .with_strict(self.strict))
    }

    /// Default `tracing` filter directive for the requested verbosity.
    pub(crate) fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
