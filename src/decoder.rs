//! Decoder: alphabet symbols in, original bytes out.
//!
//! CR and LF are skipped wherever they appear and do not advance the
//! position counter, so line layout never affects the decoded bytes.

use std::io::{BufWriter, Read, Write};

use tracing::warn;

use crate::alphabet::FALLBACK_BYTE;
use crate::config::TranscoderConfig;
use crate::error::{Result, SilkcodeError};
use crate::transcoder::TranscodeStats;
use crate::utils::runes::RuneReader;
use crate::utils::stream::{finish, BUFFER_SIZE};

/// Decodes all of `reader` into `writer`.
///
/// In lenient mode a symbol outside the alphabet decodes as if it were the
/// symbol for [`FALLBACK_BYTE`]. In strict mode it stops decoding with
/// [`SilkcodeError::UnknownSymbol`]; bytes decoded before it are still flushed.
pub(crate) fn decode<R: Read, W: Write>(
    config: &TranscoderConfig,
    reader: R,
    writer: W,
) -> Result<TranscodeStats> {
    let mut out = BufWriter::with_capacity(BUFFER_SIZE, writer);
    let result = decode_into(config, RuneReader::new(reader), &mut out);
    finish(out, result)
}

fn decode_into<R: Read, W: Write>(
    config: &TranscoderConfig,
    runes: RuneReader<R>,
    out: &mut W,
) -> Result<TranscodeStats> {
    let alphabet = config.alphabet.alphabet();
    let keys = config.keys;

    let mut stats = TranscodeStats::default();
    let mut position: u64 = 0;

    for symbol in runes {
        let symbol = symbol?;
        if symbol == '\r' || symbol == '\n' {
            stats.line_breaks += 1;
            continue;
        }

        let value = match alphabet.try_byte_for(symbol) {
            Some(value) => value,
            None if config.strict => {
                return Err(SilkcodeError::UnknownSymbol {
                    symbol,
                    position,
                    alphabet: alphabet.kind(),
                });
            }
            None => {
                if stats.unknown_symbols == 0 {
                    warn!(
                        ?symbol,
                        position,
                        alphabet = %alphabet.kind(),
                        "symbol not in alphabet, decoding as fallback byte"
                    );
                }
                stats.unknown_symbols += 1;
                FALLBACK_BYTE
            }
        };

        let decoded = value.wrapping_sub(keys.shift(position));
        out.write_all(&[decoded])?;
        stats.symbols += 1;
        stats.bytes += 1;
        position += 1;
    }
    Ok(stats)
}
