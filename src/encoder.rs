//! Encoder: bytes in, wrapped alphabet symbols out.
//!
//! Each byte at stream position `i` is shifted by the key pair's shift for
//! `i` and replaced by the alphabet symbol for the result. A CRLF follows
//! every `line_width` symbols, and the output always ends with a CRLF.

use std::io::{BufWriter, Read, Write};

use tracing::trace;

use crate::config::TranscoderConfig;
use crate::error::Result;
use crate::transcoder::TranscodeStats;
use crate::utils::stream::{finish, read_chunk, BUFFER_SIZE};

/// Line terminator emitted between encoded lines.
pub(crate) const LINE_BREAK: &[u8] = b"\r\n";

/// Encodes all of `reader` into `writer`.
///
/// Output is buffered and flushed before returning, including when the
/// input read fails.
pub(crate) fn encode<R: Read, W: Write>(
    config: &TranscoderConfig,
    mut reader: R,
    writer: W,
) -> Result<TranscodeStats> {
    let mut out = BufWriter::with_capacity(BUFFER_SIZE, writer);
    let result = encode_into(config, &mut reader, &mut out);
    finish(out, result)
}

fn encode_into<R: Read, W: Write>(
    config: &TranscoderConfig,
    reader: &mut R,
    out: &mut W,
) -> Result<TranscodeStats> {
    let alphabet = config.alphabet.alphabet();
    let keys = config.keys;
    let line_width = config.line_width.get();

    let mut buf = vec![0u8; BUFFER_SIZE];
    let mut utf8 = [0u8; 4];
    let mut stats = TranscodeStats::default();
    let mut position: u64 = 0;
    let mut line_len: usize = 0;
    // No break has been written yet, so empty input still gets one.
    let mut ends_with_break = false;

    loop {
        let n = read_chunk(reader, &mut buf)?;
        if n == 0 {
            break;
        }
        trace!(bytes = n, "encoding chunk");

        for &byte in &buf[..n] {
            let encoded = byte.wrapping_add(keys.shift(position));
            let symbol = alphabet.symbol_for(encoded);
            out.write_all(symbol.encode_utf8(&mut utf8).as_bytes())?;
            stats.symbols += 1;

            line_len += 1;
            if line_len >= line_width {
                out.write_all(LINE_BREAK)?;
                stats.line_breaks += 1;
                line_len = 0;
                ends_with_break = true;
            } else {
                ends_with_break = false;
            }
            position += 1;
        }
        stats.bytes += n as u64;
    }

    if !ends_with_break {
        out.write_all(LINE_BREAK)?;
        stats.line_breaks += 1;
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::AlphabetKind;
    use crate::config::{KeyPair, LineWidth};
    use crate::error::SilkcodeError;
    use std::io;

    fn config(keybase: u8, keying: u8, width: usize) -> TranscoderConfig {
        TranscoderConfig::new(KeyPair::from_bytes(keybase, keying))
            .with_line_width(LineWidth::new(width).unwrap())
    }

    fn encode_str(config: &TranscoderConfig, input: &[u8]) -> String {
        let mut out = Vec::new();
        encode(config, input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_input_single_break() {
        let mut out = Vec::new();
        let stats = encode(&config(9, 9, 32), &b""[..], &mut out).unwrap();
        assert_eq!(out, b"\r\n");
        assert_eq!(stats.bytes, 0);
        assert_eq!(stats.symbols, 0);
        assert_eq!(stats.line_breaks, 1);
    }

    #[test]
    fn test_identity_keys_use_table_order() {
        let encoded = encode_str(&config(0, 0, 32), &[0, 1, 2, 255]);
        assert_eq!(encoded, "丢虎丐功\r\n");
    }

    #[test]
    fn test_known_vector() {
        // keys (1, 0): shifts 1, 2, 3
        let encoded = encode_str(&config(1, 0, 32), &[0, 0, 0]);
        assert_eq!(encoded, "虎丐丕\r\n");
    }

    #[test]
    fn test_shift_wraps_modulo_256() {
        // keys (0, 1): 255 + 1 wraps to 0
        let encoded = encode_str(&config(0, 1, 32), &[255]);
        assert_eq!(encoded, "丢\r\n");
    }

    #[test]
    fn test_same_byte_differs_by_position() {
        let encoded = encode_str(&config(7, 3, 32), &[b'A', b'A']);
        let symbols: Vec<char> = encoded.chars().take(2).collect();
        assert_ne!(symbols[0], symbols[1]);
    }

    #[test]
    fn test_wrap_partial_last_line() {
        let encoded = encode_str(&config(0, 0, 2), &[0, 1, 2]);
        assert_eq!(encoded, "丢虎\r\n丐\r\n");
    }

    #[test]
    fn test_wrap_exact_multiple_no_extra_break() {
        let encoded = encode_str(&config(0, 0, 2), &[0, 1, 2, 3]);
        assert_eq!(encoded, "丢虎\r\n丐丕\r\n");
    }

    #[test]
    fn test_width_one() {
        let encoded = encode_str(&config(0, 0, 1), &[0, 1]);
        assert_eq!(encoded, "丢\r\n虎\r\n");
    }

    #[test]
    fn test_position_not_reset_per_line() {
        let wide = encode_str(&config(5, 11, 64), &[42; 10]);
        let narrow = encode_str(&config(5, 11, 3), &[42; 10]);
        let strip = |s: &str| s.chars().filter(|c| *c != '\r' && *c != '\n').collect::<String>();
        assert_eq!(strip(&wide), strip(&narrow));
    }

    #[test]
    fn test_hangul_alphabet() {
        let config = config(0, 0, 32).with_alphabet(AlphabetKind::Hangul);
        assert_eq!(encode_str(&config, &[0, 255]), "가\u{ACFF}\r\n");
    }

    #[test]
    fn test_stats_counts() {
        let mut out = Vec::new();
        let stats = encode(&config(1, 1, 4), &[0u8; 10][..], &mut out).unwrap();
        assert_eq!(stats.bytes, 10);
        assert_eq!(stats.symbols, 10);
        assert_eq!(stats.line_breaks, 3);
    }

    /// Returns some data, then fails.
    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "gone"));
            }
            self.served = true;
            buf[..2].copy_from_slice(&[0, 1]);
            Ok(2)
        }
    }

    #[test]
    fn test_read_error_flushes_partial_output() {
        let mut out = Vec::new();
        let err = encode(&config(0, 0, 32), FailingReader { served: false }, &mut out)
            .unwrap_err();
        match err {
            SilkcodeError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::ConnectionReset),
            other => panic!("expected Io, got {:?}", other),
        }
        assert_eq!(String::from_utf8(out).unwrap(), "丢虎");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_surfaces() {
        let err = encode(&config(0, 0, 32), &[1u8; 8][..], ClosedPipe).unwrap_err();
        match err {
            SilkcodeError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected Io, got {:?}", other),
        }
    }
}
