//! Character-at-a-time UTF-8 reader.
//!
//! Decodes one `char` per call from an arbitrary byte source. Malformed or
//! truncated sequences yield U+FFFD and consume exactly one byte, so the
//! bytes that follow are examined again on the next call.

use std::io::{self, Read};

use super::stream::{read_chunk, BUFFER_SIZE};

/// Longest UTF-8 encoding of a single scalar value.
const MAX_UTF8_LEN: usize = 4;

/// Reads `char`s from a byte stream with an internal buffer.
pub(crate) struct RuneReader<R> {
    inner: R,
    buf: Box<[u8]>,
    pos: usize,
    len: usize,
    eof: bool,
}

impl<R: Read> RuneReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        RuneReader {
            inner,
            buf: vec![0u8; BUFFER_SIZE].into_boxed_slice(),
            pos: 0,
            len: 0,
            eof: false,
        }
    }

    /// Returns the next character, or `None` at end of stream.
    fn next_rune(&mut self) -> io::Result<Option<char>> {
        self.fill(MAX_UTF8_LEN)?;
        if self.pos == self.len {
            return Ok(None);
        }

        let first = self.buf[self.pos];
        if first.is_ascii() {
            self.pos += 1;
            return Ok(Some(first as char));
        }

        let end = self.len.min(self.pos + MAX_UTF8_LEN);
        let window = &self.buf[self.pos..end];
        let valid = match std::str::from_utf8(window) {
            Ok(s) => s,
            Err(e) => {
                // valid_up_to() is on a char boundary, so the slice is valid UTF-8
                std::str::from_utf8(&window[..e.valid_up_to()]).unwrap_or_default()
            }
        };
        match valid.chars().next() {
            Some(c) => {
                self.pos += c.len_utf8();
                Ok(Some(c))
            }
            None => {
                self.pos += 1;
                Ok(Some(char::REPLACEMENT_CHARACTER))
            }
        }
    }

    /// Ensures at least `want` unread bytes are buffered unless the stream ends first.
    fn fill(&mut self, want: usize) -> io::Result<()> {
        if self.len - self.pos >= want || self.eof {
            return Ok(());
        }
        self.buf.copy_within(self.pos..self.len, 0);
        self.len -= self.pos;
        self.pos = 0;
        while self.len < want && !self.eof {
            let n = read_chunk(&mut self.inner, &mut self.buf[self.len..])?;
            if n == 0 {
                self.eof = true;
            }
            self.len += n;
        }
        Ok(())
    }
}

impl<R: Read> Iterator for RuneReader<R> {
    type Item = io::Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_rune().transpose()
    }
}
