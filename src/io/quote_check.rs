//! Strict quote checking for delimited input
//!
//! csv-async recovers from stray quotes instead of rejecting them: an
//! unclosed quote swallows the rest of the file, `"Rent"x` reads as `Rentx`
//! and `Re"nt` keeps the quote as data. [`QuoteCheckedReader`] sits between
//! the byte source and the CSV reader and fails the stream on the first
//! quoting violation instead.
//!
//! A quoted field must start right after a delimiter or line break, may
//! contain doubled quotes as escapes, and must be followed by a delimiter, a
//! line break or the end of input.

use crate::types::MalformedQuote;
use futures::io::AsyncRead;
use futures::ready;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

const QUOTE: u8 = b'"';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing of the current field seen yet
    FieldStart,
    Unquoted,
    Quoted,
    /// Quote seen inside a quoted field: closes it unless another follows
    QuoteInQuoted,
}

/// Byte stream adapter that rejects malformed quoting
///
/// Bytes pass through unchanged. A violation surfaces as an `InvalidData`
/// I/O error wrapping a [`MalformedQuote`].
#[derive(Debug)]
pub struct QuoteCheckedReader<R> {
    inner: R,
    delimiter: u8,
    state: State,

    /// Current 1-based line
    line: u64,

    /// Line of the last opening quote
    quote_line: u64,
}

impl<R> QuoteCheckedReader<R> {
    pub fn new(inner: R, delimiter: u8) -> Self {
        Self {
            inner,
            delimiter,
            state: State::FieldStart,
            line: 1,
            quote_line: 1,
        }
    }

    fn scan(&mut self, bytes: &[u8]) -> Result<(), MalformedQuote> {
        for &byte in bytes {
            let ends_field = byte == self.delimiter || byte == b'\n' || byte == b'\r';

            self.state = match (self.state, byte) {
                (State::FieldStart, QUOTE) => {
                    self.quote_line = self.line;
                    State::Quoted
                }
                (State::FieldStart | State::Unquoted, _) if ends_field => State::FieldStart,
                (State::FieldStart, _) => State::Unquoted,
                (State::Unquoted, QUOTE) => {
                    return Err(self.violation(self.line, "unexpected quote in unquoted field"))
                }
                (State::Unquoted, _) => State::Unquoted,
                (State::Quoted, QUOTE) => State::QuoteInQuoted,
                (State::Quoted, _) => State::Quoted,
                (State::QuoteInQuoted, QUOTE) => State::Quoted,
                (State::QuoteInQuoted, _) if ends_field => State::FieldStart,
                (State::QuoteInQuoted, _) => {
                    return Err(self.violation(self.line, "unexpected character after closing quote"))
                }
            };

            if byte == b'\n' {
                self.line += 1;
            }
        }

        Ok(())
    }

    fn finish(&self) -> Result<(), MalformedQuote> {
        match self.state {
            State::Quoted => Err(self.violation(self.quote_line, "unterminated quoted field")),
            _ => Ok(()),
        }
    }

    fn violation(&self, line: u64, message: &'static str) -> MalformedQuote {
        MalformedQuote { line, message }
    }
}

impl<R: AsyncRead + Unpin> AsyncRead for QuoteCheckedReader<R> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        let this = self.get_mut();
        let read = ready!(Pin::new(&mut this.inner).poll_read(cx, buf))?;

        let checked = if read == 0 {
            this.finish()
        } else {
            this.scan(&buf[..read])
        };

        Poll::Ready(
            checked
                .map(|()| read)
                .map_err(|quote| io::Error::new(io::ErrorKind::InvalidData, quote)),
        )
    }
}
