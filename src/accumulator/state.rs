//! Incremental parse state for one streamed request body.
//!
//! # Responsibilities
//! - Consume raw byte chunks in arrival order
//! - Track the running sum, the pending token, and bracket progress
//! - Record the first error without ever aborting the stream
//!
//! # Design Decisions
//! - Chunk boundaries carry no meaning: a token may span chunks, and any
//!   chunking of the same bytes produces the same outcome
//! - Validation is deferred to delimiters; characters are buffered verbatim
//! - No I/O and no shared state; the caller owns the instance exclusively

use std::str;

use crate::accumulator::types::{BracketState, FormatError, Outcome};

/// Character-by-character accumulator for a streamed integer list.
///
/// One instance lives per request. Chunks are fed with [`process_chunk`]
/// strictly in arrival order; [`finish`] consumes the accumulator and
/// classifies the request.
///
/// [`process_chunk`]: Accumulator::process_chunk
/// [`finish`]: Accumulator::finish
#[derive(Debug)]
pub struct Accumulator {
    /// Running total of all completed tokens.
    sum: i64,
    /// The not-yet-terminated token currently being collected.
    buffer: String,
    /// Progress through the `[` ... `]` pair.
    bracket: BracketState,
    /// First recorded error, never overwritten once set.
    error: Option<FormatError>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            sum: 0,
            buffer: String::new(),
            bracket: BracketState::Unopened,
            error: None,
        }
    }

    /// Feed one chunk of the request body.
    ///
    /// A chunk that is not valid UTF-8 records an error and is skipped;
    /// later chunks are still processed, so a malformed stream never
    /// aborts mid-request.
    pub fn process_chunk(&mut self, bytes: &[u8]) {
        let text = match str::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) => {
                self.record(FormatError::InvalidUtf8);
                return;
            }
        };

        for c in text.chars() {
            self.step(c);
        }
    }

    fn step(&mut self, c: char) {
        match c {
            '[' => {
                if self.bracket == BracketState::Unopened {
                    self.bracket = BracketState::Open;
                } else {
                    self.record(FormatError::UnexpectedOpeningBracket);
                }
            }
            ']' => {
                if self.bracket == BracketState::Open {
                    self.bracket = BracketState::Closed;
                } else {
                    self.record(FormatError::UnexpectedClosingBracket);
                }
            }
            ',' => self.flush_token(),
            _ => self.buffer.push(c),
        }
    }

    /// Parse and clear the pending token, as at a `,` delimiter.
    ///
    /// Whitespace-only tokens are discarded without error, which tolerates
    /// trailing commas and hand-written spacing. Whitespace embedded inside
    /// a token's digits fails the parse.
    fn flush_token(&mut self) {
        let token = self.buffer.trim();
        if !token.is_empty() {
            match token.parse::<i64>() {
                Ok(n) => self.sum = self.sum.saturating_add(n),
                Err(_) => self.record(FormatError::InvalidToken),
            }
        }
        self.buffer.clear();
    }

    /// First error wins.
    fn record(&mut self, error: FormatError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Flush the trailing token and classify the request.
    pub fn finish(mut self) -> Outcome {
        self.flush_token();

        if let Some(error) = self.error {
            return Outcome::Invalid { error };
        }
        if self.bracket == BracketState::Closed {
            Outcome::Complete { total: self.sum }
        } else {
            Outcome::Unterminated { total: self.sum }
        }
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}
