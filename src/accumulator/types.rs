//! Accumulation state types.

use thiserror::Error;

/// Progress through the single `[` ... `]` pair framing the list.
///
/// Transitions only run forward: `Unopened` → `Open` → `Closed`. Any other
/// attempted transition records an error without changing the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketState {
    /// No `[` seen yet.
    Unopened,
    /// `[` seen, `]` not yet.
    Open,
    /// Both brackets seen, in order.
    Closed,
}

/// Why a request body failed to parse.
///
/// Every variant renders to the client with the same fixed message; the
/// variant itself is for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A second `[` after the list was already opened.
    #[error("unexpected opening bracket")]
    UnexpectedOpeningBracket,
    /// A `]` with no open list, or after the list was already closed.
    #[error("unexpected closing bracket")]
    UnexpectedClosingBracket,
    /// A token that is not an optionally signed integer after trimming.
    #[error("token is not a valid integer")]
    InvalidToken,
    /// A body chunk that is not valid UTF-8.
    #[error("chunk is not valid utf-8")]
    InvalidUtf8,
}

/// Terminal classification of one request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The list was opened, closed, and every token parsed.
    Complete { total: i64 },
    /// Every token parsed but the closing bracket never arrived. The
    /// best-effort total is still reported, with a warning.
    Unterminated { total: i64 },
    /// A structural or numeric error was recorded. First error wins.
    Invalid { error: FormatError },
}
