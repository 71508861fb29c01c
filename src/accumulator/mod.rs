//! Incremental accumulation subsystem.
//!
//! # Data Flow
//! ```text
//! Byte chunks (arrival order)
//!     → state.rs (character state machine, running sum)
//!     → types.rs (bracket progress, error taxonomy, outcome)
//!     → finish() flushes the trailing token and classifies the request
//! ```
//!
//! # Design Decisions
//! - One accumulator per request, exclusively owned by its handler task
//! - Errors are recorded in state and surfaced only at finalization
//! - Permissive by contract: empty tokens are skipped, a trailing comma
//!   and non-standard whitespace are tolerated

pub mod state;
pub mod types;

pub use state::Accumulator;
pub use types::{BracketState, FormatError, Outcome};
