//! Worker pool subsystem.
//!
//! # Data Flow
//! ```text
//! http/total.rs (per-chunk parse, finalization)
//!     → pool.rs (permit-bounded spawn_blocking)
//!     → result handed back to the awaiting handler
//! ```
//!
//! # Design Decisions
//! - Parallelism is across requests, never within one: callers await each
//!   task before submitting the next for the same request
//! - Pool size is a deployment knob, not a correctness requirement

pub mod pool;

pub use pool::{ParsePool, PoolError};
