//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger graceful shutdown
//!
//! Shutdown (shutdown.rs):
//!     Signal received → stop accepting → drain in-flight requests → exit
//! ```
//!
//! # Design Decisions
//! - Shutdown is broadcast so every long-running task observes it
//! - In-flight streams finish before the process exits

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
