//! Streaming list-sum HTTP service.
//!
//! Accepts a streamed request body resembling a JSON array of integers on
//! `POST /total/` and returns the sum, computed incrementally as bytes
//! arrive. The full payload is never held in memory.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request                ┌──────────────────────────────────────┐
//!     ── POST /total/ ─────────────▶│  http/server  (Axum, middleware)     │
//!     (streamed body)               │      │                               │
//!                                   │      ▼ chunk by chunk                │
//!                                   │  http/total ──▶ workers (bounded     │
//!                                   │      │          blocking pool)       │
//!                                   │      ▼                               │
//!                                   │  accumulator  (state machine,        │
//!                                   │      │         running sum)          │
//!                                   │      ▼ finish()                      │
//!     Client Response ◀─────────────│  http/response (201 / 400 + JSON)    │
//!                                   └──────────────────────────────────────┘
//!
//!     Cross-cutting: config, observability (logging + metrics), lifecycle
//! ```

// Core subsystems
pub mod accumulator;
pub mod config;
pub mod http;
pub mod workers;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use accumulator::{Accumulator, Outcome};
pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
