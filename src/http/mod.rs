//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware wiring)
//!     → request.rs (request ID assignment)
//!     → total.rs (stream body chunks into the accumulator)
//!     → response.rs (render the outcome as status + JSON)
//! ```

pub mod request;
pub mod response;
pub mod server;
pub mod total;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
