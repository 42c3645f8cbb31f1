//! HTTP transport subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, request span)
//!     → handlers.rs (extract identifier, call service)
//!     → error.rs (upstream failure → 5xx JSON)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod request;
pub mod server;

pub use error::{ApiError, ErrorBody};
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
