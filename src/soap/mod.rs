//! Upstream SOAP subsystem.
//!
//! # Data Flow
//! ```text
//! CountryInfoUpstream call (normalised identifier)
//!     → operation.rs (element names for the call)
//!     → envelope.rs (SOAP 1.1 request body)
//!     → client.rs (POST to endpoint, classify failures)
//!     → parser.rs (Envelope/Body/Fault/Result)
//!     → mapping.rs (result element → output record)
//! ```

pub mod client;
pub mod envelope;
pub mod mapping;
pub mod operation;
pub mod parser;

pub use client::SoapClient;
pub use operation::Operation;
