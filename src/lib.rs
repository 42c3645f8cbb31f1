//! Country Information Gateway Library
//!
//! REST/JSON front for the country information SOAP service. Each route
//! normalises its identifier, performs exactly one upstream call and returns
//! the unwrapped result as JSON.

// Core subsystems
pub mod config;
pub mod http;
pub mod model;
pub mod service;
pub mod soap;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use service::CountryService;
pub use soap::SoapClient;
pub use upstream::{CountryInfoUpstream, UpstreamError};
