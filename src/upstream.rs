//! Contract of the upstream country information service.
//!
//! # Responsibilities
//! - One async method per upstream operation
//! - A single error taxonomy for every way an upstream call can fail
//!
//! # Design Decisions
//! - Object safe so the HTTP layer holds an `Arc<dyn CountryInfoUpstream>`
//! - "No result" is `Ok(None)` or an empty list, never an error
//! - Identifiers arrive already normalised; implementations send them verbatim

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Continent, CountryByCurrency, CountryFull, Currency, Language};

/// Errors that can occur while talking to the upstream service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection could not be established or the transport broke.
    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    /// The upstream did not answer within the configured timeout.
    #[error("upstream timed out")]
    Timeout,

    /// The upstream answered with a SOAP fault.
    #[error("upstream fault {code}: {message}")]
    Fault { code: String, message: String },

    /// Non-success HTTP status without a fault body.
    #[error("upstream returned HTTP {0}")]
    Status(u16),

    /// The response could not be understood.
    #[error("malformed upstream response: {0}")]
    Malformed(String),

    /// The client could not be built from its configuration.
    #[error("invalid upstream configuration: {0}")]
    Config(String),
}

pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// The remote country information service, one method per operation.
#[async_trait]
pub trait CountryInfoUpstream: Send + Sync {
    async fn capital_city(&self, country_code: &str) -> UpstreamResult<Option<String>>;

    async fn countries_by_currency(&self, currency_code: &str) -> UpstreamResult<Vec<CountryByCurrency>>;

    async fn currency_of_country(&self, country_code: &str) -> UpstreamResult<Option<Currency>>;

    async fn phone_code(&self, country_code: &str) -> UpstreamResult<Option<String>>;

    /// Never absent: an unmatched name yields whatever text the upstream sends, or "".
    async fn country_code(&self, country_name: &str) -> UpstreamResult<String>;

    async fn country_name(&self, country_code: &str) -> UpstreamResult<Option<String>>;

    async fn currency_name(&self, currency_code: &str) -> UpstreamResult<Option<String>>;

    async fn full_info(&self, country_code: &str) -> UpstreamResult<Option<CountryFull>>;

    async fn all_countries(&self) -> UpstreamResult<Vec<CountryFull>>;

    async fn language_code(&self, language_name: &str) -> UpstreamResult<Option<String>>;

    async fn language_name(&self, language_code: &str) -> UpstreamResult<Option<String>>;

    async fn all_continents(&self) -> UpstreamResult<Vec<Continent>>;

    async fn all_currencies(&self) -> UpstreamResult<Vec<Currency>>;

    async fn all_languages(&self) -> UpstreamResult<Vec<Language>>;
}
