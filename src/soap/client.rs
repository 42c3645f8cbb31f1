//! SOAP client for the upstream country information service.
//!
//! # Responsibilities
//! - Build one request envelope per call and POST it to the configured endpoint
//! - Classify transport failures, faults and unparseable answers
//! - Unwrap typed results into output records
//!
//! # Design Decisions
//! - One `reqwest::Client` built at startup and shared across requests
//! - No retries, no caching: exactly one round trip per call
//! - No timeout unless one is configured

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use std::time::{Duration, Instant};
use url::Url;

use crate::config::UpstreamConfig;
use crate::model::{Continent, CountryByCurrency, CountryFull, Currency, Language};
use crate::observability::metrics;
use crate::soap::envelope;
use crate::soap::mapping::{list_of, record_of};
use crate::soap::operation::Operation;
use crate::soap::parser::{self, XmlElement};
use crate::upstream::{CountryInfoUpstream, UpstreamError, UpstreamResult};

/// Client for the upstream SOAP endpoint.
#[derive(Clone)]
pub struct SoapClient {
    http: reqwest::Client,
    endpoint: Url,
    request_timeout: Option<Duration>,
}

impl SoapClient {
    /// Create a client for the configured endpoint.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let endpoint: Url = config.endpoint_url.parse().map_err(|e| {
            UpstreamError::Config(format!("invalid endpoint URL '{}': {}", config.endpoint_url, e))
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| UpstreamError::Config(format!("HTTP client: {}", e)))?;

        tracing::info!(
            endpoint = %endpoint,
            request_timeout_secs = ?config.request_timeout_secs,
            "SOAP client initialized"
        );

        Ok(Self {
            http,
            endpoint,
            request_timeout: config.request_timeout_secs.map(Duration::from_secs),
        })
    }

    /// Perform one upstream call and return its result element, if any.
    pub async fn invoke(
        &self,
        operation: Operation,
        argument: Option<&str>,
    ) -> UpstreamResult<Option<XmlElement>> {
        let start_time = Instant::now();
        let outcome = self.round_trip(operation, argument).await;

        metrics::record_upstream_call(operation.element_name(), outcome_label(&outcome), start_time);
        match &outcome {
            Ok(result) => tracing::debug!(
                operation = %operation,
                found = result.is_some(),
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "Upstream call completed"
            ),
            Err(e) => tracing::warn!(
                operation = %operation,
                error = %e,
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "Upstream call failed"
            ),
        }

        outcome
    }

    async fn round_trip(
        &self,
        operation: Operation,
        argument: Option<&str>,
    ) -> UpstreamResult<Option<XmlElement>> {
        let body = envelope::build_request(operation, argument);

        let mut request = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static(envelope::CONTENT_TYPE))
            .header("SOAPAction", HeaderValue::from_static("\"\""))
            .body(body);
        if let Some(timeout) = self.request_timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        match parser::parse_response(&text, operation) {
            // A fault explains itself better than its status code.
            Err(fault @ UpstreamError::Fault { .. }) => Err(fault),
            _ if !status.is_success() => Err(UpstreamError::Status(status.as_u16())),
            parsed => parsed,
        }
    }

    async fn scalar(&self, operation: Operation, argument: &str) -> UpstreamResult<Option<String>> {
        let result = self.invoke(operation, Some(argument)).await?;
        Ok(result.as_ref().and_then(XmlElement::value).map(str::to_string))
    }

    async fn list<T>(&self, operation: Operation, argument: Option<&str>, item: &str) -> UpstreamResult<Vec<T>>
    where
        T: for<'a> From<&'a XmlElement>,
    {
        let result = self.invoke(operation, argument).await?;
        Ok(result.map(|r| list_of(&r, item)).unwrap_or_default())
    }
}

impl std::fmt::Debug for SoapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoapClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn transport_error(e: reqwest::Error) -> UpstreamError {
    if e.is_timeout() {
        UpstreamError::Timeout
    } else {
        UpstreamError::Unreachable(e.to_string())
    }
}

fn outcome_label<T>(outcome: &UpstreamResult<T>) -> &'static str {
    match outcome {
        Ok(_) => "ok",
        Err(UpstreamError::Unreachable(_)) => "unreachable",
        Err(UpstreamError::Timeout) => "timeout",
        Err(UpstreamError::Fault { .. }) => "fault",
        Err(UpstreamError::Status(_)) => "status",
        Err(UpstreamError::Malformed(_)) => "malformed",
        Err(UpstreamError::Config(_)) => "config",
    }
}

#[async_trait]
impl CountryInfoUpstream for SoapClient {
    async fn capital_city(&self, country_code: &str) -> UpstreamResult<Option<String>> {
        self.scalar(Operation::CapitalCity, country_code).await
    }

    async fn countries_by_currency(&self, currency_code: &str) -> UpstreamResult<Vec<CountryByCurrency>> {
        self.list(Operation::CountriesUsingCurrency, Some(currency_code), "tCountryCodeAndName")
            .await
    }

    async fn currency_of_country(&self, country_code: &str) -> UpstreamResult<Option<Currency>> {
        let result = self.invoke(Operation::CountryCurrency, Some(country_code)).await?;
        Ok(record_of(result.as_ref()))
    }

    async fn phone_code(&self, country_code: &str) -> UpstreamResult<Option<String>> {
        self.scalar(Operation::CountryIntPhoneCode, country_code).await
    }

    async fn country_code(&self, country_name: &str) -> UpstreamResult<String> {
        Ok(self
            .scalar(Operation::CountryIsoCode, country_name)
            .await?
            .unwrap_or_default())
    }

    async fn country_name(&self, country_code: &str) -> UpstreamResult<Option<String>> {
        self.scalar(Operation::CountryName, country_code).await
    }

    async fn currency_name(&self, currency_code: &str) -> UpstreamResult<Option<String>> {
        self.scalar(Operation::CurrencyName, currency_code).await
    }

    async fn full_info(&self, country_code: &str) -> UpstreamResult<Option<CountryFull>> {
        let result = self.invoke(Operation::FullCountryInfo, Some(country_code)).await?;
        Ok(record_of(result.as_ref()))
    }

    async fn all_countries(&self) -> UpstreamResult<Vec<CountryFull>> {
        self.list(Operation::FullCountryInfoAllCountries, None, "tCountryInfo").await
    }

    async fn language_code(&self, language_name: &str) -> UpstreamResult<Option<String>> {
        self.scalar(Operation::LanguageIsoCode, language_name).await
    }

    async fn language_name(&self, language_code: &str) -> UpstreamResult<Option<String>> {
        self.scalar(Operation::LanguageName, language_code).await
    }

    async fn all_continents(&self) -> UpstreamResult<Vec<Continent>> {
        self.list(Operation::ListOfContinentsByName, None, "tContinent").await
    }

    async fn all_currencies(&self) -> UpstreamResult<Vec<Currency>> {
        self.list(Operation::ListOfCurrenciesByName, None, "tCurrency").await
    }

    async fn all_languages(&self) -> UpstreamResult<Vec<Language>> {
        self.list(Operation::ListOfLanguagesByName, None, "tLanguage").await
    }
}
