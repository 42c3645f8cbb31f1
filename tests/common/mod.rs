//! Shared utilities for integration testing.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    http::{header, StatusCode},
    routing::post,
    Router,
};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

use country_info_gateway::model::{Continent, CountryByCurrency, CountryFull, Currency, Language};
use country_info_gateway::upstream::{CountryInfoUpstream, UpstreamError, UpstreamResult};
use country_info_gateway::{GatewayConfig, HttpServer, Shutdown};

/// Path the mock SOAP backend answers on.
pub const SOAP_PATH: &str = "/websamples.countryinfo/CountryInfoService.wso";

/// A running gateway bound to an ephemeral port.
pub struct TestGateway {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestGateway {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestGateway {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a gateway in front of the given upstream.
pub async fn start_gateway(upstream: Arc<dyn CountryInfoUpstream>) -> TestGateway {
    start_gateway_with_config(GatewayConfig::default(), upstream).await
}

pub async fn start_gateway_with_config(
    config: GatewayConfig,
    upstream: Arc<dyn CountryInfoUpstream>,
) -> TestGateway {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, upstream);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestGateway { addr, shutdown }
}

pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// In-memory upstream that records every identifier it is called with.
#[derive(Default)]
pub struct StubUpstream {
    pub countries: Vec<CountryFull>,
    pub continents: Vec<Continent>,
    pub currencies: Vec<Currency>,
    pub languages: Vec<Language>,
    /// When set, every call fails with a SOAP fault.
    pub fail: bool,
    calls: Mutex<Vec<(&'static str, String)>>,
}

impl StubUpstream {
    pub fn failing() -> Self {
        Self { fail: true, ..Default::default() }
    }

    /// Operations called so far with their identifiers, in call order.
    pub fn calls(&self) -> Vec<(&'static str, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn enter(&self, operation: &'static str, id: &str) -> UpstreamResult<()> {
        self.calls.lock().unwrap().push((operation, id.to_string()));
        if self.fail {
            return Err(UpstreamError::Fault {
                code: "soap:Server".into(),
                message: "stubbed failure".into(),
            });
        }
        Ok(())
    }

    fn country(&self, code: &str) -> Option<&CountryFull> {
        self.countries.iter().find(|c| c.code == code)
    }
}

#[async_trait]
impl CountryInfoUpstream for StubUpstream {
    async fn capital_city(&self, code: &str) -> UpstreamResult<Option<String>> {
        self.enter("capital_city", code)?;
        Ok(self.country(code).map(|c| c.capital.clone()))
    }

    async fn countries_by_currency(&self, currency_code: &str) -> UpstreamResult<Vec<CountryByCurrency>> {
        self.enter("countries_by_currency", currency_code)?;
        Ok(self
            .countries
            .iter()
            .filter(|c| c.currency_code == currency_code)
            .map(|c| CountryByCurrency { code: c.code.clone(), name: c.name.clone() })
            .collect())
    }

    async fn currency_of_country(&self, code: &str) -> UpstreamResult<Option<Currency>> {
        self.enter("currency_of_country", code)?;
        Ok(self.country(code).and_then(|c| {
            self.currencies
                .iter()
                .find(|cur| cur.code == c.currency_code)
                .cloned()
        }))
    }

    async fn phone_code(&self, code: &str) -> UpstreamResult<Option<String>> {
        self.enter("phone_code", code)?;
        Ok(self.country(code).map(|c| c.phone_code.clone()))
    }

    async fn country_code(&self, name: &str) -> UpstreamResult<String> {
        self.enter("country_code", name)?;
        Ok(self
            .countries
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.code.clone())
            .unwrap_or_else(|| "No country found by that name".to_string()))
    }

    async fn country_name(&self, code: &str) -> UpstreamResult<Option<String>> {
        self.enter("country_name", code)?;
        Ok(self.country(code).map(|c| c.name.clone()))
    }

    async fn currency_name(&self, currency_code: &str) -> UpstreamResult<Option<String>> {
        self.enter("currency_name", currency_code)?;
        Ok(self
            .currencies
            .iter()
            .find(|c| c.code == currency_code)
            .map(|c| c.name.clone()))
    }

    async fn full_info(&self, code: &str) -> UpstreamResult<Option<CountryFull>> {
        self.enter("full_info", code)?;
        Ok(self.country(code).cloned())
    }

    async fn all_countries(&self) -> UpstreamResult<Vec<CountryFull>> {
        self.enter("all_countries", "")?;
        Ok(self.countries.clone())
    }

    async fn language_code(&self, name: &str) -> UpstreamResult<Option<String>> {
        self.enter("language_code", name)?;
        Ok(self
            .languages
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.code.clone()))
    }

    async fn language_name(&self, code: &str) -> UpstreamResult<Option<String>> {
        self.enter("language_name", code)?;
        Ok(self
            .languages
            .iter()
            .find(|l| l.code == code)
            .map(|l| l.name.clone()))
    }

    async fn all_continents(&self) -> UpstreamResult<Vec<Continent>> {
        self.enter("all_continents", "")?;
        Ok(self.continents.clone())
    }

    async fn all_currencies(&self) -> UpstreamResult<Vec<Currency>> {
        self.enter("all_currencies", "")?;
        Ok(self.currencies.clone())
    }

    async fn all_languages(&self) -> UpstreamResult<Vec<Language>> {
        self.enter("all_languages", "")?;
        Ok(self.languages.clone())
    }
}

fn language(code: &str, name: &str) -> Language {
    Language { code: code.into(), name: name.into() }
}

/// A stub populated with a handful of countries.
pub fn sample_upstream() -> StubUpstream {
    let country = |code: &str, name: &str, capital: &str, phone: &str, currency: &str, langs| CountryFull {
        code: code.into(),
        name: name.into(),
        capital: capital.into(),
        phone_code: phone.into(),
        continent_code: if code == "US" { "AM".into() } else { "EU".into() },
        currency_code: currency.into(),
        flag_url: format!("http://www.oorsprong.org/WebSamples.CountryInfo/Flags/{}.jpg", name),
        languages: langs,
    };

    StubUpstream {
        countries: vec![
            country("US", "United States", "Washington", "1", "USD", vec![language("eng", "English")]),
            country(
                "CH",
                "Switzerland",
                "Bern",
                "41",
                "CHF",
                vec![language("de", "German"), language("fr", "French"), language("it", "Italian")],
            ),
            country("DE", "Germany", "Berlin", "49", "EUR", vec![language("de", "German")]),
            country("FR", "France", "Paris", "33", "EUR", vec![language("fr", "French")]),
        ],
        continents: vec![
            Continent { code: "AF".into(), name: "Africa".into() },
            Continent { code: "AM".into(), name: "The Americas".into() },
            Continent { code: "EU".into(), name: "Europe".into() },
        ],
        currencies: vec![
            Currency { code: "CHF".into(), name: "Swiss Francs".into() },
            Currency { code: "EUR".into(), name: "Euro".into() },
            Currency { code: "USD".into(), name: "Dollars".into() },
        ],
        languages: vec![
            language("eng", "English"),
            language("fr", "French"),
            language("de", "German"),
        ],
        ..Default::default()
    }
}

/// Wrap a SOAP body payload in a SOAP 1.1 envelope.
pub fn soap_envelope(payload: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    {}
  </soap:Body>
</soap:Envelope>"#,
        payload
    )
}

/// A SOAP 1.1 server fault envelope.
pub fn soap_fault(message: &str) -> String {
    soap_envelope(&format!(
        "<soap:Fault><faultcode>soap:Server</faultcode><faultstring>{}</faultstring></soap:Fault>",
        message
    ))
}

/// Start a mock SOAP backend; `respond` maps the request body to (status, body).
pub async fn start_soap_backend<F>(respond: F) -> SocketAddr
where
    F: Fn(String) -> (u16, String) + Send + Sync + 'static,
{
    start_slow_soap_backend(Duration::ZERO, respond).await
}

/// Like `start_soap_backend`, but every answer is delayed.
pub async fn start_slow_soap_backend<F>(delay: Duration, respond: F) -> SocketAddr
where
    F: Fn(String) -> (u16, String) + Send + Sync + 'static,
{
    let respond = Arc::new(respond);
    let app = Router::new().route(
        SOAP_PATH,
        post(move |body: String| {
            let respond = respond.clone();
            async move {
                tokio::time::sleep(delay).await;
                let (status, xml) = respond(body);
                (
                    StatusCode::from_u16(status).unwrap(),
                    [(header::CONTENT_TYPE, "text/xml; charset=utf-8")],
                    xml,
                )
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

/// Endpoint URL of a mock backend.
pub fn soap_url(addr: SocketAddr) -> String {
    format!("http://{}{}", addr, SOAP_PATH)
}
