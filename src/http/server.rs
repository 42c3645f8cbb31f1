//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request deadline, request ID, metrics)
//! - Bind server to listener
//! - Stop accepting on shutdown and drain in-flight requests

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::http::handlers;
use crate::http::middleware::{request_deadline, track_metrics};
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::service::CountryService;
use crate::soap::SoapClient;
use crate::upstream::{CountryInfoUpstream, UpstreamResult};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: CountryService,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server that talks to the given upstream.
    pub fn new(config: GatewayConfig, upstream: Arc<dyn CountryInfoUpstream>) -> Self {
        let state = AppState {
            service: CountryService::new(upstream),
        };

        Self {
            router: Self::build_router(&config, state),
        }
    }

    /// Create a server backed by the configured SOAP endpoint.
    pub fn from_config(config: GatewayConfig) -> UpstreamResult<Self> {
        let client = SoapClient::new(&config.upstream)?;
        Ok(Self::new(config, Arc::new(client)))
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        let country = Router::new()
            .route("/{code}/capital", get(handlers::capital_city))
            .route("/currency-code/{currency_code}", get(handlers::countries_by_currency))
            .route("/{code}/currency", get(handlers::currency_of_country))
            .route("/{code}/phone", get(handlers::phone_code))
            .route("/name/{name}", get(handlers::country_code))
            .route("/{code}/name", get(handlers::country_name))
            .route(
                "/currency/currency-code/{currency_code}",
                get(handlers::currency_name),
            )
            .route("/{code}/full/info", get(handlers::full_info))
            .route("/all", get(handlers::all_countries))
            .route("/language/lang-name/{lang_name}", get(handlers::language_code))
            .route("/language/lang-code/{lang_code}", get(handlers::language_name))
            .route("/continents", get(handlers::all_continents))
            .route("/currencies", get(handlers::all_currencies))
            .route("/languages", get(handlers::all_languages));

        Router::new()
            .nest("/country", country)
            .route("/health", get(handlers::health))
            .route_layer(middleware::from_fn(track_metrics))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                    .layer(propagate_request_id_layer())
                    .layer(middleware::from_fn_with_state(
                        Duration::from_secs(config.timeouts.request_secs),
                        request_deadline,
                    )),
            )
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
