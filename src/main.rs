//! Country Information Gateway
//!
//! REST/JSON gateway over the country information SOAP service.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────────┐
//!                      │                     GATEWAY                      │
//!   GET /country/...   │  ┌──────────┐   ┌───────────────┐   ┌─────────┐  │   SOAP 1.1
//!  ────────────────────┼─▶│   http   │──▶│    service    │──▶│  soap   │──┼──────────▶ Upstream
//!                      │  │ handlers │   │ (normalise id)│   │ client  │  │
//!   JSON / null / []   │  │          │◀──│               │◀──│ parser  │◀─┼───────────
//!  ◀───────────────────┼──│          │   └───────────────┘   └─────────┘  │
//!                      │  └──────────┘                                    │
//!                      │  config · observability · lifecycle              │
//!                      └──────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

use country_info_gateway::config::{load_config, ConfigOverrides};
use country_info_gateway::lifecycle::{signals, Shutdown};
use country_info_gateway::observability::{logging, metrics};
use country_info_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "country-info-gateway")]
#[command(about = "REST gateway for the country information SOAP service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "GATEWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:8080
    #[arg(short, long, env = "GATEWAY_BIND_ADDRESS")]
    bind: Option<String>,

    /// URL of the upstream SOAP endpoint
    #[arg(short, long, env = "COUNTRY_ENDPOINT_URL")]
    endpoint_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let overrides = ConfigOverrides {
        bind_address: args.bind,
        endpoint_url: args.endpoint_url,
    };
    let config = load_config(args.config.as_deref(), &overrides)?;

    logging::init_logging(&config.observability.log_level);
    tracing::info!("country-info-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        endpoint_url = %config.upstream.endpoint_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::from_config(config)?;
    let server_shutdown = shutdown.subscribe();

    let mut server_task = tokio::spawn(server.run(listener, server_shutdown));

    tokio::select! {
        result = &mut server_task => result??,
        _ = signals::shutdown_on_signal(&shutdown) => {
            // Wait for in-flight requests to drain.
            server_task.await??;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
