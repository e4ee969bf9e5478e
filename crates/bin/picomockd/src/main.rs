//! # picomockd — mock device server
//!
//! Composition root that wires the simulator and HTTP adapter together
//! and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize `tracing` output
//! - Build the endpoint registry and the simulator
//! - Build the axum router, injecting the simulator state
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (ctrl-c)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use picomock_adapter_http_axum::state::AppState;
use picomock_app::fixtures::default_registry;
use picomock_app::noise::ThreadRngNoise;
use picomock_app::simulator::Simulator;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.logging_filter()))
        .init();

    let registry = default_registry()?;
    let simulator = Simulator::new(registry, ThreadRngNoise);
    let state = AppState::new(simulator);
    let app = picomock_adapter_http_axum::router::build(state, config.assets_dir());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "picomockd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown requested");
    }
}
