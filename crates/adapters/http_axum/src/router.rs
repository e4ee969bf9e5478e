//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use picomock_app::ports::NoiseSource;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// One route per registered path, all bound to the dispatch handler.
/// Unregistered paths fall through to `assets_dir` (the built web UI
/// bundle) when one is given, otherwise to a plain 404. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG`
/// level using the `tracing` ecosystem.
pub fn build<N>(state: AppState<N>, assets_dir: Option<&Path>) -> Router
where
    N: NoiseSource + Send + Sync + 'static,
{
    let paths: Vec<String> = state
        .simulator
        .registry()
        .paths()
        .map(str::to_owned)
        .collect();

    let mut router = Router::new().route("/health", get(health_check));
    for path in &paths {
        router = router.route(path, any(crate::api::dispatch::<N>));
    }

    let router = match assets_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router.fallback(not_simulated),
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_simulated() -> StatusCode {
    StatusCode::NOT_FOUND
}
