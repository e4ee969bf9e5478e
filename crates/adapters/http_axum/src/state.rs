//! Shared application state for axum handlers.

use std::sync::Arc;

use picomock_app::ports::NoiseSource;
use picomock_app::simulator::Simulator;

/// Application state shared across all axum handlers.
///
/// Generic over the noise source to avoid dynamic dispatch. `Clone` is
/// implemented manually so the simulator itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<N> {
    /// The simulation service answering registered paths.
    pub simulator: Arc<Simulator<N>>,
}

impl<N> Clone for AppState<N> {
    fn clone(&self) -> Self {
        Self {
            simulator: Arc::clone(&self.simulator),
        }
    }
}

impl<N> AppState<N>
where
    N: NoiseSource + Send + Sync + 'static,
{
    /// Create a new application state owning the simulator.
    pub fn new(simulator: Simulator<N>) -> Self {
        Self {
            simulator: Arc::new(simulator),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` simulator.
    ///
    /// Use this when the simulator needs to be shared with other tasks
    /// before constructing the HTTP state.
    pub fn from_arc(simulator: Arc<Simulator<N>>) -> Self {
        Self { simulator }
    }
}
