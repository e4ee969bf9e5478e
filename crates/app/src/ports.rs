//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They live here so the use-case layer and the adapter layer can
//! both depend on them without creating circular dependencies.

use std::sync::Arc;

/// Source of bounded pseudo-random samples for simulated sensor jitter.
///
/// The telemetry tick re-samples designated ADC channels through this port
/// so that tests can substitute a deterministic implementation.
pub trait NoiseSource {
    /// Sample a value uniformly from the half-open range `[min, max)`.
    fn sample(&self, min: f64, max: f64) -> f64;
}

impl<T: NoiseSource + Send + Sync> NoiseSource for Arc<T> {
    fn sample(&self, min: f64, max: f64) -> f64 {
        (**self).sample(min, max)
    }
}
