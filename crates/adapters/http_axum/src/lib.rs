//! # picomock-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the simulated device API from the endpoint registry
//!   (`/api/settings`, `/api/stats`, `/api/about`)
//! - Map requests into dispatcher calls and outcomes back into HTTP
//!   responses (JSON fixtures, plain-text 405, pass-through)
//! - Pass unsimulated paths through to a static asset directory (the
//!   built web UI bundle) when one is configured
//!
//! ## Dependency rule
//! Depends on `picomock-app` (dispatcher, ports) and `picomock-domain`
//! (methods, errors). Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
