//! # picomock-app
//!
//! Application layer — the simulation core and **port definitions**.
//!
//! ## Responsibilities
//! - Define the **endpoint registry**: path → method table → response
//!   descriptor, the single owner of all mutable fixture state
//! - Provide the **default fixture set** (settings, stats, about)
//! - Dispatch incoming requests against the registry and run **mutation
//!   hooks** before a reply is assembled
//! - Define the `NoiseSource` port for sensor jitter and provide an
//!   in-process `rand`-backed implementation
//!
//! ## Dependency rule
//! Depends on `picomock-domain` only (plus `rand` for the in-process noise
//! source). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod fixtures;
pub mod noise;
pub mod ports;
pub mod registry;
pub mod simulator;
