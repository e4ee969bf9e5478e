//! # picomock-domain
//!
//! Pure domain model for the picomock device-API simulator.
//!
//! ## Responsibilities
//! - Foundational types: typed HTTP methods, error conventions
//! - Define the **fixture bodies** a simulated device answers with
//!   (settings, telemetry snapshot, about) as typed, serde-derived models
//!   whose `Default` values are the canonical first-boot state
//! - Define the **partial-merge policy** applied to settings patches
//!   (known keys only, bounded depth)
//! - Define the **uptime rollover** arithmetic used by the telemetry tick
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod error;
pub mod merge;
pub mod method;

pub mod about;
pub mod settings;
pub mod telemetry;
