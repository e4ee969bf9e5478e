//! Static device identification fixture.

use serde::{Deserialize, Serialize};

/// Firmware identification, as served by `GET /api/about`.
///
/// Purely informational and never mutated — the build date and time are
/// whatever the simulated firmware image was "compiled" with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutInfo {
    pub version: String,
    pub board: String,
    pub build_date: String,
    pub build_time: String,
}

impl Default for AboutInfo {
    fn default() -> Self {
        Self {
            version: "0.9.1".to_string(),
            board: "RP2350, Pico 2 W".to_string(),
            build_date: "Jul 12 2025".to_string(),
            build_time: "14:03:21".to_string(),
        }
    }
}
