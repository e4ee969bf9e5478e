//! Default fixture set — the endpoints a simulated device exposes.

use serde_json::json;

use picomock_domain::about::AboutInfo;
use picomock_domain::error::PicoMockError;
use picomock_domain::method::Method;
use picomock_domain::settings::DeviceSettings;
use picomock_domain::telemetry::TelemetrySnapshot;

use crate::registry::{Descriptor, Hook, MethodTable, Registry};

pub const SETTINGS_PATH: &str = "/api/settings";
pub const STATS_PATH: &str = "/api/stats";
pub const ABOUT_PATH: &str = "/api/about";

/// Build the registry with the stock settings, stats, and about endpoints.
///
/// # Errors
///
/// Returns [`PicoMockError::Fixture`] if a fixture body fails to serialize.
pub fn default_registry() -> Result<Registry, PicoMockError> {
    let mut registry = Registry::default();

    let mut settings = MethodTable::default();
    settings.insert(
        Method::Get,
        Descriptor::new(200, serde_json::to_value(DeviceSettings::default())?),
    );
    settings.insert(
        Method::Post,
        Descriptor::with_hook(200, json!({"status": "ok"}), Hook::SettingsPatch),
    );
    registry.register(SETTINGS_PATH, settings);

    let mut stats = MethodTable::default();
    stats.insert(
        Method::Get,
        Descriptor::with_hook(
            200,
            serde_json::to_value(TelemetrySnapshot::default())?,
            Hook::TelemetryTick,
        ),
    );
    registry.register(STATS_PATH, stats);

    let mut about = MethodTable::default();
    about.insert(
        Method::Get,
        Descriptor::new(200, serde_json::to_value(AboutInfo::default())?),
    );
    registry.register(ABOUT_PATH, about);

    Ok(registry)
}
