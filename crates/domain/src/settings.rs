//! Device configuration fixture.
//!
//! The canonical settings body a freshly booted device reports. `Default`
//! values match a factory-state unit; hooks mutate the serialized form at
//! runtime, so these types mainly exist to pin the schema and seed the
//! registry.

use serde::{Deserialize, Serialize};

/// Top-level device settings, as served by `GET /api/settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSettings {
    /// Echo received shell input back to the console.
    pub echo: bool,
    /// Log verbosity, 0 = debug … 3 = error.
    pub log_level: u8,
    /// Status LED behaviour (0 = off, 1 = power, 2 = CAN activity).
    pub led_mode: u8,
    /// Wi-Fi operating mode (0 = off, 1 = client, 2 = access point).
    pub wifi_mode: u8,
    /// Minutes of inactivity before the device enters idle sleep.
    pub idle_sleep_minutes: u32,
    pub wifi_settings: WifiSettings,
    pub can_settings: CanSettings,
    pub elm_settings: ElmSettings,
}

/// Wi-Fi credentials and the telnet console riding on the link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WifiSettings {
    pub ssid: String,
    pub password: String,
    pub channel: u8,
    pub telnet_port: u16,
    pub telnet_enabled: bool,
}

/// Per-channel CAN transceiver configuration, keyed by bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanSettings {
    pub can0: CanChannelSettings,
    pub can1: CanChannelSettings,
    pub can2: CanChannelSettings,
}

/// One CAN channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanChannelSettings {
    pub enabled: bool,
    /// Nominal bitrate in bit/s.
    pub bitrate: u32,
    /// Receive-only mode: never ACK, never transmit.
    pub listen_only: bool,
}

/// ELM327/OBD interface emulation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElmSettings {
    /// Response timeout in milliseconds.
    pub timeout: u32,
    pub line_feed: bool,
    pub echo: bool,
    pub monitor_mode: bool,
    pub adaptive_timing: bool,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            echo: true,
            log_level: 0,
            led_mode: 2,
            wifi_mode: 1,
            idle_sleep_minutes: 5,
            wifi_settings: WifiSettings::default(),
            can_settings: CanSettings::default(),
            elm_settings: ElmSettings::default(),
        }
    }
}

impl Default for WifiSettings {
    fn default() -> Self {
        Self {
            ssid: "PiCCANTE".to_string(),
            password: "piccante".to_string(),
            channel: 1,
            telnet_port: 23,
            telnet_enabled: true,
        }
    }
}

impl Default for CanSettings {
    fn default() -> Self {
        Self {
            can0: CanChannelSettings {
                enabled: true,
                bitrate: 500_000,
                listen_only: false,
            },
            can1: CanChannelSettings {
                enabled: false,
                bitrate: 500_000,
                listen_only: false,
            },
            can2: CanChannelSettings {
                enabled: false,
                bitrate: 500_000,
                listen_only: false,
            },
        }
    }
}

impl Default for ElmSettings {
    fn default() -> Self {
        Self {
            timeout: 200,
            line_feed: true,
            echo: false,
            monitor_mode: false,
            adaptive_timing: true,
        }
    }
}
