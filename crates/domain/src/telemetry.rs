//! Device telemetry fixture.
//!
//! A point-in-time snapshot of everything the device reports under
//! `GET /api/stats`: uptime, heap, per-core CPU load with the scheduler
//! task list, filesystem usage, ADC readings, per-bus CAN counters, and
//! Wi-Fi link status. `Default` is a plausible snapshot of an idle unit a
//! few minutes after boot.

use serde::{Deserialize, Serialize};

/// Scheduler ticks added per simulated second.
pub const TICK_STEP: u64 = 1_000;

/// ADC channel indices whose readings jitter on every poll.
pub const ADC_SYSTEM_VOLTAGE: usize = 3;
pub const ADC_CPU_TEMPERATURE: usize = 4;

/// Sampling range for the system voltage channel, volts.
pub const SYSTEM_VOLTAGE_RANGE: (f64, f64) = (1.0, 5.5);
/// Sampling range for the CPU temperature channel, degrees Celsius.
pub const CPU_TEMPERATURE_RANGE: (f64, f64) = (20.0, 80.0);

/// Full telemetry snapshot, as served by `GET /api/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub is_pico2: bool,
    pub uptime: Uptime,
    pub memory: MemoryStats,
    pub cpu: CpuStats,
    pub fs: FsStats,
    pub adc: Vec<AdcReading>,
    pub can: Vec<CanBusStats>,
    pub wifi: WifiStatus,
}

/// Wall-clock uptime broken into display units, plus the raw tick counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uptime {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub ticks: u64,
}

impl Uptime {
    /// Advance by one simulated second.
    ///
    /// Seconds roll into minutes at 60, minutes into hours at 60, and hours
    /// into days at 24. The tick counter grows by [`TICK_STEP`] and never
    /// wraps.
    pub fn advance(&mut self) {
        self.ticks += TICK_STEP;
        self.seconds += 1;
        if self.seconds >= 60 {
            self.seconds = 0;
            self.minutes += 1;
        }
        if self.minutes >= 60 {
            self.minutes = 0;
            self.hours += 1;
        }
        if self.hours >= 24 {
            self.hours = 0;
            self.days += 1;
        }
    }
}

/// FreeRTOS heap accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub free_heap: u32,
    pub min_free_heap: u32,
    pub total_heap: u32,
    pub heap_used: u32,
}

/// Per-core load plus the scheduler task table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuStats {
    pub total_runtime: u64,
    pub load0: f64,
    pub load1: f64,
    pub tasks: Vec<TaskStats>,
}

/// One scheduler task, as reported by the runtime stats collector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStats {
    pub name: String,
    /// Scheduler state: 0 = running, 1 = ready, 2 = blocked.
    pub state: u8,
    pub priority: u8,
    /// Minimum observed stack headroom, words.
    pub stack_high_water: u32,
    pub core_id: u8,
    pub task_number: u32,
    /// Pinned core, or -1 when free to migrate.
    pub core_affinity: i8,
    pub cpu_usage_0: f64,
    pub cpu_usage_1: f64,
}

/// Flash filesystem usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsStats {
    pub block_size: u32,
    pub block_count: u32,
    pub total_size: u32,
    pub used_size: u32,
    pub free_size: u32,
}

/// One ADC channel reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdcReading {
    pub channel: u8,
    pub value: f64,
    pub raw: u16,
    pub name: String,
    pub unit: String,
}

/// Per-bus CAN frame counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanBusStats {
    pub bus: u8,
    pub enabled: bool,
    pub bitrate: u32,
    pub rx_buffered: u32,
    pub tx_buffered: u32,
    pub rx_overflow: u32,
    pub rx_total: u64,
    pub tx_total: u64,
    pub tx_attempt: u64,
    pub parse_error: u64,
}

/// Wi-Fi link status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WifiStatus {
    pub mode: u8,
    pub connected: bool,
    pub ssid: String,
    pub channel: u8,
    pub rssi: i32,
    pub ip_address: String,
    pub mac_address: String,
}

impl Default for TelemetrySnapshot {
    fn default() -> Self {
        Self {
            is_pico2: true,
            uptime: Uptime {
                days: 0,
                hours: 0,
                minutes: 3,
                seconds: 4,
                ticks: 184_807,
            },
            memory: MemoryStats {
                free_heap: 66_768,
                min_free_heap: 66_768,
                total_heap: 131_072,
                heap_used: 64_304,
            },
            cpu: CpuStats {
                total_runtime: 184_863_237,
                load0: 3.068_493,
                load1: 2.095_370,
                tasks: default_tasks(),
            },
            fs: FsStats {
                block_size: 4_096,
                block_count: 128,
                total_size: 524_288,
                used_size: 212_992,
                free_size: 311_296,
            },
            adc: vec![
                AdcReading {
                    channel: 0,
                    value: 0.755_092,
                    raw: 937,
                    name: "ADC0".to_string(),
                    unit: "V".to_string(),
                },
                AdcReading {
                    channel: 1,
                    value: 0.568_938,
                    raw: 706,
                    name: "ADC1".to_string(),
                    unit: "V".to_string(),
                },
                AdcReading {
                    channel: 2,
                    value: 0.419_853,
                    raw: 521,
                    name: "ADC2".to_string(),
                    unit: "V".to_string(),
                },
                AdcReading {
                    channel: 3,
                    value: 4.310_550,
                    raw: 1_783,
                    name: "System Voltage".to_string(),
                    unit: "V".to_string(),
                },
                AdcReading {
                    channel: 4,
                    value: 28.911_331,
                    raw: 872,
                    name: "CPU Temperature".to_string(),
                    unit: "\u{b0}C".to_string(),
                },
            ],
            can: vec![
                CanBusStats {
                    bus: 0,
                    enabled: true,
                    bitrate: 500_000,
                    rx_buffered: 0,
                    tx_buffered: 0,
                    rx_overflow: 0,
                    rx_total: 0,
                    tx_total: 0,
                    tx_attempt: 0,
                    parse_error: 0,
                },
                CanBusStats {
                    bus: 1,
                    enabled: false,
                    bitrate: 500_000,
                    rx_buffered: 0,
                    tx_buffered: 0,
                    rx_overflow: 0,
                    rx_total: 0,
                    tx_total: 0,
                    tx_attempt: 0,
                    parse_error: 0,
                },
                CanBusStats {
                    bus: 2,
                    enabled: false,
                    bitrate: 500_000,
                    rx_buffered: 0,
                    tx_buffered: 0,
                    rx_overflow: 0,
                    rx_total: 0,
                    tx_total: 0,
                    tx_attempt: 0,
                    parse_error: 0,
                },
            ],
            wifi: WifiStatus {
                mode: 1,
                connected: true,
                ssid: "PiCCANTE".to_string(),
                channel: 1,
                rssi: -57,
                ip_address: "192.168.13.37".to_string(),
                mac_address: "28:cd:c1:0f:3b:5a".to_string(),
            },
        }
    }
}

fn default_tasks() -> Vec<TaskStats> {
    vec![
        TaskStats {
            name: "HTTP Server".to_string(),
            state: 2,
            priority: 2,
            stack_high_water: 424,
            core_id: 0,
            task_number: 16,
            core_affinity: -1,
            cpu_usage_0: 0.04,
            cpu_usage_1: 0.06,
        },
        TaskStats {
            name: "CAN".to_string(),
            state: 2,
            priority: 27,
            stack_high_water: 468,
            core_id: 1,
            task_number: 9,
            core_affinity: 2,
            cpu_usage_0: 0.00,
            cpu_usage_1: 0.84,
        },
        TaskStats {
            name: "StatsTask".to_string(),
            state: 0,
            priority: 1,
            stack_high_water: 386,
            core_id: 1,
            task_number: 1,
            core_affinity: -1,
            cpu_usage_0: 0.00,
            cpu_usage_1: 0.22,
        },
        TaskStats {
            name: "WiFi".to_string(),
            state: 2,
            priority: 1,
            stack_high_water: 346,
            core_id: 1,
            task_number: 10,
            core_affinity: -1,
            cpu_usage_0: 0.00,
            cpu_usage_1: 0.00,
        },
        TaskStats {
            name: "IDLE0".to_string(),
            state: 1,
            priority: 0,
            stack_high_water: 466,
            core_id: 0,
            task_number: 11,
            core_affinity: -1,
            cpu_usage_0: 52.93,
            cpu_usage_1: 44.20,
        },
        TaskStats {
            name: "IDLE1".to_string(),
            state: 1,
            priority: 0,
            stack_high_water: 484,
            core_id: 1,
            task_number: 12,
            core_affinity: -1,
            cpu_usage_0: 44.00,
            cpu_usage_1: 53.71,
        },
        TaskStats {
            name: "USB".to_string(),
            state: 2,
            priority: 26,
            stack_high_water: 438,
            core_id: 0,
            task_number: 2,
            core_affinity: 1,
            cpu_usage_0: 0.00,
            cpu_usage_1: 0.00,
        },
        TaskStats {
            name: "Tmr Svc".to_string(),
            state: 2,
            priority: 31,
            stack_high_water: 978,
            core_id: 1,
            task_number: 13,
            core_affinity: -1,
            cpu_usage_0: 0.02,
            cpu_usage_1: 0.73,
        },
    ]
}
