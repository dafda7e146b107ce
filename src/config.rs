//! Runtime configuration from the environment.

use std::time::Duration;

/// Service settings. Read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Simulated soil-sensing time before an analysis completes
    pub analysis_delay: Duration,
    /// Simulated leaf-image inference time
    pub plant_scan_delay: Duration,
    /// Period of the telemetry simulator
    pub telemetry_interval: Duration,
    /// Length of one irrigation countdown minute
    pub irrigation_tick: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            analysis_delay: Duration::from_millis(2000),
            plant_scan_delay: Duration::from_millis(2500),
            telemetry_interval: Duration::from_secs(3),
            irrigation_tick: Duration::from_secs(60),
        }
    }
}

impl Config {
    /// Load from `BIND_ADDR`, `ANALYSIS_DELAY_MS`, `PLANT_SCAN_DELAY_MS`,
    /// `TELEMETRY_INTERVAL_SECS` and `IRRIGATION_TICK_SECS`.
    ///
    /// Missing or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR").unwrap_or(defaults.bind_addr);
        let analysis_delay = lookup("ANALYSIS_DELAY_MS")
            .and_then(|v| v.parse().ok())
            .map_or(defaults.analysis_delay, Duration::from_millis);
        let plant_scan_delay = lookup("PLANT_SCAN_DELAY_MS")
            .and_then(|v| v.parse().ok())
            .map_or(defaults.plant_scan_delay, Duration::from_millis);
        let telemetry_interval = lookup("TELEMETRY_INTERVAL_SECS")
            .and_then(|v| v.parse().ok())
            .filter(|secs: &u64| *secs > 0)
            .map_or(defaults.telemetry_interval, Duration::from_secs);
        let irrigation_tick = lookup("IRRIGATION_TICK_SECS")
            .and_then(|v| v.parse().ok())
            .filter(|secs: &u64| *secs > 0)
            .map_or(defaults.irrigation_tick, Duration::from_secs);

        Self {
            bind_addr,
            analysis_delay,
            plant_scan_delay,
            telemetry_interval,
            irrigation_tick,
        }
    }
}
