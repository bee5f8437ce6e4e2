// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coordinator configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors from configuration validation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("poll interval must be at least 1s (got {0:?})")]
    PollIntervalTooShort(Duration),
    #[error("stale timeout must be at least 1s (got {0:?})")]
    StaleTimeoutTooShort(Duration),
    #[error("battery threshold out of range: {name} = {value}")]
    ThresholdOutOfRange { name: &'static str, value: u8 },
    #[error("low battery threshold ({low}) must exceed critical threshold ({critical})")]
    ThresholdOrder { low: u8, critical: u8 },
}

/// Configuration for the lock coordinator
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoordinatorConfig {
    /// Window after a locked track goes stale during which the lock is
    /// preserved pending recovery
    #[serde(with = "humantime_serde")]
    pub stale_grace: Duration,
    /// Battery percentage at or below which a warning is emitted
    pub low_battery_percent: u8,
    /// Battery percentage at or below which the lock is force-released
    pub critical_battery_percent: u8,
    /// How often the snapshot source is polled
    #[serde(with = "humantime_serde")]
    pub poll_interval: Duration,
    /// Track age past which it is classified stale
    #[serde(with = "humantime_serde")]
    pub stale_timeout: Duration,
    /// Absence duration past which a track is pruned from the working set;
    /// zero disables pruning
    #[serde(with = "humantime_serde")]
    pub stale_removal_timeout: Duration,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            stale_grace: Duration::from_secs(10),
            low_battery_percent: 20,
            critical_battery_percent: 10,
            poll_interval: Duration::from_secs(1),
            stale_timeout: Duration::from_secs(5),
            stale_removal_timeout: Duration::ZERO,
        }
    }
}

impl CoordinatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval < Duration::from_secs(1) {
            return Err(ConfigError::PollIntervalTooShort(self.poll_interval));
        }
        if self.stale_timeout < Duration::from_secs(1) {
            return Err(ConfigError::StaleTimeoutTooShort(self.stale_timeout));
        }
        if self.low_battery_percent > 100 {
            return Err(ConfigError::ThresholdOutOfRange {
                name: "low_battery_percent",
                value: self.low_battery_percent,
            });
        }
        if self.critical_battery_percent > 100 {
            return Err(ConfigError::ThresholdOutOfRange {
                name: "critical_battery_percent",
                value: self.critical_battery_percent,
            });
        }
        if self.low_battery_percent <= self.critical_battery_percent {
            return Err(ConfigError::ThresholdOrder {
                low: self.low_battery_percent,
                critical: self.critical_battery_percent,
            });
        }
        Ok(())
    }

    pub fn with_stale_grace(mut self, grace: Duration) -> Self {
        self.stale_grace = grace;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_stale_timeout(mut self, timeout: Duration) -> Self {
        self.stale_timeout = timeout;
        self
    }

    pub fn with_stale_removal_timeout(mut self, timeout: Duration) -> Self {
        self.stale_removal_timeout = timeout;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
