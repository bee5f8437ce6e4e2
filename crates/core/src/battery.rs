// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Battery threshold latching for actuator health telemetry

use serde::{Deserialize, Serialize};

/// One reading from the actuator health stream
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    pub connected: bool,
    /// Battery percentage, 0..=100
    pub battery_percent: u8,
}

/// Alert produced by a threshold crossing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatteryAlert {
    /// Battery dropped to or below the low threshold
    Low { percent: u8 },
    /// Battery dropped to or below the critical threshold; forces unlock
    Critical { percent: u8 },
}

/// Latching monitor over battery percentage readings
///
/// Each alert fires once per crossing at or below its threshold. The latch
/// resets only when the percentage rises strictly above the threshold, so
/// repeated identical low readings stay silent.
#[derive(Debug)]
pub struct BatteryMonitor {
    low_threshold: u8,
    critical_threshold: u8,
    low_warned: bool,
    critical_triggered: bool,
}

impl BatteryMonitor {
    pub fn new(low_threshold: u8, critical_threshold: u8) -> Self {
        Self {
            low_threshold,
            critical_threshold,
            low_warned: false,
            critical_triggered: false,
        }
    }

    /// Feed one battery reading; returns alerts for any new crossings
    pub fn observe(&mut self, percent: u8) -> Vec<BatteryAlert> {
        let mut alerts = Vec::new();

        if percent > self.low_threshold {
            self.low_warned = false;
        } else if !self.low_warned {
            self.low_warned = true;
            alerts.push(BatteryAlert::Low { percent });
        }

        if percent > self.critical_threshold {
            self.critical_triggered = false;
        } else if !self.critical_triggered {
            self.critical_triggered = true;
            alerts.push(BatteryAlert::Critical { percent });
        }

        alerts
    }

    pub fn low_warned(&self) -> bool {
        self.low_warned
    }

    pub fn critical_triggered(&self) -> bool {
        self.critical_triggered
    }
}

#[cfg(test)]
#[path = "battery_tests.rs"]
mod tests;
