// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op actuator for wiring the coordinator without a vehicle

use super::{ActuatorBridge, ActuatorError, HealthReceiver};
use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::debug;

/// Actuator that accepts every command and emits no telemetry
#[derive(Clone, Default)]
pub struct NoOpActuator;

impl NoOpActuator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ActuatorBridge for NoOpActuator {
    async fn send_target(
        &self,
        lat: f64,
        lon: f64,
        alt_m: f64,
        origin_track_id: &str,
    ) -> Result<(), ActuatorError> {
        debug!(lat, lon, alt_m, origin_track_id, "noop send_target");
        Ok(())
    }

    async fn stop_and_hold(&self) -> Result<(), ActuatorError> {
        debug!("noop stop_and_hold");
        Ok(())
    }

    fn subscribe_health(&self) -> HealthReceiver {
        // Receiver that never yields; sender dropped immediately
        let (_tx, rx) = mpsc::unbounded_channel();
        rx
    }
}
