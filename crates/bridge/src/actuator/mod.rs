// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Actuator bridge: abstraction over the vehicle's command channel

mod noop;

pub use noop::NoOpActuator;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ActuatorCall, FakeActuator};

use async_trait::async_trait;
use talon_core::HealthSnapshot;
use thiserror::Error;
use tokio::sync::mpsc;

/// Receiver for actuator health telemetry
pub type HealthReceiver = mpsc::UnboundedReceiver<HealthSnapshot>;

/// Errors from actuator commands
#[derive(Debug, Error)]
pub enum ActuatorError {
    #[error("actuator not connected")]
    NotConnected,
    #[error("command failed: {0}")]
    CommandFailed(String),
}

/// Adapter for the vehicle's command channel
///
/// Commands are fire-and-forget from the coordinator's point of view: a
/// failure is surfaced but never reverses a lock decision, and the next poll
/// tick retries naturally.
#[async_trait]
pub trait ActuatorBridge: Clone + Send + Sync + 'static {
    /// Direct the vehicle to a target point
    async fn send_target(
        &self,
        lat: f64,
        lon: f64,
        alt_m: f64,
        origin_track_id: &str,
    ) -> Result<(), ActuatorError>;

    /// Stop following and hold the current position
    async fn stop_and_hold(&self) -> Result<(), ActuatorError>;

    /// Subscribe to the health telemetry stream
    fn subscribe_health(&self) -> HealthReceiver;
}
