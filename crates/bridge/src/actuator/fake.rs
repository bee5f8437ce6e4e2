// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake actuator bridge for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ActuatorBridge, ActuatorError, HealthReceiver};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use talon_core::HealthSnapshot;
use tokio::sync::mpsc;

/// Recorded actuator call
#[derive(Debug, Clone, PartialEq)]
pub enum ActuatorCall {
    SendTarget {
        lat: f64,
        lon: f64,
        alt_m: f64,
        origin_track_id: String,
    },
    StopAndHold,
}

#[derive(Default)]
struct Inner {
    calls: Vec<ActuatorCall>,
    health_subscribers: Vec<mpsc::UnboundedSender<HealthSnapshot>>,
    fail_send_target: bool,
    fail_stop_and_hold: bool,
}

/// Fake actuator bridge recording every command
#[derive(Clone, Default)]
pub struct FakeActuator {
    inner: Arc<Mutex<Inner>>,
}

impl FakeActuator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ActuatorCall> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Count of send_target calls
    pub fn send_target_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, ActuatorCall::SendTarget { .. }))
            .count()
    }

    /// Count of stop_and_hold calls
    pub fn stop_and_hold_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, ActuatorCall::StopAndHold))
            .count()
    }

    /// Make subsequent send_target calls fail
    pub fn fail_send_target(&self, fail: bool) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .fail_send_target = fail;
    }

    /// Make subsequent stop_and_hold calls fail
    pub fn fail_stop_and_hold(&self, fail: bool) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .fail_stop_and_hold = fail;
    }

    /// Push a health snapshot to every subscriber
    pub fn push_health(&self, snapshot: HealthSnapshot) {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        for tx in &inner.health_subscribers {
            let _ = tx.send(snapshot);
        }
    }
}

#[async_trait]
impl ActuatorBridge for FakeActuator {
    async fn send_target(
        &self,
        lat: f64,
        lon: f64,
        alt_m: f64,
        origin_track_id: &str,
    ) -> Result<(), ActuatorError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.calls.push(ActuatorCall::SendTarget {
            lat,
            lon,
            alt_m,
            origin_track_id: origin_track_id.to_string(),
        });
        if inner.fail_send_target {
            return Err(ActuatorError::CommandFailed("fake send failure".into()));
        }
        Ok(())
    }

    async fn stop_and_hold(&self) -> Result<(), ActuatorError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.calls.push(ActuatorCall::StopAndHold);
        if inner.fail_stop_and_hold {
            return Err(ActuatorError::CommandFailed("fake hold failure".into()));
        }
        Ok(())
    }

    fn subscribe_health(&self) -> HealthReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .health_subscribers
            .push(tx);
        rx
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
