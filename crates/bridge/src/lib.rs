// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the coordinator's external collaborators
//!
//! The actuator bridge wraps the vehicle's command channel; the snapshot
//! source wraps whatever transport yields the visible track list.

pub mod actuator;
pub mod snapshot;

pub use actuator::{ActuatorBridge, ActuatorError, HealthReceiver, NoOpActuator};
pub use snapshot::{SnapshotError, TrackSnapshot, TrackSnapshotSource};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use actuator::{ActuatorCall, FakeActuator};
#[cfg(any(test, feature = "test-support"))]
pub use snapshot::FakeSnapshotSource;
