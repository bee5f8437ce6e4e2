// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! talon-core: Domain layer for the talon target-lock coordinator
//!
//! This crate provides:
//! - Clock abstraction for testable time handling
//! - Tracked-object data model and staleness classification
//! - Battery threshold latching
//! - Coordinator configuration and event vocabulary

pub mod battery;
pub mod clock;
pub mod config;
pub mod event;
pub mod staleness;
pub mod track;

// Re-exports
pub use battery::{BatteryAlert, BatteryMonitor, HealthSnapshot};
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, CoordinatorConfig};
pub use event::CoordinatorEvent;
pub use staleness::{is_stale, TrackTable};
pub use track::{Position, TrackedObject, Velocity};
