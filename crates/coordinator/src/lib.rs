// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! talon-coordinator: the target-lock coordinator
//!
//! Owns the single lock slot, reconciles snapshot polls, grace timers, and
//! actuator health telemetry into one serialized stream of lock decisions,
//! and issues follow commands to the actuator bridge.

pub mod coordinator;
pub mod error;
pub mod runtime;
pub mod state;
pub mod timer;

pub use coordinator::LockCoordinator;
pub use error::CoordinatorError;
pub use runtime::{spawn, Command, CoordinatorHandle, CoordinatorRuntime, EventReceiver};
pub use state::{LockPhase, LockSlot, LockedTrack, StateView};
pub use timer::GraceTimer;
