// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing events emitted by the lock coordinator
//!
//! Every automatic transition emits a distinct event so a presentation layer
//! can render a status line; nothing automatic happens silently.

use serde::{Deserialize, Serialize};

/// Events emitted on the coordinator's output stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinatorEvent {
    /// A track was locked as the follow target
    TrackLocked { id: String },

    /// The lock was released
    TrackUnlocked { reason: String },

    /// The locked track disappeared from the snapshot
    TargetLost { id: String },

    /// The locked track went stale; grace period started
    TrackStale { id: String, grace_secs_remaining: u64 },

    /// The locked track recovered before grace expiry
    TrackRecovered { id: String },

    /// The grace period elapsed without recovery
    StaleAutoUnlock { id: String },

    /// Battery dropped to or below the low threshold
    LowBattery { percent: u8 },

    /// Battery dropped to or below the critical threshold
    CriticalBattery { percent: u8 },

    /// A non-fatal error was surfaced (rejected lock, command failure,
    /// transport failure)
    Error { message: String },
}

impl CoordinatorEvent {
    /// Get the event name for subscribers and logging
    /// Format: "category:action"
    pub fn name(&self) -> &'static str {
        match self {
            CoordinatorEvent::TrackLocked { .. } => "track:locked",
            CoordinatorEvent::TrackUnlocked { .. } => "track:unlocked",
            CoordinatorEvent::TargetLost { .. } => "track:lost",
            CoordinatorEvent::TrackStale { .. } => "track:stale",
            CoordinatorEvent::TrackRecovered { .. } => "track:recovered",
            CoordinatorEvent::StaleAutoUnlock { .. } => "track:stale-unlock",
            CoordinatorEvent::LowBattery { .. } => "battery:low",
            CoordinatorEvent::CriticalBattery { .. } => "battery:critical",
            CoordinatorEvent::Error { .. } => "coordinator:error",
        }
    }
}
