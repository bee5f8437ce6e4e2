// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-slot cancellable grace timer
//!
//! At most one grace deadline may be outstanding per lock; arming replaces
//! any pending deadline so a stale timer can never fire against a newer lock.

use std::time::Instant;

#[derive(Debug, Clone)]
struct Deadline {
    track_id: String,
    fire_at: Instant,
}

/// One-shot deadline tied to the currently-locked track
#[derive(Debug, Default)]
pub struct GraceTimer {
    pending: Option<Deadline>,
}

impl GraceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer for a track, replacing any pending deadline
    pub fn arm(&mut self, track_id: impl Into<String>, fire_at: Instant) {
        self.pending = Some(Deadline {
            track_id: track_id.into(),
            fire_at,
        });
    }

    /// Cancel the pending deadline, if any
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending deadline, for the owner loop's sleep
    pub fn next_fire_at(&self) -> Option<Instant> {
        self.pending.as_ref().map(|d| d.fire_at)
    }

    /// Take the deadline if it has elapsed, returning the armed track id
    pub fn fired(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|d| d.fire_at <= now) {
            self.pending.take().map(|d| d.track_id)
        } else {
            None
        }
    }
}
