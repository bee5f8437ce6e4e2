// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The single lock slot and its derived state
//!
//! All lock bookkeeping lives in one record owned by the coordinator; the
//! stale flag and timestamps are never mutated from outside it.

use serde::Serialize;
use std::time::Instant;

/// Observable phase of the lock slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockPhase {
    Unlocked,
    LockedActive,
    LockedStale,
}

/// The currently-locked track
#[derive(Clone, Debug)]
pub struct LockedTrack {
    pub id: String,
    pub locked_at: Instant,
    /// Set while the track is stale; implies the grace timer is pending
    pub stale_since: Option<Instant>,
}

/// At most one locked track at any observable instant
#[derive(Debug, Default)]
pub struct LockSlot {
    locked: Option<LockedTrack>,
}

/// Queryable snapshot of coordinator state
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StateView {
    pub locked_track_id: Option<String>,
    pub is_stale: bool,
    pub is_tracking: bool,
}

impl LockSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the slot for a track
    pub fn acquire(&mut self, id: impl Into<String>, now: Instant) {
        self.locked = Some(LockedTrack {
            id: id.into(),
            locked_at: now,
            stale_since: None,
        });
    }

    /// Release the slot, returning the previously-locked track
    pub fn take(&mut self) -> Option<LockedTrack> {
        self.locked.take()
    }

    pub fn current(&self) -> Option<&LockedTrack> {
        self.locked.as_ref()
    }

    pub fn is_locked_to(&self, id: &str) -> bool {
        self.locked.as_ref().is_some_and(|l| l.id == id)
    }

    pub fn phase(&self) -> LockPhase {
        match &self.locked {
            None => LockPhase::Unlocked,
            Some(l) if l.stale_since.is_some() => LockPhase::LockedStale,
            Some(_) => LockPhase::LockedActive,
        }
    }

    /// Record the locked track going stale; returns false if not locked or
    /// already stale
    pub fn mark_stale(&mut self, now: Instant) -> bool {
        match &mut self.locked {
            Some(l) if l.stale_since.is_none() => {
                l.stale_since = Some(now);
                true
            }
            _ => false,
        }
    }

    /// Record the locked track recovering; returns false if it was not stale
    pub fn mark_active(&mut self) -> bool {
        match &mut self.locked {
            Some(l) if l.stale_since.is_some() => {
                l.stale_since = None;
                true
            }
            _ => false,
        }
    }

    pub fn view(&self) -> StateView {
        StateView {
            locked_track_id: self.locked.as_ref().map(|l| l.id.clone()),
            is_stale: self.phase() == LockPhase::LockedStale,
            is_tracking: self.locked.is_some(),
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
