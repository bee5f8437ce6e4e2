// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Staleness classification and the working set of visible tracks

use crate::track::TrackedObject;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Classify a track as stale when its last update exceeds the timeout.
///
/// Pure and total: `now` earlier than `last_update` (out-of-order sensor
/// timestamps) classifies as fresh.
pub fn is_stale(now: Instant, last_update: Instant, stale_timeout: Duration) -> bool {
    now.saturating_duration_since(last_update) > stale_timeout
}

/// An entry in the working set
#[derive(Clone, Debug)]
struct TableEntry {
    track: TrackedObject,
    /// When the track was last present in a snapshot
    last_seen: Instant,
    /// Whether the track was present in the most recent snapshot
    present: bool,
}

/// Working set of tracks accumulated across snapshots
///
/// Snapshots refresh tracks they contain; tracks absent from a snapshot keep
/// their last-known values until pruned.
#[derive(Debug, Default)]
pub struct TrackTable {
    entries: HashMap<String, TableEntry>,
}

impl TrackTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh the working set from a snapshot taken at `now`.
    ///
    /// Every track in the snapshot is inserted or updated and marked present;
    /// tracks missing from the snapshot are marked absent but retained.
    pub fn apply_snapshot(&mut self, tracks: Vec<TrackedObject>, now: Instant) {
        for entry in self.entries.values_mut() {
            entry.present = false;
        }
        for track in tracks {
            self.entries.insert(
                track.id.clone(),
                TableEntry {
                    track,
                    last_seen: now,
                    present: true,
                },
            );
        }
    }

    /// Drop tracks absent longer than `removal_timeout`.
    ///
    /// A zero timeout disables pruning; tracks are then never removed by time
    /// alone. Returns the ids that were removed.
    pub fn prune_absent(&mut self, now: Instant, removal_timeout: Duration) -> Vec<String> {
        if removal_timeout.is_zero() {
            return Vec::new();
        }
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, e)| {
                !e.present && now.saturating_duration_since(e.last_seen) > removal_timeout
            })
            .map(|(id, _)| id.clone())
            .collect();
        for id in &expired {
            self.entries.remove(id);
        }
        expired
    }

    /// Whether the track was present in the most recent snapshot
    pub fn is_present(&self, id: &str) -> bool {
        self.entries.get(id).is_some_and(|e| e.present)
    }

    /// Look up a track by id (present or retained)
    pub fn get(&self, id: &str) -> Option<&TrackedObject> {
        self.entries.get(id).map(|e| &e.track)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "staleness_tests.rs"]
mod tests;
