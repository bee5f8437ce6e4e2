// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake snapshot source for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{SnapshotError, TrackSnapshot, TrackSnapshotSource};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Snapshot source serving a scripted queue of poll results
///
/// When the queue runs dry the last scripted snapshot is repeated, so a poll
/// loop keeps seeing a steady world.
#[derive(Clone, Default)]
pub struct FakeSnapshotSource {
    queue: Arc<Mutex<VecDeque<Result<TrackSnapshot, SnapshotError>>>>,
    last: Arc<Mutex<TrackSnapshot>>,
    fetch_count: Arc<Mutex<usize>>,
}

impl FakeSnapshotSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful snapshot
    pub fn push_snapshot(&self, snapshot: TrackSnapshot) {
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Ok(snapshot));
    }

    /// Queue a fetch error
    pub fn push_error(&self, error: SnapshotError) {
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Err(error));
    }

    /// How many times fetch was called
    pub fn fetch_count(&self) -> usize {
        *self.fetch_count.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl TrackSnapshotSource for FakeSnapshotSource {
    async fn fetch(&self) -> Result<TrackSnapshot, SnapshotError> {
        *self.fetch_count.lock().unwrap_or_else(|e| e.into_inner()) += 1;

        let next = self
            .queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();

        match next {
            Some(Ok(snapshot)) => {
                *self.last.lock().unwrap_or_else(|e| e.into_inner()) = snapshot.clone();
                Ok(snapshot)
            }
            Some(Err(e)) => Err(e),
            None => Ok(self.last.lock().unwrap_or_else(|e| e.into_inner()).clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_scripted_results_in_order() {
        let source = FakeSnapshotSource::new();
        source.push_snapshot(TrackSnapshot {
            tracks: vec![],
            connected: true,
        });
        source.push_error(SnapshotError::Timeout);

        assert!(source.fetch().await.is_ok());
        assert!(matches!(source.fetch().await, Err(SnapshotError::Timeout)));
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn repeats_last_snapshot_when_queue_is_empty() {
        let source = FakeSnapshotSource::new();
        source.push_snapshot(TrackSnapshot {
            tracks: vec![],
            connected: true,
        });

        source.fetch().await.unwrap();
        let repeated = source.fetch().await.unwrap();
        assert!(repeated.connected);
    }
}
