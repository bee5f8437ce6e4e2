// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Track snapshot source: abstraction over the transport that yields the
//! visible track list

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeSnapshotSource;

use async_trait::async_trait;
use talon_core::TrackedObject;
use thiserror::Error;

/// Errors from fetching a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("fetch timed out")]
    Timeout,
    #[error("malformed snapshot: {0}")]
    Parse(String),
}

/// One poll result from the snapshot source
#[derive(Debug, Clone, Default)]
pub struct TrackSnapshot {
    pub tracks: Vec<TrackedObject>,
    /// Whether the upstream sensor link is connected
    pub connected: bool,
}

/// Adapter for the periodically-polled track list
#[async_trait]
pub trait TrackSnapshotSource: Clone + Send + Sync + 'static {
    /// Fetch the current list of visible tracks
    async fn fetch(&self) -> Result<TrackSnapshot, SnapshotError>;
}
