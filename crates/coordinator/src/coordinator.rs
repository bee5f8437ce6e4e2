// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lock coordinator state machine
//!
//! All transitions run on a single owner task; the coordinator is never
//! shared, so no internal locking is needed. Within one snapshot reaction the
//! tie-break order is absent, then stale, then active: absence is an
//! unambiguous signal loss and always dominates transient staleness.

use crate::error::CoordinatorError;
use crate::state::{LockSlot, StateView};
use crate::timer::GraceTimer;
use std::time::Instant;
use talon_bridge::{ActuatorBridge, SnapshotError, TrackSnapshot};
use talon_core::{
    is_stale, BatteryAlert, BatteryMonitor, Clock, CoordinatorConfig, CoordinatorEvent,
    HealthSnapshot, TrackTable, TrackedObject,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Why the lock slot is being released
#[derive(Debug, Clone, PartialEq, Eq)]
enum ReleaseReason {
    UserRequest(String),
    TargetLost,
    GraceExpired,
    CriticalBattery,
    Shutdown,
}

impl ReleaseReason {
    fn label(&self) -> &str {
        match self {
            ReleaseReason::UserRequest(reason) => reason,
            ReleaseReason::TargetLost => "target lost",
            ReleaseReason::GraceExpired => "grace expired",
            ReleaseReason::CriticalBattery => "critical battery",
            ReleaseReason::Shutdown => "shutdown",
        }
    }
}

/// The target-lock coordinator
///
/// Owns the single lock slot, the working set of visible tracks, the grace
/// timer, and the battery latch state.
pub struct LockCoordinator<A: ActuatorBridge, C: Clock> {
    config: CoordinatorConfig,
    actuator: A,
    clock: C,
    events: mpsc::UnboundedSender<CoordinatorEvent>,
    tracks: TrackTable,
    slot: LockSlot,
    timer: GraceTimer,
    battery: BatteryMonitor,
    source_connected: bool,
}

impl<A: ActuatorBridge, C: Clock> LockCoordinator<A, C> {
    /// Create a coordinator; fails only on invalid configuration
    pub fn new(
        config: CoordinatorConfig,
        actuator: A,
        clock: C,
        events: mpsc::UnboundedSender<CoordinatorEvent>,
    ) -> Result<Self, CoordinatorError> {
        config.validate()?;
        let battery = BatteryMonitor::new(
            config.low_battery_percent,
            config.critical_battery_percent,
        );
        Ok(Self {
            config,
            actuator,
            clock,
            events,
            tracks: TrackTable::new(),
            slot: LockSlot::new(),
            timer: GraceTimer::new(),
            battery,
            source_connected: false,
        })
    }

    /// Attempt to lock a track as the follow target
    ///
    /// Accepted only if the track is present in the latest snapshot and not
    /// stale; an accepted lock issues an immediate follow command. Re-locking
    /// the already-locked track is accepted and refreshes the follow command.
    pub async fn lock(&mut self, id: &str) -> bool {
        let now = self.clock.now();

        if let Some(locked) = self.slot.current() {
            if locked.id == id {
                if let Some(track) = self.tracks.get(id).cloned() {
                    self.issue_follow(&track).await;
                }
                return true;
            }
            let holder = locked.id.clone();
            self.reject_lock(id, &format!("already locked to {holder}"));
            return false;
        }

        if !self.tracks.is_present(id) {
            self.reject_lock(id, "not present in latest snapshot");
            return false;
        }
        let Some(track) = self.tracks.get(id).cloned() else {
            self.reject_lock(id, "not present in latest snapshot");
            return false;
        };
        if is_stale(now, track.last_update, self.config.stale_timeout) {
            self.reject_lock(id, "track is stale");
            return false;
        }

        self.timer.cancel();
        self.slot.acquire(id, now);
        info!(track_id = id, "track locked");
        self.emit(CoordinatorEvent::TrackLocked { id: id.to_string() });
        self.issue_follow(&track).await;
        true
    }

    /// Release the lock at the user's request; a no-op when nothing is locked
    pub async fn unlock(&mut self, reason: &str) {
        if self.slot.current().is_none() {
            debug!(reason, "unlock with nothing locked");
            return;
        }
        self.release(ReleaseReason::UserRequest(reason.to_string()))
            .await;
    }

    /// Feed one poll result from the snapshot source
    ///
    /// Transport errors flip connectivity false and retain all prior state;
    /// tracks keep their last-known values until a successful poll.
    pub async fn update_snapshot(&mut self, result: Result<TrackSnapshot, SnapshotError>) {
        let snapshot = match result {
            Ok(snapshot) => snapshot,
            Err(e) => {
                self.source_connected = false;
                warn!(error = %e, "snapshot fetch failed");
                self.emit(CoordinatorEvent::Error {
                    message: format!("snapshot fetch failed: {e}"),
                });
                return;
            }
        };

        let now = self.clock.now();
        self.source_connected = snapshot.connected;
        self.tracks.apply_snapshot(snapshot.tracks, now);
        self.react_to_snapshot(now).await;

        let removed = self
            .tracks
            .prune_absent(now, self.config.stale_removal_timeout);
        if !removed.is_empty() {
            debug!(count = removed.len(), "pruned absent tracks");
        }
    }

    /// Feed one health telemetry reading from the actuator
    pub async fn update_health(&mut self, snapshot: HealthSnapshot) {
        if !snapshot.connected {
            warn!("actuator link lost");
            self.emit(CoordinatorEvent::Error {
                message: "actuator link lost".to_string(),
            });
        }

        for alert in self.battery.observe(snapshot.battery_percent) {
            match alert {
                BatteryAlert::Low { percent } => {
                    warn!(percent, "battery low");
                    self.emit(CoordinatorEvent::LowBattery { percent });
                }
                BatteryAlert::Critical { percent } => {
                    error!(percent, "battery critical");
                    self.emit(CoordinatorEvent::CriticalBattery { percent });
                    if self.slot.current().is_some() {
                        self.release(ReleaseReason::CriticalBattery).await;
                    }
                }
            }
        }
    }

    /// Check whether the grace deadline has elapsed
    ///
    /// Fires at most once per stale episode: any lock, unlock, or recovery
    /// cancels the deadline before this can observe it.
    pub async fn check_grace(&mut self) {
        let now = self.clock.now();
        let Some(id) = self.timer.fired(now) else {
            return;
        };
        let still_stale = self
            .slot
            .current()
            .is_some_and(|l| l.id == id && l.stale_since.is_some());
        if !still_stale {
            return;
        }
        warn!(track_id = %id, "grace period elapsed without recovery");
        self.emit(CoordinatorEvent::StaleAutoUnlock { id });
        self.release(ReleaseReason::GraceExpired).await;
    }

    /// Release the lock (if held) and stop all timers before teardown
    pub async fn shutdown(&mut self) {
        if self.slot.current().is_some() {
            self.release(ReleaseReason::Shutdown).await;
        }
        self.timer.cancel();
        info!("coordinator shut down");
    }

    /// The pending grace deadline, for the owner loop's sleep
    pub fn next_grace_deadline(&self) -> Option<Instant> {
        self.timer.next_fire_at()
    }

    /// Queryable snapshot of current state
    pub fn state_view(&self) -> StateView {
        self.slot.view()
    }

    /// Whether the last snapshot poll reported a connected source
    pub fn source_connected(&self) -> bool {
        self.source_connected
    }

    /// React to the freshly-applied snapshot for the locked track
    async fn react_to_snapshot(&mut self, now: Instant) {
        let Some(locked) = self.slot.current() else {
            return;
        };
        let id = locked.id.clone();
        let was_stale = locked.stale_since.is_some();

        // Absence dominates staleness
        if !self.tracks.is_present(&id) {
            info!(track_id = %id, "locked track left the visible set");
            self.emit(CoordinatorEvent::TargetLost { id });
            self.release(ReleaseReason::TargetLost).await;
            return;
        }
        let Some(track) = self.tracks.get(&id).cloned() else {
            info!(track_id = %id, "locked track left the visible set");
            self.emit(CoordinatorEvent::TargetLost { id });
            self.release(ReleaseReason::TargetLost).await;
            return;
        };

        if is_stale(now, track.last_update, self.config.stale_timeout) {
            if !was_stale {
                self.slot.mark_stale(now);
                self.timer.arm(id.clone(), now + self.config.stale_grace);
                let grace_secs_remaining = self.config.stale_grace.as_secs();
                warn!(track_id = %id, grace_secs_remaining, "locked track went stale");
                self.emit(CoordinatorEvent::TrackStale {
                    id,
                    grace_secs_remaining,
                });
            }
            return;
        }

        if was_stale {
            self.slot.mark_active();
            self.timer.cancel();
            info!(track_id = %id, "locked track recovered");
            self.emit(CoordinatorEvent::TrackRecovered { id });
        }
        self.issue_follow(&track).await;
    }

    /// The single release path shared by every transition ending unlocked
    async fn release(&mut self, reason: ReleaseReason) {
        self.timer.cancel();
        let Some(locked) = self.slot.take() else {
            return;
        };
        info!(track_id = %locked.id, reason = reason.label(), "lock released");

        if let Err(e) = self.actuator.stop_and_hold().await {
            warn!(error = %e, "stop_and_hold failed");
            self.emit(CoordinatorEvent::Error {
                message: format!("stop_and_hold failed: {e}"),
            });
        }

        // TargetLost is the user-facing signal for that path; every other
        // release emits TrackUnlocked
        if reason != ReleaseReason::TargetLost {
            self.emit(CoordinatorEvent::TrackUnlocked {
                reason: reason.label().to_string(),
            });
        }
    }

    /// Issue a follow command; failures are surfaced but never reverse the
    /// lock decision
    async fn issue_follow(&self, track: &TrackedObject) {
        let result = self
            .actuator
            .send_target(
                track.position.lat,
                track.position.lon,
                track.position.alt_m,
                &track.id,
            )
            .await;
        if let Err(e) = result {
            warn!(track_id = %track.id, error = %e, "send_target failed");
            self.emit(CoordinatorEvent::Error {
                message: format!("send_target failed: {e}"),
            });
        }
    }

    fn reject_lock(&self, id: &str, why: &str) {
        warn!(track_id = id, why, "lock rejected");
        self.emit(CoordinatorEvent::Error {
            message: format!("lock rejected for {id}: {why}"),
        });
    }

    fn emit(&self, event: CoordinatorEvent) {
        if self.events.send(event).is_err() {
            debug!("event receiver dropped");
        }
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
