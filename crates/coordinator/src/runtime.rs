// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Owner task and feed plumbing for the coordinator
//!
//! One task owns the `LockCoordinator` and serializes every transition. The
//! snapshot poll loop, the actuator health stream, the grace deadline, and
//! user commands each push into this task through channels; none of them
//! touch coordinator state directly.

use crate::coordinator::LockCoordinator;
use crate::error::CoordinatorError;
use crate::state::StateView;
use std::time::Duration;
use talon_bridge::{ActuatorBridge, SnapshotError, TrackSnapshot, TrackSnapshotSource};
use talon_core::{Clock, CoordinatorConfig, CoordinatorEvent};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

/// Receiver for the coordinator's event stream
pub type EventReceiver = mpsc::UnboundedReceiver<CoordinatorEvent>;

type SnapshotResult = Result<TrackSnapshot, SnapshotError>;

/// Commands accepted by the owner task
#[derive(Debug)]
pub enum Command {
    Lock {
        id: String,
        reply: oneshot::Sender<bool>,
    },
    Unlock {
        reason: String,
    },
    State {
        reply: oneshot::Sender<StateView>,
    },
    Shutdown {
        reply: oneshot::Sender<()>,
    },
}

/// Cloneable handle for driving a running coordinator
#[derive(Clone)]
pub struct CoordinatorHandle {
    commands: mpsc::Sender<Command>,
}

impl CoordinatorHandle {
    /// Request a lock on a track; resolves once the owner task decided
    pub async fn lock(&self, id: impl Into<String>) -> Result<bool, CoordinatorError> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(Command::Lock {
                id: id.into(),
                reply,
            })
            .await
            .map_err(|_| CoordinatorError::Stopped)?;
        rx.await.map_err(|_| CoordinatorError::Stopped)
    }

    /// Request an unlock; a no-op if nothing is locked
    pub async fn unlock(&self, reason: impl Into<String>) -> Result<(), CoordinatorError> {
        self.commands
            .send(Command::Unlock {
                reason: reason.into(),
            })
            .await
            .map_err(|_| CoordinatorError::Stopped)
    }

    /// Query the current lock state
    pub async fn state(&self) -> Result<StateView, CoordinatorError> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(Command::State { reply })
            .await
            .map_err(|_| CoordinatorError::Stopped)?;
        rx.await.map_err(|_| CoordinatorError::Stopped)
    }

    /// Shut down the coordinator; resolves after any held lock is released
    pub async fn shutdown(&self) -> Result<(), CoordinatorError> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(Command::Shutdown { reply })
            .await
            .map_err(|_| CoordinatorError::Stopped)?;
        rx.await.map_err(|_| CoordinatorError::Stopped)
    }
}

/// A running coordinator: its handle and event stream
pub struct CoordinatorRuntime {
    pub handle: CoordinatorHandle,
    pub events: EventReceiver,
}

/// Spawn the owner task and the snapshot poll loop
pub fn spawn<A, S, C>(
    config: CoordinatorConfig,
    actuator: A,
    source: S,
    clock: C,
) -> Result<CoordinatorRuntime, CoordinatorError>
where
    A: ActuatorBridge,
    S: TrackSnapshotSource,
    C: Clock,
{
    let (event_tx, events) = mpsc::unbounded_channel();
    let (cmd_tx, cmd_rx) = mpsc::channel(32);
    let (snap_tx, snap_rx) = mpsc::channel(8);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let health_rx = actuator.subscribe_health();
    let poll_interval = config.poll_interval;
    let coordinator = LockCoordinator::new(config, actuator, clock, event_tx)?;

    tokio::spawn(poll_loop(source, poll_interval, snap_tx, shutdown_rx));
    tokio::spawn(owner_loop(
        coordinator,
        cmd_rx,
        snap_rx,
        health_rx,
        shutdown_tx,
    ));

    Ok(CoordinatorRuntime {
        handle: CoordinatorHandle { commands: cmd_tx },
        events,
    })
}

/// The owner loop: the only place coordinator state is mutated
async fn owner_loop<A: ActuatorBridge, C: Clock>(
    mut coordinator: LockCoordinator<A, C>,
    mut commands: mpsc::Receiver<Command>,
    mut snapshots: mpsc::Receiver<SnapshotResult>,
    mut health: mpsc::UnboundedReceiver<talon_core::HealthSnapshot>,
    shutdown: watch::Sender<bool>,
) {
    let mut shutdown_reply = None;

    loop {
        let deadline = coordinator
            .next_grace_deadline()
            .map(tokio::time::Instant::from_std);

        tokio::select! {
            cmd = commands.recv() => match cmd {
                Some(Command::Lock { id, reply }) => {
                    let accepted = coordinator.lock(&id).await;
                    let _ = reply.send(accepted);
                }
                Some(Command::Unlock { reason }) => coordinator.unlock(&reason).await,
                Some(Command::State { reply }) => {
                    let _ = reply.send(coordinator.state_view());
                }
                Some(Command::Shutdown { reply }) => {
                    shutdown_reply = Some(reply);
                    break;
                }
                None => break,
            },
            Some(result) = snapshots.recv() => coordinator.update_snapshot(result).await,
            Some(snapshot) = health.recv() => coordinator.update_health(snapshot).await,
            _ = grace_wait(deadline) => coordinator.check_grace().await,
        }
    }

    let _ = shutdown.send(true);
    coordinator.shutdown().await;
    if let Some(reply) = shutdown_reply {
        let _ = reply.send(());
    }
    debug!("owner loop exited");
}

/// Sleep until the grace deadline, or forever when none is armed
async fn grace_wait(deadline: Option<tokio::time::Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}

/// Fetch snapshots at the configured interval and forward them to the owner
async fn poll_loop<S: TrackSnapshotSource>(
    source: S,
    interval: Duration,
    tx: mpsc::Sender<SnapshotResult>,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        let result = source.fetch().await;
        if tx.send(result).await.is_err() {
            break;
        }
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = shutdown.changed() => break,
        }
    }
    info!("snapshot poll loop exited");
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
