//! Shared harness for coordinator scenarios

use std::time::Duration;
use talon_bridge::{FakeActuator, TrackSnapshot};
use talon_core::{
    Clock, CoordinatorConfig, CoordinatorEvent, FakeClock, HealthSnapshot, Position, TrackedObject,
};
use talon_coordinator::LockCoordinator;
use tokio::sync::mpsc;

pub struct Scenario {
    pub coordinator: LockCoordinator<FakeActuator, FakeClock>,
    pub actuator: FakeActuator,
    pub clock: FakeClock,
    events: mpsc::UnboundedReceiver<CoordinatorEvent>,
}

impl Scenario {
    pub fn new() -> Self {
        let config = CoordinatorConfig {
            stale_grace: Duration::from_secs(10),
            stale_timeout: Duration::from_secs(5),
            ..Default::default()
        };
        let actuator = FakeActuator::new();
        let clock = FakeClock::new();
        let (tx, events) = mpsc::unbounded_channel();
        let coordinator =
            LockCoordinator::new(config, actuator.clone(), clock.clone(), tx).unwrap();
        Self {
            coordinator,
            actuator,
            clock,
            events,
        }
    }

    /// A track freshly updated at the current fake time
    pub fn fresh_track(&self, id: &str) -> TrackedObject {
        TrackedObject::new(
            id,
            Position {
                lat: 35.68,
                lon: 139.69,
                alt_m: 80.0,
            },
            self.clock.now(),
        )
    }

    /// A track whose last sensor update is `age` in the past
    pub fn aged_track(&self, id: &str, age: Duration) -> TrackedObject {
        let mut track = self.fresh_track(id);
        track.last_update = self.clock.now() - age;
        track
    }

    pub async fn poll(&mut self, tracks: Vec<TrackedObject>) {
        self.coordinator
            .update_snapshot(Ok(TrackSnapshot {
                tracks,
                connected: true,
            }))
            .await;
    }

    pub async fn battery(&mut self, percent: u8) {
        self.coordinator
            .update_health(HealthSnapshot {
                connected: true,
                battery_percent: percent,
            })
            .await;
    }

    pub fn events(&mut self) -> Vec<CoordinatorEvent> {
        let mut out = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            out.push(event);
        }
        out
    }
}
