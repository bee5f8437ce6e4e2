//! Staleness grace scenarios
//!
//! Verify the grace window: auto-unlock on expiry, recovery just before it,
//! and absence dominating staleness.

use crate::prelude::Scenario;
use std::time::Duration;
use talon_core::CoordinatorEvent;

#[tokio::test]
async fn stale_past_grace_auto_unlocks() {
    let mut s = Scenario::new();
    let b = s.fresh_track("B");
    s.poll(vec![b]).await;
    s.coordinator.lock("B").await;
    s.events();

    // Sensor stops refreshing B; after the stale timeout the grace starts
    s.clock.advance(Duration::from_secs(6));
    let stale = s.aged_track("B", Duration::from_secs(6));
    s.poll(vec![stale]).await;
    assert_eq!(
        s.events(),
        vec![CoordinatorEvent::TrackStale {
            id: "B".into(),
            grace_secs_remaining: 10,
        }]
    );

    // Still stale when the 10s grace elapses
    s.clock.advance(Duration::from_secs(10));
    s.coordinator.check_grace().await;
    assert_eq!(
        s.events(),
        vec![
            CoordinatorEvent::StaleAutoUnlock { id: "B".into() },
            CoordinatorEvent::TrackUnlocked {
                reason: "grace expired".into(),
            },
        ]
    );
    assert_eq!(s.actuator.stop_and_hold_count(), 1);
    assert!(!s.coordinator.state_view().is_tracking);
}

#[tokio::test]
async fn recovery_one_second_before_expiry_keeps_the_lock() {
    let mut s = Scenario::new();
    let b = s.fresh_track("B");
    s.poll(vec![b]).await;
    s.coordinator.lock("B").await;

    s.clock.advance(Duration::from_secs(6));
    let stale = s.aged_track("B", Duration::from_secs(6));
    s.poll(vec![stale]).await;
    s.events();

    s.clock.advance(Duration::from_secs(9));
    let recovered = s.fresh_track("B");
    s.poll(vec![recovered]).await;
    assert_eq!(
        s.events(),
        vec![CoordinatorEvent::TrackRecovered { id: "B".into() }]
    );

    // The old deadline never fires
    s.clock.advance(Duration::from_secs(120));
    s.coordinator.check_grace().await;
    assert!(s.events().is_empty());
    assert!(s.coordinator.state_view().is_tracking);
}

#[tokio::test]
async fn absence_while_stale_wins_over_the_grace_timer() {
    let mut s = Scenario::new();
    let b = s.fresh_track("B");
    s.poll(vec![b]).await;
    s.coordinator.lock("B").await;

    s.clock.advance(Duration::from_secs(6));
    let stale = s.aged_track("B", Duration::from_secs(6));
    s.poll(vec![stale]).await;
    s.events();

    // Stale and then absent in one update cycle: TargetLost, never
    // StaleAutoUnlock
    s.poll(vec![]).await;
    assert_eq!(
        s.events(),
        vec![CoordinatorEvent::TargetLost { id: "B".into() }]
    );

    s.clock.advance(Duration::from_secs(120));
    s.coordinator.check_grace().await;
    assert!(s.events().is_empty());
}
