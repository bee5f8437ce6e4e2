//! Lock-and-follow scenarios
//!
//! Verify the acquire path, the follow command stream, and immediate release
//! when the target leaves the visible set.

use crate::prelude::Scenario;
use talon_bridge::ActuatorCall;
use talon_core::CoordinatorEvent;

#[tokio::test]
async fn lock_follow_then_target_lost() {
    let mut s = Scenario::new();
    let a = s.fresh_track("A");
    s.poll(vec![a]).await;

    // Lock is accepted with one immediate follow command
    assert!(s.coordinator.lock("A").await);
    assert_eq!(
        s.events(),
        vec![CoordinatorEvent::TrackLocked { id: "A".into() }]
    );
    assert_eq!(s.actuator.send_target_count(), 1);
    assert!(matches!(
        &s.actuator.calls()[0],
        ActuatorCall::SendTarget { origin_track_id, .. } if origin_track_id == "A"
    ));

    // Next snapshot: A is gone. Unlock is immediate, no grace.
    s.poll(vec![]).await;
    assert_eq!(
        s.events(),
        vec![CoordinatorEvent::TargetLost { id: "A".into() }]
    );
    assert_eq!(s.actuator.stop_and_hold_count(), 1);

    let view = s.coordinator.state_view();
    assert_eq!(view.locked_track_id, None);
    assert!(!view.is_tracking);
}

#[tokio::test]
async fn follow_commands_chase_the_moving_target() {
    let mut s = Scenario::new();
    let a = s.fresh_track("A");
    s.poll(vec![a]).await;
    s.coordinator.lock("A").await;

    for step in 1..=3 {
        let mut moved = s.fresh_track("A");
        moved.position.lat += f64::from(step) * 0.001;
        s.poll(vec![moved]).await;
    }

    // One command at lock time plus one per update
    assert_eq!(s.actuator.send_target_count(), 4);
}

#[tokio::test]
async fn lock_rejection_leaves_the_world_untouched() {
    let mut s = Scenario::new();
    s.poll(vec![]).await;

    assert!(!s.coordinator.lock("A").await);
    let events = s.events();
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], CoordinatorEvent::Error { .. }));
    assert!(s.actuator.calls().is_empty());
    assert!(!s.coordinator.state_view().is_tracking);
}
