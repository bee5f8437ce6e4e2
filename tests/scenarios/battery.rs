//! Battery interlock scenarios

use crate::prelude::Scenario;
use talon_core::CoordinatorEvent;

#[tokio::test]
async fn decline_warns_once_then_force_unlocks() {
    let mut s = Scenario::new();
    let a = s.fresh_track("A");
    s.poll(vec![a]).await;
    s.coordinator.lock("A").await;
    s.events();

    s.battery(25).await;
    assert!(s.events().is_empty());

    s.battery(18).await;
    assert_eq!(
        s.events(),
        vec![CoordinatorEvent::LowBattery { percent: 18 }]
    );

    s.battery(9).await;
    assert_eq!(
        s.events(),
        vec![
            CoordinatorEvent::CriticalBattery { percent: 9 },
            CoordinatorEvent::TrackUnlocked {
                reason: "critical battery".into(),
            },
        ]
    );
    assert_eq!(s.actuator.stop_and_hold_count(), 1);
    assert!(!s.coordinator.state_view().is_tracking);
}

#[tokio::test]
async fn critical_without_a_lock_only_alerts() {
    let mut s = Scenario::new();

    s.battery(9).await;
    assert_eq!(
        s.events(),
        vec![
            CoordinatorEvent::LowBattery { percent: 9 },
            CoordinatorEvent::CriticalBattery { percent: 9 },
        ]
    );
    assert_eq!(s.actuator.stop_and_hold_count(), 0);
}

#[tokio::test]
async fn repeated_critical_readings_stay_latched() {
    let mut s = Scenario::new();

    s.battery(9).await;
    s.events();
    s.battery(9).await;
    s.battery(7).await;
    assert!(s.events().is_empty());

    // Clears above the threshold, then crosses again
    s.battery(30).await;
    s.battery(10).await;
    let events = s.events();
    assert!(events.contains(&CoordinatorEvent::LowBattery { percent: 10 }));
    assert!(events.contains(&CoordinatorEvent::CriticalBattery { percent: 10 }));
}
