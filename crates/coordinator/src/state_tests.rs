// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the lock slot record

use super::*;

#[test]
fn empty_slot_is_unlocked() {
    let slot = LockSlot::new();
    assert_eq!(slot.phase(), LockPhase::Unlocked);
    let view = slot.view();
    assert_eq!(view.locked_track_id, None);
    assert!(!view.is_tracking);
    assert!(!view.is_stale);
}

#[test]
fn acquire_replaces_any_previous_lock() {
    let now = Instant::now();
    let mut slot = LockSlot::new();
    slot.acquire("a", now);
    slot.acquire("b", now);
    assert!(slot.is_locked_to("b"));
    assert!(!slot.is_locked_to("a"));
}

#[test]
fn mark_stale_then_active_round_trips_phase() {
    let now = Instant::now();
    let mut slot = LockSlot::new();
    slot.acquire("a", now);
    assert_eq!(slot.phase(), LockPhase::LockedActive);

    assert!(slot.mark_stale(now));
    assert_eq!(slot.phase(), LockPhase::LockedStale);
    assert!(slot.view().is_stale);

    assert!(slot.mark_active());
    assert_eq!(slot.phase(), LockPhase::LockedActive);
}

#[test]
fn mark_stale_is_idempotent() {
    let now = Instant::now();
    let mut slot = LockSlot::new();
    slot.acquire("a", now);
    assert!(slot.mark_stale(now));
    assert!(!slot.mark_stale(now + std::time::Duration::from_secs(1)));
    // First stale timestamp is preserved
    assert_eq!(slot.current().unwrap().stale_since, Some(now));
}

#[test]
fn mark_on_empty_slot_is_a_no_op() {
    let mut slot = LockSlot::new();
    assert!(!slot.mark_stale(Instant::now()));
    assert!(!slot.mark_active());
}

#[test]
fn take_clears_the_slot() {
    let mut slot = LockSlot::new();
    slot.acquire("a", Instant::now());
    let released = slot.take().unwrap();
    assert_eq!(released.id, "a");
    assert_eq!(slot.phase(), LockPhase::Unlocked);
    assert!(slot.take().is_none());
}
