//! Scheduled-removal queue: due-time ordering, cancellation, and drain
//! boundaries.

use bevy::prelude::Entity;
use letterfall::gameplay::lifetime::DespawnQueue;

fn e(i: u32) -> Entity {
    Entity::from_raw(i)
}

#[test]
fn drains_only_entries_at_or_before_now() {
    let mut q = DespawnQueue::default();
    q.schedule(e(1), 1.0);
    q.schedule(e(2), 2.0);
    q.schedule(e(3), 3.0);
    assert_eq!(q.drain_due(0.5), vec![]);
    assert_eq!(q.drain_due(2.0), vec![e(1), e(2)]);
    assert_eq!(q.drain_due(10.0), vec![e(3)]);
    assert!(q.is_empty());
}

#[test]
fn drains_in_due_order_regardless_of_insertion() {
    let mut q = DespawnQueue::default();
    q.schedule(e(5), 5.0);
    q.schedule(e(1), 1.0);
    q.schedule(e(3), 3.0);
    assert_eq!(q.drain_due(10.0), vec![e(1), e(3), e(5)]);
}

#[test]
fn cancelled_entries_are_skipped() {
    let mut q = DespawnQueue::default();
    q.schedule(e(1), 1.0);
    q.schedule(e(2), 1.0);
    q.cancel(e(1));
    assert_eq!(q.drain_due(2.0), vec![e(2)]);
}

#[test]
fn rescheduling_clears_a_pending_cancel() {
    let mut q = DespawnQueue::default();
    q.schedule(e(1), 1.0);
    q.cancel(e(1));
    q.schedule(e(1), 2.0);
    let drained = q.drain_due(5.0);
    assert!(drained.contains(&e(1)));
}

#[test]
fn clear_empties_everything() {
    let mut q = DespawnQueue::default();
    q.schedule(e(1), 1.0);
    q.schedule(e(2), 2.0);
    q.clear();
    assert!(q.is_empty());
    assert_eq!(q.drain_due(100.0), vec![]);
}

#[test]
fn len_tracks_pending_entries() {
    let mut q = DespawnQueue::default();
    assert_eq!(q.len(), 0);
    q.schedule(e(1), 1.0);
    q.schedule(e(2), 2.0);
    assert_eq!(q.len(), 2);
    q.drain_due(1.5);
    assert_eq!(q.len(), 1);
}
