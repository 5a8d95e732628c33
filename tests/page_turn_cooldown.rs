//! Cooldown gate timing: accept, reject inside the window, re-accept after.

use letterfall::gameplay::page_turn::PageTurnCooldown;

const COOLDOWN: f64 = 0.08;

#[test]
fn first_trigger_accepted() {
    let mut gate = PageTurnCooldown::default();
    assert!(gate.try_trigger(0.0, COOLDOWN));
}

#[test]
fn rejects_inside_window() {
    let mut gate = PageTurnCooldown::default();
    assert!(gate.try_trigger(10.0, COOLDOWN));
    assert!(!gate.try_trigger(10.04, COOLDOWN));
    assert!(!gate.try_trigger(10.079, COOLDOWN));
}

#[test]
fn accepts_after_window_and_rearms() {
    let mut gate = PageTurnCooldown::default();
    assert!(gate.try_trigger(10.0, COOLDOWN));
    assert!(gate.try_trigger(10.09, COOLDOWN));
    // the accepted trigger re-armed from its own timestamp
    assert!(!gate.try_trigger(10.16, COOLDOWN));
    assert!(gate.try_trigger(10.17, COOLDOWN));
}

#[test]
fn boundary_instant_is_accepted() {
    let mut gate = PageTurnCooldown::default();
    assert!(gate.try_trigger(0.0, COOLDOWN));
    assert!(gate.try_trigger(COOLDOWN, COOLDOWN));
}

#[test]
fn zero_cooldown_never_rejects() {
    let mut gate = PageTurnCooldown::default();
    for i in 0..5 {
        assert!(gate.try_trigger(i as f64 * 1e-4, 0.0));
    }
}
