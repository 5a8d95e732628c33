//! Palette cycle invariants: a single advancing index, wraparound, and a
//! read that never mutates.

use bevy::prelude::*;
use letterfall::gameplay::palette::{ColorCycle, PALETTE};

#[test]
fn starts_at_first_palette_entry() {
    let cycle = ColorCycle::default();
    assert_eq!(cycle.index(), 0);
    assert_eq!(cycle.current(), PALETTE[0]);
}

#[test]
fn n_advances_land_on_index_n_mod_len() {
    let mut cycle = ColorCycle::default();
    let len = cycle.len();
    for n in 1..=25 {
        let color = cycle.advance();
        assert_eq!(cycle.index(), n % len, "index after {n} advances");
        assert_eq!(color, PALETTE[n % len]);
    }
}

#[test]
fn current_does_not_mutate() {
    let mut cycle = ColorCycle::default();
    cycle.advance();
    let before = cycle.index();
    for _ in 0..10 {
        let _ = cycle.current();
    }
    assert_eq!(cycle.index(), before);
}

#[test]
fn wraps_exactly_at_len() {
    let mut cycle = ColorCycle::new(vec![
        Color::srgb(1.0, 0.0, 0.0),
        Color::srgb(0.0, 1.0, 0.0),
        Color::srgb(0.0, 0.0, 1.0),
    ]);
    for _ in 0..3 {
        cycle.advance();
    }
    assert_eq!(cycle.index(), 0);
}
