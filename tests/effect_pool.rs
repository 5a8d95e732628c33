//! Round-robin pool cursor: every entry is handed out exactly once per lap,
//! in order, before any entry repeats.

use letterfall::gameplay::effects::RoundRobin;

#[test]
fn hands_out_indices_in_order() {
    let mut rr = RoundRobin::new(5);
    let first_lap: Vec<usize> = (0..5).map(|_| rr.next()).collect();
    assert_eq!(first_lap, vec![0, 1, 2, 3, 4]);
}

#[test]
fn wraps_after_full_lap() {
    let mut rr = RoundRobin::new(3);
    for _ in 0..3 {
        rr.next();
    }
    assert_eq!(rr.next(), 0);
    assert_eq!(rr.next(), 1);
}

#[test]
fn single_entry_pool_always_returns_zero() {
    let mut rr = RoundRobin::new(1);
    for _ in 0..4 {
        assert_eq!(rr.next(), 0);
    }
}

#[test]
fn no_repeat_within_a_lap() {
    let mut rr = RoundRobin::new(7);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..7 {
        assert!(seen.insert(rr.next()), "entry repeated before lap finished");
    }
}

#[test]
#[should_panic]
fn empty_pool_rejected() {
    let _ = RoundRobin::new(0);
}
