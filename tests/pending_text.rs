//! Replace-not-append input buffer: the gate guards both the buffer write and
//! the spawn decision, and the buffer never grows past one character.

use letterfall::interaction::keyboard::push_pending;

#[test]
fn buffer_is_replaced_not_appended() {
    let mut pending = String::new();
    assert_eq!(push_pending(&mut pending, 25, 'a'), Some('a'));
    assert_eq!(pending, "a");
    assert_eq!(push_pending(&mut pending, 25, 'b'), Some('b'));
    assert_eq!(pending, "b");
}

#[test]
fn gate_never_closes_at_default_limit() {
    let mut pending = String::new();
    for _ in 0..100 {
        assert!(push_pending(&mut pending, 25, 'x').is_some());
        assert_eq!(pending.chars().count(), 1);
    }
}

#[test]
fn closed_gate_blocks_spawn_and_buffer() {
    let mut pending = String::from("z");
    assert_eq!(push_pending(&mut pending, 1, 'a'), None);
    assert_eq!(pending, "z");
}

#[test]
fn zero_limit_rejects_everything() {
    let mut pending = String::new();
    assert_eq!(push_pending(&mut pending, 0, 'a'), None);
    assert!(pending.is_empty());
}
