//! Keyboard column to lane offset mapping.

use letterfall::gameplay::lanes::lane_offset;

#[test]
fn leftmost_and_rightmost_columns() {
    assert_eq!(lane_offset('q'), -5.0);
    assert_eq!(lane_offset('1'), -5.0);
    assert_eq!(lane_offset('p'), 5.0);
    assert_eq!(lane_offset('0'), 5.0);
}

#[test]
fn no_zero_lane_between_halves() {
    // columns jump from -1 to 1; only unmapped characters land at 0
    assert_eq!(lane_offset('5'), -1.0);
    assert_eq!(lane_offset('6'), 1.0);
}

#[test]
fn uppercase_maps_like_lowercase() {
    assert_eq!(lane_offset('Q'), lane_offset('q'));
    assert_eq!(lane_offset('M'), lane_offset('m'));
    assert_eq!(lane_offset('X'), lane_offset('x'));
}

#[test]
fn punctuation_in_columns() {
    assert_eq!(lane_offset(','), 3.0);
    assert_eq!(lane_offset('.'), 4.0);
    assert_eq!(lane_offset('/'), 5.0);
    assert_eq!(lane_offset('['), 5.0);
}

#[test]
fn unmapped_characters_fall_to_center() {
    assert_eq!(lane_offset(' '), 0.0);
    assert_eq!(lane_offset('é'), 0.0);
    assert_eq!(lane_offset('!'), 0.0);
}
