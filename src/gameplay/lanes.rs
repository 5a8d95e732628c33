//! Fixed keyboard-to-lane mapping: the keys of each physical column group map
//! to one of ten integer x offsets. Anything not listed lands in the center.

const LANES: [(&str, f32); 10] = [
    ("1qazQAZ", -5.0),
    ("2wsxWSX", -4.0),
    ("3edcEDC", -3.0),
    ("4rfvRFV", -2.0),
    ("5tgbTGB", -1.0),
    ("6yhnYHN", 1.0),
    ("7ujmUJM", 2.0),
    ("8ik,IK<", 3.0),
    ("9ol.OL>", 4.0),
    ("0p;/P:?[]", 5.0),
];

/// Horizontal spawn offset for a typed character.
pub fn lane_offset(c: char) -> f32 {
    LANES
        .iter()
        .find(|(keys, _)| keys.contains(c))
        .map(|(_, x)| *x)
        .unwrap_or(0.0)
}
