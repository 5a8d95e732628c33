use bevy::prelude::*;

/// Marker for a live glyph/body pair root (holds the rigid body and collider;
/// the `Text2d` visual is a child and follows the body transform).
#[derive(Component)]
pub struct Glyph;

/// Fill/outline color pair carried by every glyph and rewritten on each page
/// turn. bevy_text renders no outline, so only the fill reaches the screen;
/// the outline member still participates in the reset so palette semantics
/// stay observable.
#[derive(Component, Debug, Copy, Clone, PartialEq)]
pub struct GlyphColors {
    pub fill: Color,
    pub outline: Color,
}

/// Tag for the `Text2d` child of a glyph root.
#[derive(Component)]
pub struct GlyphVisual;
