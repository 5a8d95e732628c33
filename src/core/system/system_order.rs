//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages (high-level):
//! 1. PrePhysics (input routing, glyph spawning, page-turn trigger)
//! 2. Rapier (handled by plugin)
//! 3. PostPhysicsAdjust (lifetime expiry, tweens, color sync)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // spawning and triggers applied before the physics step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet; // lightweight bookkeeping after physics
