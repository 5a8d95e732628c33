use bevy::prelude::*;

use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::debug::DebugPlugin;
use crate::gameplay::audio::GameAudioPlugin;
use crate::gameplay::effects::EffectPoolPlugin;
use crate::gameplay::glyph_spawn::GlyphSpawnPlugin;
use crate::gameplay::lifetime::GlyphLifetimePlugin;
use crate::gameplay::page_turn::PageTurnPlugin;
use crate::interaction::keyboard::KeyboardPlugin;
use crate::physics::setup::PhysicsSetupPlugin;
use crate::rendering::background::BackgroundPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::postprocess::EffectChainPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
        )
        .add_plugins((
            CameraPlugin,
            BackgroundPlugin,
            PhysicsSetupPlugin,
            KeyboardPlugin,
            GlyphSpawnPlugin,
            GlyphLifetimePlugin,
            PageTurnPlugin,
            EffectPoolPlugin,
            EffectChainPlugin,
            GameAudioPlugin,
            DebugPlugin,
        ));
    }
}
