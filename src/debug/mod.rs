//! Debug module: feature gated stats overlay and effect hotkeys.
//! Built only when compiled with `--features debug` (on by default).

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod overlay;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
use crate::core::system::system_order::PostPhysicsAdjustSet;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
#[derive(Resource, Debug, Default, Clone)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub glyph_count: usize,
}

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use keys::debug_key_input_system;
        #[cfg(not(test))]
        use overlay::{debug_overlay_spawn, debug_overlay_update};
        use stats::debug_stats_collect_system;

        app.init_resource::<DebugStats>().add_systems(
            Update,
            (debug_stats_collect_system, debug_key_input_system).in_set(PostPhysicsAdjustSet),
        );
        #[cfg(not(test))]
        {
            app.add_systems(Startup, debug_overlay_spawn).add_systems(
                Update,
                debug_overlay_update
                    .after(debug_stats_collect_system)
                    .in_set(PostPhysicsAdjustSet),
            );
        }
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
