//! Sound effects: a keypress click and a collision thud. Playback entities
//! despawn themselves when finished. Missing sound assets degrade to silence
//! rather than failing startup.

use bevy::audio::{PlaybackSettings, Volume};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;
use std::path::Path;

use crate::core::components::Glyph;
use crate::core::config::config::GameConfig;
use crate::core::system::system_order::PostPhysicsAdjustSet;

const CLICK_SOUND_PATH: &str = "sounds/typeclick.ogg";
const IMPACT_SOUND_PATH: &str = "sounds/hit.ogg";

#[derive(Resource)]
pub struct GameSounds {
    pub click: Handle<AudioSource>,
    pub impact: Handle<AudioSource>,
}

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sounds)
            .add_systems(Update, impact_sounds.in_set(PostPhysicsAdjustSet));
    }
}

fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>, cfg: Res<GameConfig>) {
    if !cfg.audio.enabled {
        info!(target: "audio", "audio disabled by config");
        return;
    }
    let assets_root = Path::new("assets");
    if !assets_root.join(CLICK_SOUND_PATH).exists() || !assets_root.join(IMPACT_SOUND_PATH).exists()
    {
        warn!(target: "audio", "sound assets missing; running silent");
        return;
    }
    commands.insert_resource(GameSounds {
        click: asset_server.load(CLICK_SOUND_PATH),
        impact: asset_server.load(IMPACT_SOUND_PATH),
    });
}

/// Fire-and-forget click on glyph spawn. A no-op when sounds are unavailable.
pub fn play_click(commands: &mut Commands, sounds: Option<&GameSounds>) {
    if let Some(sounds) = sounds {
        commands.spawn((
            AudioPlayer::new(sounds.click.clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}

/// Thud on hard contacts. Rapier already filters by the per-collider force
/// threshold, so every event received here is loud enough to voice.
fn impact_sounds(
    mut commands: Commands,
    mut contacts: EventReader<ContactForceEvent>,
    q_glyphs: Query<(), With<Glyph>>,
    sounds: Option<Res<GameSounds>>,
) {
    let Some(sounds) = sounds else {
        contacts.clear();
        return;
    };
    let mut rng = rand::thread_rng();
    for ev in contacts.read() {
        if !q_glyphs.contains(ev.collider1) && !q_glyphs.contains(ev.collider2) {
            continue;
        }
        commands.spawn((
            AudioPlayer::new(sounds.impact.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(rng.gen_range(0.3..0.8))),
        ));
    }
}
