//! Spawning of falling glyph bodies. Each typed character becomes a dynamic
//! ball collider at its lane position with a `Text2d` child for the visual;
//! the body drives the transform and the child just rides along.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;
use std::path::Path;

use crate::core::components::{Glyph, GlyphColors, GlyphVisual};
use crate::core::config::config::GameConfig;
use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::gameplay::audio::{play_click, GameSounds};
use crate::gameplay::lifetime::DespawnQueue;
use crate::gameplay::palette::GlyphStyle;
use crate::interaction::keyboard::route_key_events;

const GLYPH_FONT_PATH: &str = "fonts/OpenSans-Bold.ttf";

/// Request to drop one glyph at a lane offset.
#[derive(Event, Debug, Clone)]
pub struct SpawnGlyph {
    pub text: String,
    pub lane_x: f32,
}

/// Font used for glyph text; falls back to the built-in default when the
/// asset is absent so the demo runs from a bare checkout.
#[derive(Resource, Default)]
pub struct GlyphFont(pub Handle<Font>);

pub struct GlyphSpawnPlugin;

impl Plugin for GlyphSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SpawnGlyph>()
            .init_resource::<GlyphFont>()
            .add_systems(Startup, load_glyph_font)
            .add_systems(
                Update,
                spawn_requested_glyphs
                    .in_set(PrePhysicsSet)
                    .after(route_key_events),
            )
            .add_systems(Update, sync_glyph_text_colors.in_set(PostPhysicsAdjustSet));
    }
}

fn load_glyph_font(asset_server: Res<AssetServer>, mut font: ResMut<GlyphFont>) {
    let disk = Path::new("assets").join(GLYPH_FONT_PATH);
    font.0 = if disk.exists() {
        asset_server.load(GLYPH_FONT_PATH)
    } else {
        warn!(target: "glyphs", "font asset missing ({GLYPH_FONT_PATH}); using default font");
        Handle::default()
    };
}

#[allow(clippy::too_many_arguments)]
fn spawn_requested_glyphs(
    mut commands: Commands,
    mut events: EventReader<SpawnGlyph>,
    cfg: Res<GameConfig>,
    time: Res<Time>,
    style: Res<GlyphStyle>,
    font: Res<GlyphFont>,
    mut queue: ResMut<DespawnQueue>,
    sounds: Option<Res<GameSounds>>,
) {
    let mut rng = rand::thread_rng();
    let g = &cfg.glyphs;
    for ev in events.read() {
        let vx = if g.launch_vx.min < g.launch_vx.max {
            rng.gen_range(g.launch_vx.min..g.launch_vx.max)
        } else {
            g.launch_vx.min
        };
        let colors = GlyphColors {
            fill: style.fill,
            outline: style.outline,
        };
        let root = commands
            .spawn((
                Glyph,
                colors,
                RigidBody::Dynamic,
                Collider::ball(g.radius),
                ColliderMassProperties::Mass(1.0),
                Velocity::linear(Vec2::new(vx, g.launch_vy)),
                Restitution::coefficient(cfg.physics.restitution),
                Friction::coefficient(cfg.physics.friction),
                ActiveEvents::CONTACT_FORCE_EVENTS,
                ContactForceEventThreshold(cfg.audio.impact_force_threshold),
                Transform::from_xyz(ev.lane_x, 0.0, 0.0),
                Visibility::Visible,
                Name::new(format!("Glyph:{}", ev.text)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    GlyphVisual,
                    Text2d::new(ev.text.clone()),
                    TextFont {
                        font: font.0.clone(),
                        font_size: g.font_px,
                        ..default()
                    },
                    TextColor(style.fill),
                    // Text2d rasterizes in pixels; scale back to world units.
                    Transform::from_scale(Vec3::splat(1.0 / g.font_px)),
                ));
            })
            .id();
        queue.schedule(root, time.elapsed_secs_f64() + g.lifetime_secs as f64);
        play_click(&mut commands, sounds.as_deref());
        debug!(target: "glyphs", "spawned {:?} at lane x={}", ev.text, ev.lane_x);
    }
}

/// Pushes page-turn restyles down into the `Text2d` child.
fn sync_glyph_text_colors(
    q_glyphs: Query<(&GlyphColors, &Children), (With<Glyph>, Changed<GlyphColors>)>,
    mut q_text: Query<&mut TextColor, With<GlyphVisual>>,
) {
    for (colors, children) in q_glyphs.iter() {
        for child in children.iter() {
            if let Ok(mut text_color) = q_text.get_mut(child) {
                text_color.0 = colors.fill;
            }
        }
    }
}
