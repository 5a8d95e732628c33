//! Reusable billboard effect sprites ("fill" and "ripple") and the small
//! tween systems that drive them. The pool is fixed-size and cycled
//! round-robin: entries may be handed out again while a previous animation is
//! still in flight; reuse resets scale and alpha first and the last writer
//! wins.

use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::core::config::config::GameConfig;
use crate::core::system::system_order::PostPhysicsAdjustSet;
use crate::rendering::background::CommitBackdrop;

pub const SPRITE_TEXTURE_SIZE: u32 = 64;

/// Effect sprites park far below the view at scale zero between uses.
pub const SPRITE_OFF_POSITION: Vec3 = Vec3::new(0.0, -1000.0, 0.0);
pub const FILL_POSITION: Vec3 = Vec3::new(0.0, 0.0, -2.0);
pub const RIPPLE_POSITION: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// Strict round-robin cursor over a fixed-size pool.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    len: usize,
    cursor: usize,
}

impl RoundRobin {
    /// Panics when `len` is zero; pools are non-empty by construction.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "pool must be non-empty");
        Self { len, cursor: 0 }
    }

    /// Index at the cursor; the cursor then advances with wraparound.
    pub fn next(&mut self) -> usize {
        let i = self.cursor;
        self.cursor = (self.cursor + 1) % self.len;
        i
    }
}

/// Fixed pool of effect sprite entities cycled round-robin. No in-use
/// tracking: when every entry is conceptually busy the oldest one is
/// forcibly reused rather than blocking or erroring.
#[derive(Resource)]
pub struct EffectPool {
    entities: Vec<Entity>,
    cursor: RoundRobin,
}

impl EffectPool {
    pub fn new(entities: Vec<Entity>) -> Self {
        let cursor = RoundRobin::new(entities.len());
        Self { entities, cursor }
    }

    pub fn acquire_next(&mut self) -> Entity {
        self.entities[self.cursor.next()]
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[derive(Component)]
pub struct EffectSprite;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    ExpoOut,
}

/// What happens when a scale tween finishes (the scale always snaps back to
/// zero so the entry is clean for reuse).
#[derive(Debug, Clone, Copy)]
pub enum TweenFinish {
    ResetScale,
    /// Also commit this color as the persistent backdrop color.
    CommitBackdrop(Color),
}

/// Scale tween running from the sprite's scale at trigger time.
#[derive(Component, Debug)]
pub struct ScaleTween {
    pub from: Vec2,
    pub to: Vec2,
    pub duration: f32,
    pub elapsed: f32,
    pub easing: Easing,
    pub on_complete: TweenFinish,
}

/// Delayed alpha fade-out on the sprite color.
#[derive(Component, Debug)]
pub struct AlphaFade {
    pub delay: f32,
    pub duration: f32,
    pub elapsed: f32,
    pub from: f32,
}

pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        Easing::Linear => t,
        // expo.out, pinned to exactly 1 at t = 1
        Easing::ExpoOut => {
            if t >= 1.0 {
                1.0
            } else {
                1.0 - 2f32.powf(-10.0 * t)
            }
        }
    }
}

pub struct EffectPoolPlugin;

impl Plugin for EffectPoolPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_effect_pool).add_systems(
            Update,
            (advance_scale_tweens, advance_alpha_fades).in_set(PostPhysicsAdjustSet),
        );
    }
}

/// Radial-falloff disc generated in code; stands in for the demo's circle
/// sprite texture so the pool needs no binary asset on disk.
fn circle_sprite_image(size: u32) -> Image {
    let mut data = vec![0u8; (size * size * 4) as usize];
    let center = (size as f32 - 1.0) * 0.5;
    for y in 0..size {
        for x in 0..size {
            let dx = (x as f32 - center) / center;
            let dy = (y as f32 - center) / center;
            let d = (dx * dx + dy * dy).sqrt();
            // solid disc with a narrow soft rim
            let alpha = ((1.0 - d) * 8.0).clamp(0.0, 1.0);
            let i = ((y * size + x) * 4) as usize;
            data[i] = 255;
            data[i + 1] = 255;
            data[i + 2] = 255;
            data[i + 3] = (alpha * 255.0) as u8;
        }
    }
    Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

fn spawn_effect_pool(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    cfg: Res<GameConfig>,
) {
    let texture = images.add(circle_sprite_image(SPRITE_TEXTURE_SIZE));
    let count = cfg.page_turn.pool_size.max(1);
    let mut entities = Vec::with_capacity(count);
    for i in 0..count {
        let entity = commands
            .spawn((
                Sprite {
                    image: texture.clone(),
                    custom_size: Some(Vec2::ONE),
                    ..default()
                },
                Transform {
                    translation: SPRITE_OFF_POSITION,
                    scale: Vec3::new(0.0, 0.0, 1.0),
                    ..default()
                },
                Visibility::Visible,
                EffectSprite,
                Name::new(format!("EffectSprite:{i}")),
            ))
            .id();
        entities.push(entity);
    }
    commands.insert_resource(EffectPool::new(entities));
    info!(target: "effects", "effect sprite pool ready ({count} entries)");
}

fn advance_scale_tweens(
    time: Res<Time>,
    mut commands: Commands,
    mut commits: EventWriter<CommitBackdrop>,
    mut q_tweens: Query<(Entity, &mut Transform, &mut ScaleTween)>,
) {
    for (entity, mut tf, mut tween) in q_tweens.iter_mut() {
        tween.elapsed += time.delta_secs();
        let t = if tween.duration <= 0.0 {
            1.0
        } else {
            (tween.elapsed / tween.duration).min(1.0)
        };
        let scale = tween.from.lerp(tween.to, ease(tween.easing, t));
        tf.scale = Vec3::new(scale.x, scale.y, 1.0);
        if t >= 1.0 {
            // snap back to zero so the entry is clean when the pool recycles it
            tf.scale = Vec3::new(0.0, 0.0, 1.0);
            if let TweenFinish::CommitBackdrop(color) = tween.on_complete {
                commits.write(CommitBackdrop(color));
            }
            commands.entity(entity).remove::<ScaleTween>();
        }
    }
}

fn advance_alpha_fades(
    time: Res<Time>,
    mut commands: Commands,
    mut q_fades: Query<(Entity, &mut Sprite, &mut AlphaFade)>,
) {
    for (entity, mut sprite, mut fade) in q_fades.iter_mut() {
        fade.elapsed += time.delta_secs();
        if fade.elapsed < fade.delay {
            continue;
        }
        let t = if fade.duration <= 0.0 {
            1.0
        } else {
            ((fade.elapsed - fade.delay) / fade.duration).min(1.0)
        };
        let alpha = fade.from * (1.0 - ease(Easing::ExpoOut, t));
        sprite.color.set_alpha(alpha);
        if t >= 1.0 {
            commands.entity(entity).remove::<AlphaFade>();
        }
    }
}
