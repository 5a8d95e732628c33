//! Persistent page backdrop. The fill sweep animates over it; when the sweep
//! finishes, its color is committed here so the page keeps the new color after
//! the pooled sprite recycles.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::config::config::GameConfig;

/// Make this color the persistent page color.
#[derive(Event, Debug, Clone, Copy)]
pub struct CommitBackdrop(pub Color);

#[derive(Component)]
pub struct BackdropSprite;

pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CommitBackdrop>()
            .add_systems(Startup, spawn_backdrop)
            .add_systems(Update, (fit_backdrop_to_view, apply_backdrop_commits));
    }
}

fn spawn_backdrop(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.spawn((
        BackdropSprite,
        Sprite::from_color(Color::WHITE, Vec2::ONE),
        Transform::from_xyz(0.0, cfg.camera.center_y, -5.0),
        Name::new("Backdrop"),
    ));
}

/// Keep the backdrop covering the whole view as the window resizes. Slight
/// overscan hides seams at fractional scale factors.
fn fit_backdrop_to_view(
    cfg: Res<GameConfig>,
    q_window: Query<&Window, With<PrimaryWindow>>,
    mut q_backdrop: Query<&mut Transform, With<BackdropSprite>>,
) {
    let Ok(window) = q_window.single() else {
        return;
    };
    let Ok(mut tf) = q_backdrop.single_mut() else {
        return;
    };
    let aspect = if window.height() > 0.0 {
        window.width() / window.height()
    } else {
        1.0
    };
    let h = cfg.camera.frustum_height * 1.05;
    tf.scale = Vec3::new(h * aspect.max(1.0), h, 1.0);
}

fn apply_backdrop_commits(
    mut commits: EventReader<CommitBackdrop>,
    mut q_backdrop: Query<&mut Sprite, With<BackdropSprite>>,
) {
    // Only the latest commit matters within a frame.
    let Some(CommitBackdrop(color)) = commits.read().last().copied() else {
        return;
    };
    if let Ok(mut sprite) = q_backdrop.single_mut() {
        sprite.color = color.with_alpha(1.0);
    }
}
