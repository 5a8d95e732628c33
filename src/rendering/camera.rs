//! Camera setup: HDR 2D camera with a fixed-height orthographic view. The
//! view stays `frustum_height` world units tall at any aspect ratio and is
//! centered above the ground so glyphs fall through the middle of the frame.

use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy::window::PrimaryWindow;

use crate::core::config::config::GameConfig;
use crate::rendering::postprocess::EffectChainSettings;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::WHITE))
            .add_systems(Startup, (spawn_camera, cap_pixel_ratio));
    }
}

fn spawn_camera(mut commands: Commands, cfg: Res<GameConfig>, chain: Res<EffectChainSettings>) {
    let msaa = if chain.0.msaa_samples > 1 {
        Msaa::Sample4
    } else {
        Msaa::Off
    };
    commands.spawn((
        Camera2d,
        Camera {
            hdr: true,
            ..default()
        },
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: cfg.camera.frustum_height,
            },
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, cfg.camera.center_y, 0.0),
        msaa,
        Name::new("MainCamera"),
    ));
}

/// Clamp the backing-store resolution on high-dpi displays.
fn cap_pixel_ratio(cfg: Res<GameConfig>, mut q_window: Query<&mut Window, With<PrimaryWindow>>) {
    let Ok(mut window) = q_window.single_mut() else {
        return;
    };
    let ratio = window.resolution.scale_factor();
    if ratio > cfg.camera.max_pixel_ratio {
        window
            .resolution
            .set_scale_factor_override(Some(cfg.camera.max_pixel_ratio));
        info!(target: "camera", "pixel ratio capped {ratio} -> {}", cfg.camera.max_pixel_ratio);
    }
}
