//! Physics world setup: rapier plugin, gravity, fixed-step interpolation with
//! a catch-up cap, and the static ground plane at y = 0.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::config::GameConfig;

pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .add_systems(Startup, (configure_world, spawn_ground));
    }
}

fn configure_world(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut q_rapier: Query<&mut RapierConfiguration>,
) {
    if let Ok(mut rapier) = q_rapier.single_mut() {
        rapier.gravity = Vect::new(0.0, cfg.physics.gravity_y);
    }
    // Fixed 60 Hz step with interpolated rendering; substeps cap the catch-up
    // work on a slow frame so simulated time can fall behind wall time.
    commands.insert_resource(TimestepMode::Interpolated {
        dt: 1.0 / 60.0,
        time_scale: 1.0,
        substeps: cfg.physics.max_substeps,
    });
}

fn spawn_ground(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.spawn((
        RigidBody::Fixed,
        Collider::cuboid(cfg.physics.ground_half_width, 0.5),
        Friction::coefficient(cfg.physics.friction),
        Restitution::coefficient(cfg.physics.restitution),
        Transform::from_xyz(0.0, -0.5, 0.0),
        Name::new("Ground"),
    ));
}
