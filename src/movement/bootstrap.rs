//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    FacingScale, GameLayer, GroundSensor, MovementController, MovementTuning, Player,
    TuningError,
};

/// Body dimensions and placement for a spawned player.
#[derive(Debug, Clone, Copy)]
pub struct PlayerSpawn {
    pub position: Vec2,
    pub size: Vec2,
    /// Magnitude of the mirrored visual's horizontal scale.
    pub visual_scale: f32,
    pub color: Color,
}

impl Default for PlayerSpawn {
    fn default() -> Self {
        Self {
            position: Vec2::new(0.0, 100.0),
            size: Vec2::new(24.0, 48.0),
            visual_scale: 1.0,
            color: Color::srgb(0.9, 0.9, 0.9),
        }
    }
}

/// Spawn a controlled player: a dynamic body carrying the controller and a
/// ground sensor at its feet, plus a mirrored sprite child. Fails before
/// spawning anything if the tuning is unusable.
pub fn spawn_player(
    commands: &mut Commands,
    tuning: &MovementTuning,
    spawn: PlayerSpawn,
) -> Result<Entity, TuningError> {
    let controller = MovementController::new(tuning.clone())?;
    let feet = Vec2::new(0.0, -spawn.size.y / 2.0);

    let player = commands
        .spawn((
            // Identity & Movement
            (Player, controller, GroundSensor::new(feet)),
            Transform::from_translation(spawn.position.extend(0.0)),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(spawn.size.x, spawn.size.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .id();

    let visual = commands
        .spawn((
            FacingScale(spawn.visual_scale),
            Sprite {
                color: spawn.color,
                custom_size: Some(spawn.size),
                ..default()
            },
            Transform::from_scale(Vec3::new(spawn.visual_scale, spawn.visual_scale, 1.0)),
        ))
        .id();
    commands.entity(player).add_child(visual);

    Ok(player)
}
