//! Movement domain: a small room for trying the controller out.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};

fn spawn_ground_block(commands: &mut Commands, color: Color, size: Vec2, position: Vec2) {
    commands.spawn((
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

pub fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor
    spawn_ground_block(
        &mut commands,
        ground_color,
        Vec2::new(800.0, 40.0),
        Vec2::new(0.0, -200.0),
    );

    // Platform 1 - left side
    spawn_ground_block(
        &mut commands,
        platform_color,
        Vec2::new(150.0, 20.0),
        Vec2::new(-250.0, -50.0),
    );

    // Platform 2 - right side, higher
    spawn_ground_block(
        &mut commands,
        platform_color,
        Vec2::new(150.0, 20.0),
        Vec2::new(250.0, 50.0),
    );

    // Platform 3 - center, highest
    spawn_ground_block(
        &mut commands,
        platform_color,
        Vec2::new(120.0, 20.0),
        Vec2::new(0.0, 150.0),
    );
}
