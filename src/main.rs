use std::path::Path;

use avian2d::prelude::*;
use bevy::prelude::*;
use stride::movement::{
    DashRequest, MovementPlugin, MovementSystems, MovementTuning, PlayerSpawn, spawn_player,
    spawn_test_room,
};

const TUNING_PATH: &str = "assets/movement.ron";
/// World gravity in pixels per second squared.
const GRAVITY: f32 = 1800.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Stride".to_string(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::NEG_Y * GRAVITY))
        .add_plugins(MovementPlugin)
        .add_systems(Startup, (setup_camera, spawn_test_room, spawn_demo_player))
        .add_systems(Update, request_dash.before(MovementSystems::Decide))
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Pixel-scale tuning used when the RON file is missing or invalid.
fn fallback_tuning() -> MovementTuning {
    MovementTuning {
        walk_speed: 320.0,
        jump_peak_speed_multiplier: 1.5,
        speed_transition_smoothness: 10.0,
        jump_force: 680.0,
        ground_check_size: Vec2::new(20.0, 6.0),
        fall_multiplier: 2.5,
        low_jump_multiplier: 2.0,
        max_fall_speed: 900.0,
        jump_peak_threshold: 60.0,
        max_jump_charges: 2,
        dash_duration: 0.16,
        dash_speed: 900.0,
    }
}

fn spawn_demo_player(mut commands: Commands, gravity: Res<Gravity>) -> Result {
    let tuning = match MovementTuning::from_ron_file(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            info!("Loaded movement tuning from {}", TUNING_PATH);
            tuning
        }
        Err(e) => {
            warn!("{}, using built-in tuning", e);
            fallback_tuning()
        }
    };

    info!(
        "Jump reach: single={:.0}px, all charges={:.0}px",
        tuning.apex_height(gravity.0),
        tuning.max_reachable_height(gravity.0)
    );

    spawn_player(&mut commands, &tuning, PlayerSpawn::default())?;
    commands.insert_resource(tuning);
    Ok(())
}

/// The library leaves dash unbound; this demo puts it on Left Shift / J.
fn request_dash(keyboard: Res<ButtonInput<KeyCode>>, mut dashes: MessageWriter<DashRequest>) {
    if keyboard.any_just_pressed([KeyCode::ShiftLeft, KeyCode::KeyJ]) {
        dashes.write(DashRequest);
    }
}
