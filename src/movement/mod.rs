//! Movement domain: run/jump/dash controller for a 2D platformer body.
//!
//! The controller is split into a per-frame decision tick (input, facing,
//! jump charges and jump edges) and a fixed-step physics tick (speed
//! smoothing, gravity shaping, fall clamp and dash override).

mod bootstrap;
mod components;
mod controller;
mod dash;
mod dev;
mod error;
mod events;
mod jump;
mod locomotion;
mod resources;
mod sensor;
mod systems;

pub use bootstrap::{PlayerSpawn, spawn_player};
pub use components::{Facing, FacingScale, GameLayer, Ground, GroundSensor, Grounded, Player};
pub use controller::{MovementController, MovementState};
pub use dash::{AIR_DASH_MIN_SPEED, Dash};
pub use dev::spawn_test_room;
pub use error::{ControllerError, TuningError};
pub use events::DashRequest;
pub use jump::{JumpCharges, SHORT_HOP_FACTOR};
pub use locomotion::Locomotion;
pub use resources::{ActiveController, MovementInput, MovementTuning};
pub use sensor::{GroundProbe, SpatialGroundProbe};

use bevy::prelude::*;

use crate::movement::systems::{
    apply_dash_requests, detect_ground, read_input, register_controllers, run_decision_tick,
    run_physics_tick, sync_facing_scale,
};

/// Ordering handles for code that feeds or observes the controller.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementSystems {
    Register,
    Input,
    Sense,
    Decide,
    Physics,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<ActiveController>()
            .add_message::<DashRequest>()
            .add_systems(
                PreUpdate,
                register_controllers.in_set(MovementSystems::Register),
            )
            .configure_sets(
                Update,
                (
                    MovementSystems::Input,
                    MovementSystems::Sense,
                    MovementSystems::Decide,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    read_input.in_set(MovementSystems::Input),
                    detect_ground.in_set(MovementSystems::Sense),
                    (run_decision_tick, apply_dash_requests)
                        .chain()
                        .in_set(MovementSystems::Decide),
                ),
            )
            .configure_sets(
                FixedUpdate,
                (MovementSystems::Sense, MovementSystems::Physics).chain(),
            )
            .add_systems(
                FixedUpdate,
                (
                    detect_ground.in_set(MovementSystems::Sense),
                    (run_physics_tick, sync_facing_scale)
                        .chain()
                        .in_set(MovementSystems::Physics),
                ),
            );
    }
}
