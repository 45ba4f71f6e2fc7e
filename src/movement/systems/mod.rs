//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod lifecycle;
pub(crate) mod movement;

pub(crate) use collisions::detect_ground;
pub(crate) use input::read_input;
pub(crate) use lifecycle::register_controllers;
pub(crate) use movement::{
    apply_dash_requests, run_decision_tick, run_physics_tick, sync_facing_scale,
};
