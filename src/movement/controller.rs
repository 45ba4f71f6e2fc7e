//! Movement domain: the per-tick movement state machine.
//!
//! The controller owns all movement state and is driven by two explicit
//! callbacks: [`MovementController::on_decision_tick`] once per rendered frame
//! and [`MovementController::on_physics_tick`] once per fixed step. Both take
//! the body's velocity by reference; the physics engine integrates it between
//! ticks.

use bevy::prelude::*;

use crate::movement::dash::Dash;
use crate::movement::jump::{self, JumpCharges};
use crate::movement::locomotion::{Locomotion, sanitize_axis};
use crate::movement::{Facing, Grounded, MovementInput, MovementTuning, TuningError};

/// Everything the controller mutates between ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementState {
    pub facing: Facing,
    pub locomotion: Locomotion,
    pub jumps: JumpCharges,
    pub dash: Dash,
    /// Latest horizontal sample, consumed by physics ticks until the next frame.
    pub horizontal_axis: f32,
    pub jump_held: bool,
}

impl MovementState {
    fn new(tuning: &MovementTuning) -> Self {
        Self {
            facing: Facing::default(),
            locomotion: Locomotion::new(tuning),
            jumps: JumpCharges::full(tuning.max_jump_charges),
            dash: Dash::default(),
            horizontal_axis: 0.0,
            jump_held: false,
        }
    }

    fn update_facing(&mut self) {
        if let Some(facing) = Facing::from_axis(self.horizontal_axis) {
            self.facing = facing;
        }
    }
}

#[derive(Component, Debug, Clone)]
#[require(Grounded)]
pub struct MovementController {
    tuning: MovementTuning,
    state: MovementState,
}

impl MovementController {
    /// Build a controller from validated tuning. The tuning is fixed for the
    /// controller's lifetime.
    pub fn new(tuning: MovementTuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        let state = MovementState::new(&tuning);
        Ok(Self { tuning, state })
    }

    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.state.facing = facing;
        self
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    pub fn facing(&self) -> Facing {
        self.state.facing
    }

    pub(crate) fn set_facing(&mut self, facing: Facing) {
        self.state.facing = facing;
    }

    pub fn current_speed(&self) -> f32 {
        self.state.locomotion.current_speed()
    }

    pub fn jump_charges(&self) -> u32 {
        self.state.jumps.remaining()
    }

    pub fn is_dashing(&self) -> bool {
        self.state.dash.is_active()
    }

    pub fn dash_time_remaining(&self) -> f32 {
        self.state.dash.time_remaining()
    }

    /// Per-frame update: sample input, refill charges on ground contact and
    /// react to jump press/release edges.
    pub fn on_decision_tick(&mut self, input: &MovementInput, grounded: bool, velocity: &mut Vec2) {
        self.state.horizontal_axis = sanitize_axis(input.axis);
        self.state.jump_held = input.jump_held;
        self.state.update_facing();

        if grounded {
            self.state.jumps.refill();
        }

        if input.jump_just_pressed {
            jump::try_jump(&mut self.state.jumps, &self.tuning, velocity);
        }
        if input.jump_just_released {
            jump::release_jump(velocity);
        }
    }

    /// Request a dash. Whoever owns the input mapping decides when to call this.
    pub fn try_dash(&mut self, grounded: bool, velocity: Vec2) -> bool {
        self.state.dash.try_start(&self.tuning, grounded, velocity.x)
    }

    /// Fixed-step update. The dash override is the last write so it always wins.
    pub fn on_physics_tick(&mut self, grounded: bool, gravity: Vec2, velocity: &mut Vec2, dt: f32) {
        if !self.state.dash.is_active() {
            velocity.x = self.state.locomotion.integrate(
                &self.tuning,
                self.state.horizontal_axis,
                grounded,
                velocity.y,
                dt,
            );
        }

        self.state.update_facing();
        jump::shape_gravity(&self.tuning, velocity, gravity, self.state.jump_held, dt);
        jump::clamp_fall_speed(&self.tuning, velocity);
        self.state.dash.advance(&self.tuning, self.state.facing, velocity, dt);
    }
}
