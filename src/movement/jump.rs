//! Movement domain: jump charges and gravity shaping.

use bevy::prelude::*;

use crate::movement::MovementTuning;

/// Fraction of upward velocity kept when the jump button is released mid-rise.
pub const SHORT_HOP_FACTOR: f32 = 0.5;

/// Remaining jumps before the body has to touch ground again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpCharges {
    remaining: u32,
    max: u32,
}

impl JumpCharges {
    pub fn full(max: u32) -> Self {
        Self {
            remaining: max,
            max,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn refill(&mut self) {
        self.remaining = self.max;
    }

    /// Spend one charge. Returns false without mutating when none are left.
    pub fn try_consume(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Jump press: overwrite vertical velocity with the impulse if a charge is left.
pub fn try_jump(charges: &mut JumpCharges, tuning: &MovementTuning, velocity: &mut Vec2) -> bool {
    if !charges.try_consume() {
        return false;
    }
    velocity.y = tuning.jump_force;
    debug!("Jump: charges_remaining={}", charges.remaining());
    true
}

/// Jump release: halve any upward velocity.
pub fn release_jump(velocity: &mut Vec2) -> bool {
    if velocity.y > 0.0 {
        velocity.y *= SHORT_HOP_FACTOR;
        true
    } else {
        false
    }
}

/// Extra gravity on top of the engine's: heavier when falling, and heavier
/// when rising without the jump button held.
pub fn shape_gravity(
    tuning: &MovementTuning,
    velocity: &mut Vec2,
    gravity: Vec2,
    jump_held: bool,
    dt: f32,
) {
    if velocity.y < 0.0 {
        velocity.y += gravity.y * (tuning.fall_multiplier - 1.0) * dt;
    } else if velocity.y > 0.0 && !jump_held {
        velocity.y += gravity.y * (tuning.low_jump_multiplier - 1.0) * dt;
    }
}

pub fn clamp_fall_speed(tuning: &MovementTuning, velocity: &mut Vec2) {
    if velocity.y < -tuning.max_fall_speed {
        velocity.y = -tuning.max_fall_speed;
    }
}
