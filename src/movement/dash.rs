//! Movement domain: timed dash override.

use bevy::prelude::*;

use crate::movement::{Facing, MovementTuning};

/// Horizontal speed above which an airborne body may dash.
pub const AIR_DASH_MIN_SPEED: f32 = 0.1;

/// Fraction of the step below which remaining time counts as expired; absorbs
/// float drift from repeatedly subtracting the fixed step.
const DASH_EXPIRY_TOLERANCE: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dash {
    active: bool,
    time_remaining: f32,
}

impl Dash {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn time_remaining(&self) -> f32 {
        self.time_remaining
    }

    /// Start a dash unless one is running or the body is hanging still in the air.
    pub fn try_start(
        &mut self,
        tuning: &MovementTuning,
        grounded: bool,
        horizontal_velocity: f32,
    ) -> bool {
        if self.active {
            return false;
        }
        if !grounded && horizontal_velocity.abs() <= AIR_DASH_MIN_SPEED {
            return false;
        }

        self.active = true;
        self.time_remaining = tuning.dash_duration;
        debug!(
            "Dash started: grounded={}, duration={}",
            grounded, tuning.dash_duration
        );
        true
    }

    /// Override velocity for one tick while active. Ends the dash on the tick
    /// its time runs out, after that tick's override.
    pub fn advance(
        &mut self,
        tuning: &MovementTuning,
        facing: Facing,
        velocity: &mut Vec2,
        dt: f32,
    ) -> bool {
        if !self.active {
            return false;
        }

        *velocity = Vec2::new(tuning.dash_speed * facing.sign(), 0.0);
        self.time_remaining -= dt;

        if self.time_remaining <= dt * DASH_EXPIRY_TOLERANCE {
            self.time_remaining = 0.0;
            self.active = false;
            debug!("Dash ended");
        }
        true
    }
}
