//! Movement domain: horizontal speed smoothing.

use bevy::math::FloatExt;

use crate::movement::MovementTuning;

/// Smoothed horizontal speed that persists across physics ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Locomotion {
    current_speed: f32,
}

impl Locomotion {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            current_speed: tuning.walk_speed,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_current_speed(mut self, current_speed: f32) -> Self {
        self.current_speed = current_speed;
        self
    }

    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    /// Speed the body is being eased toward this tick.
    pub fn target_speed(tuning: &MovementTuning, grounded: bool, vertical_velocity: f32) -> f32 {
        if !grounded && vertical_velocity.abs() < tuning.jump_peak_threshold {
            tuning.walk_speed * tuning.jump_peak_speed_multiplier
        } else {
            tuning.walk_speed
        }
    }

    /// Ease the stored speed toward its target and return the horizontal velocity.
    pub fn integrate(
        &mut self,
        tuning: &MovementTuning,
        axis: f32,
        grounded: bool,
        vertical_velocity: f32,
        dt: f32,
    ) -> f32 {
        let target = Self::target_speed(tuning, grounded, vertical_velocity);
        let t = (tuning.speed_transition_smoothness * dt).clamp(0.0, 1.0);
        self.current_speed = self.current_speed.lerp(target, t);

        self.current_speed * sanitize_axis(axis)
    }
}

/// Clamp an axis sample to [-1, 1]; non-finite samples count as released.
pub(crate) fn sanitize_axis(axis: f32) -> f32 {
    if axis.is_finite() {
        axis.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
