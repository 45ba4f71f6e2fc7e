//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use ron::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::movement::TuningError;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub walk_speed: f32,
    /// Target speed multiplier while airborne near the apex of a jump.
    pub jump_peak_speed_multiplier: f32,
    pub speed_transition_smoothness: f32,
    pub jump_force: f32,
    /// Width and height of the ground overlap box.
    pub ground_check_size: Vec2,
    pub fall_multiplier: f32,
    pub low_jump_multiplier: f32,
    pub max_fall_speed: f32,
    /// Vertical speed below which an airborne body counts as being at the apex.
    pub jump_peak_threshold: f32,
    /// Jumps available before touching ground again (2 = double jump).
    pub max_jump_charges: u32,
    pub dash_duration: f32,
    pub dash_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 1.0,
            jump_peak_speed_multiplier: 1.5,
            speed_transition_smoothness: 5.0,
            jump_force: 45.0,
            ground_check_size: Vec2::new(0.5, 0.2),
            fall_multiplier: 2.5,
            low_jump_multiplier: 2.0,
            max_fall_speed: 20.0,
            jump_peak_threshold: 0.5,
            max_jump_charges: 2,
            dash_duration: 0.5,
            dash_speed: 3.0,
        }
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

impl MovementTuning {
    /// Parse tuning from RON text. Missing fields keep their defaults.
    pub fn from_ron_str(contents: &str, origin: &str) -> Result<Self, TuningError> {
        let tuning: Self = ron_options()
            .from_str(contents)
            .map_err(|e| TuningError::Parse {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a RON file.
    pub fn from_ron_file(path: &Path) -> Result<Self, TuningError> {
        let file_name = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| TuningError::Io {
            path: file_name.clone(),
            source: e,
        })?;
        Self::from_ron_str(&contents, &file_name)
    }

    /// Reject values the controller cannot tick with.
    pub fn validate(&self) -> Result<(), TuningError> {
        non_negative("walk_speed", self.walk_speed)?;
        non_negative("jump_peak_speed_multiplier", self.jump_peak_speed_multiplier)?;
        non_negative("speed_transition_smoothness", self.speed_transition_smoothness)?;
        non_negative("jump_force", self.jump_force)?;
        positive("ground_check_size.x", self.ground_check_size.x)?;
        positive("ground_check_size.y", self.ground_check_size.y)?;
        non_negative("fall_multiplier", self.fall_multiplier)?;
        non_negative("low_jump_multiplier", self.low_jump_multiplier)?;
        positive("max_fall_speed", self.max_fall_speed)?;
        non_negative("jump_peak_threshold", self.jump_peak_threshold)?;
        positive("dash_duration", self.dash_duration)?;
        non_negative("dash_speed", self.dash_speed)?;
        Ok(())
    }

    /// Height of a single full jump under `gravity` (h = v² / 2g), ignoring
    /// the low-jump multiplier.
    pub fn apex_height(&self, gravity: Vec2) -> f32 {
        let g = gravity.y.abs();
        if g <= f32::EPSILON {
            return f32::INFINITY;
        }
        self.jump_force * self.jump_force / (2.0 * g)
    }

    /// Height reachable by spending every jump charge at successive apexes.
    pub fn max_reachable_height(&self, gravity: Vec2) -> f32 {
        self.apex_height(gravity) * self.max_jump_charges as f32
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: format!("expected a finite value >= 0, got {}", value),
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: format!("expected a finite value > 0, got {}", value),
        })
    }
}

/// Input sampled once per rendered frame.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MovementInput {
    /// Raw horizontal axis: -1, 0 or 1.
    pub axis: f32,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub jump_held: bool,
}

/// Handle to the one controller entity allowed to drive movement.
#[derive(Resource, Debug, Default)]
pub struct ActiveController(pub Option<Entity>);

impl ActiveController {
    pub fn entity(&self) -> Option<Entity> {
        self.0
    }
}
