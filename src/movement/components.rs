//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Signed direction: -1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Facing implied by a raw horizontal axis sample. Zero keeps no opinion.
    pub fn from_axis(axis: f32) -> Option<Self> {
        if axis < 0.0 {
            Some(Facing::Left)
        } else if axis > 0.0 {
            Some(Facing::Right)
        } else {
            None
        }
    }

    /// Facing encoded in a horizontal scale value (mirrored sprites are negative).
    pub fn from_scale(scale_x: f32) -> Self {
        if scale_x < 0.0 {
            Facing::Left
        } else {
            Facing::Right
        }
    }
}

/// Box overlap probe anchored relative to the body's translation.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct GroundSensor {
    pub offset: Vec2,
}

impl GroundSensor {
    pub fn new(offset: Vec2) -> Self {
        Self { offset }
    }

    pub fn anchor(&self, translation: Vec3) -> Vec2 {
        translation.truncate() + self.offset
    }
}

/// Ground contact sampled at the start of the current tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Grounded(pub bool);

/// Magnitude of the horizontal visual scale; the sign is driven by facing.
#[derive(Component, Debug, Clone, Copy)]
pub struct FacingScale(pub f32);

impl Default for FacingScale {
    fn default() -> Self {
        Self(1.0)
    }
}
