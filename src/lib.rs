//! Run/jump/dash movement for a 2D platformer character on Bevy and avian2d.

pub mod movement;
