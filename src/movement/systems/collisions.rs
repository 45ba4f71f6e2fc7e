//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::sensor::SpatialGroundProbe;
use crate::movement::{Grounded, GroundSensor, MovementController};

/// Refresh the cached ground contact. Runs at the start of both the frame and
/// the fixed step so every read within a tick sees the same answer.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(
        Entity,
        &Transform,
        &GroundSensor,
        &MovementController,
        &mut Grounded,
    )>,
) {
    for (entity, transform, sensor, controller, mut grounded) in &mut query {
        let probe = SpatialGroundProbe::new(&spatial_query, entity);
        let on_ground = sensor.is_grounded(
            &probe,
            transform.translation,
            controller.tuning().ground_check_size,
        );

        if on_ground && !grounded.0 {
            debug!("Landed: jump_charges={}", controller.jump_charges());
        } else if !on_ground && grounded.0 {
            debug!("Left ground: jump_charges={}", controller.jump_charges());
        }

        grounded.set_if_neq(Grounded(on_ground));
    }
}
