//! Movement domain: controller registration and first-wins dedup.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    ActiveController, ControllerError, Facing, FacingScale, GroundSensor, MovementController,
};

/// Track the single active controller. A controller spawned while another is
/// active is despawned; the first one keeps driving. Newly registered
/// controllers take their initial facing from the horizontal scale of their
/// mirrored visual child.
pub(crate) fn register_controllers(
    mut commands: Commands,
    mut active: ResMut<ActiveController>,
    mut removed: RemovedComponents<MovementController>,
    mut added: Query<
        (
            Entity,
            &mut MovementController,
            Option<&Children>,
            Has<LinearVelocity>,
            Has<GroundSensor>,
        ),
        Added<MovementController>,
    >,
    visual_query: Query<&Transform, With<FacingScale>>,
) -> Result {
    for entity in removed.read() {
        if active.0 == Some(entity) {
            info!("Controller {} torn down", entity);
            active.0 = None;
        }
    }

    for (entity, mut controller, children, has_velocity, has_sensor) in &mut added {
        if let Some(current) = active.0.filter(|current| *current != entity) {
            warn!(
                "Controller {} spawned while {} is active, discarding it",
                entity, current
            );
            commands.entity(entity).despawn();
            continue;
        }

        if !has_velocity {
            return Err(ControllerError::MissingCollaborator {
                entity,
                component: "LinearVelocity",
            }
            .into());
        }
        if !has_sensor {
            return Err(ControllerError::MissingCollaborator {
                entity,
                component: "GroundSensor",
            }
            .into());
        }

        let visual_scale = children.and_then(|children| {
            children
                .iter()
                .find_map(|child| visual_query.get(child).ok())
                .map(|transform| transform.scale.x)
        });
        if let Some(scale_x) = visual_scale {
            controller.set_facing(Facing::from_scale(scale_x));
        }

        info!(
            "Controller {} active: facing={:?}, jump_charges={}",
            entity,
            controller.facing(),
            controller.jump_charges()
        );
        active.0 = Some(entity);
    }

    Ok(())
}
