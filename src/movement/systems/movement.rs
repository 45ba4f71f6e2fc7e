//! Movement domain: decision and physics tick systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    ActiveController, DashRequest, FacingScale, Grounded, MovementController, MovementInput,
};

/// Only the registered controller is driven; a duplicate awaiting despawn is left alone.
pub(crate) fn run_decision_tick(
    input: Res<MovementInput>,
    active: Res<ActiveController>,
    mut query: Query<(&mut MovementController, &Grounded, &mut LinearVelocity)>,
) {
    let Some(entity) = active.entity() else {
        return;
    };
    let Ok((mut controller, grounded, mut velocity)) = query.get_mut(entity) else {
        return;
    };

    controller.on_decision_tick(&input, grounded.0, &mut velocity.0);
}

pub(crate) fn apply_dash_requests(
    mut requests: MessageReader<DashRequest>,
    active: Res<ActiveController>,
    mut query: Query<(&mut MovementController, &Grounded, &LinearVelocity)>,
) {
    if requests.read().count() == 0 {
        return;
    }
    let Some(entity) = active.entity() else {
        return;
    };
    let Ok((mut controller, grounded, velocity)) = query.get_mut(entity) else {
        return;
    };

    if !controller.try_dash(grounded.0, velocity.0) {
        debug!(
            "Dash rejected: dashing={}, grounded={}, vx={}",
            controller.is_dashing(),
            grounded.0,
            velocity.x
        );
    }
}

pub(crate) fn run_physics_tick(
    time: Res<Time>,
    gravity: Res<Gravity>,
    active: Res<ActiveController>,
    mut query: Query<(&mut MovementController, &Grounded, &mut LinearVelocity)>,
) {
    let Some(entity) = active.entity() else {
        return;
    };
    let Ok((mut controller, grounded, mut velocity)) = query.get_mut(entity) else {
        return;
    };

    controller.on_physics_tick(grounded.0, gravity.0, &mut velocity.0, time.delta_secs());
}

/// Mirror the visual children to match facing, keeping their configured magnitude.
pub(crate) fn sync_facing_scale(
    parent_query: Query<(&MovementController, &Children)>,
    mut visual_query: Query<(&FacingScale, &mut Transform)>,
) {
    for (controller, children) in &parent_query {
        let sign = controller.facing().sign();
        for child in children.iter() {
            if let Ok((scale, mut transform)) = visual_query.get_mut(child) {
                let scale_x = scale.0.abs() * sign;
                if transform.scale.x != scale_x {
                    transform.scale.x = scale_x;
                }
            }
        }
    }
}
