//! Movement domain: ground contact probing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundSensor};

/// Answers whether a stationary, unrotated box overlaps ground.
pub trait GroundProbe {
    fn overlaps_ground(&self, center: Vec2, size: Vec2) -> bool;
}

/// Ground probe backed by avian's spatial query, ignoring the probing body.
pub struct SpatialGroundProbe<'a, 'w, 's> {
    query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> SpatialGroundProbe<'a, 'w, 's> {
    pub fn new(query: &'a SpatialQuery<'w, 's>, body: Entity) -> Self {
        // Filter to only hit Ground layer entities
        let filter = SpatialQueryFilter::from_mask(GameLayer::Ground).with_excluded_entities([body]);
        Self { query, filter }
    }
}

impl GroundProbe for SpatialGroundProbe<'_, '_, '_> {
    fn overlaps_ground(&self, center: Vec2, size: Vec2) -> bool {
        let shape = Collider::rectangle(size.x, size.y);
        !self
            .query
            .shape_intersections(&shape, center, 0.0, &self.filter)
            .is_empty()
    }
}

impl GroundSensor {
    pub fn is_grounded(&self, probe: &impl GroundProbe, translation: Vec3, size: Vec2) -> bool {
        probe.overlaps_ground(self.anchor(translation), size)
    }
}
