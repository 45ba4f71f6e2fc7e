//! Movement domain: messages from the integration layer.

use bevy::ecs::message::Message;

/// Ask the active controller to dash this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashRequest;

impl Message for DashRequest {}
