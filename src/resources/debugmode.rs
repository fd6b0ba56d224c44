//! Debug toggle resource.
//!
//! The mere presence of this resource enables the debug overlay drawn on top
//! of the decoration. Remove it to hide the overlay.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render system draws diagnostics.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
