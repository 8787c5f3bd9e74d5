//! Viewport size resource.

use bevy_ecs::prelude::Resource;

/// Fixed viewport dimensions in pixels.
///
/// Captured from the host window once at startup; the scene never resizes
/// mid-run.
#[derive(Resource, Clone, Copy, Debug)]
pub struct Viewport {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
