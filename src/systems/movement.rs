//! Horizontal bounce movement.
//!
//! Each tick an entity moves `facing.sign() * speed` pixels on the x axis
//! and reflects off the viewport edges. Both edge checks run on every call:
//! when the viewport is narrower than the sprite both fire in the same tick
//! and the right-edge clamp wins, pinning the entity at x = 0 facing left.

use bevy_ecs::prelude::*;

use crate::components::bouncer::{Bouncer, Facing};
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::viewport::Viewport;

/// Advance one entity by one tick and clamp it inside the viewport.
///
/// Post-condition: `0 <= pos.x <= max(0, viewport_w - sprite_w)`.
pub fn advance(pos: &mut MapPosition, bouncer: &mut Bouncer, sprite_w: f32, viewport_w: f32) {
    pos.x += bouncer.facing.sign() * bouncer.speed;

    let max_x = (viewport_w - sprite_w).max(0.0);

    if pos.x <= 0.0 {
        pos.x = 0.0;
        bouncer.facing = Facing::Right;
    }

    if pos.x >= max_x {
        pos.x = max_x;
        bouncer.facing = Facing::Left;
    }
}

/// Advance every bouncing entity in the world by one tick.
pub fn step_scene(world: &mut World) {
    let viewport = *world.resource::<Viewport>();
    let mut query = world.query::<(&mut MapPosition, &mut Bouncer, &Sprite)>();
    for (mut pos, mut bouncer, sprite) in query.iter_mut(world) {
        advance(&mut pos, &mut bouncer, sprite.width, viewport.w as f32);
    }
}
