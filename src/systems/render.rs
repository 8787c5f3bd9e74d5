//! Scene render pass.
//!
//! Draws through the [`DrawSurface`] collaborator and queries the ECS world
//! directly. Entities are collected, sorted by [`ZIndex`], and blitted in
//! order, so later z values land on top.

use bevy_ecs::prelude::*;

use crate::components::bouncer::Bouncer;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::render::{DrawSurface, Rect};
use crate::resources::imagestore::ImageStore;
use crate::resources::viewport::Viewport;

/// Clear the viewport and redraw every entity in z order.
///
/// A sprite whose texture key has no declared handle is skipped; drawing
/// never mutates entity state.
pub fn draw_scene(world: &mut World, surface: &mut dyn DrawSurface) {
    let viewport = *world.resource::<Viewport>();
    surface.clear(viewport.w as f32, viewport.h as f32);

    // Query: (Sprite, Position, Bouncer, ZIndex)
    // Collect, sort by z, then draw.
    let mut to_draw: Vec<(Sprite, MapPosition, bool, ZIndex)> = {
        let mut q = world.query::<(&Sprite, &MapPosition, &Bouncer, &ZIndex)>();
        q.iter(world)
            .map(|(s, p, b, z)| (s.clone(), *p, b.facing.mirrored(), *z))
            .collect()
    };

    to_draw.sort_by_key(|(_, _, _, z)| *z);

    let images = world.resource::<ImageStore>();

    for (sprite, pos, mirrored, _z) in to_draw.iter() {
        if let Some(handle) = images.get(sprite.tex_key.as_str()) {
            let src = Rect::new(0.0, 0.0, sprite.width, sprite.height);
            let dst = Rect::new(pos.x, pos.y, sprite.width, sprite.height);
            surface.blit(handle, src, dst, *mirrored);
        }
    }
}
