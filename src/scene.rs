//! Scene automaton driver.
//!
//! [`drive_scene`] is the heart of the crate: a three-state machine that
//! sequences image loading, readiness polling, and the steady-state
//! update+draw loop.
//!
//! | State   | Action                                            | Next    |
//! |---------|---------------------------------------------------|---------|
//! | Loading | request every declared image (fire-and-forget)    | Waiting |
//! | Waiting | poll readiness; on complete, spawn the entity set | Running |
//! | Running | advance every entity, clear and redraw            | Running |
//!
//! Each due tick performs exactly one state's action and re-arms the
//! [`TickTimer`] before returning; nothing ever blocks. Waiting re-polls on
//! the next tick rather than suspending, so an image that never finishes
//! decoding parks the scene in Waiting forever.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::assets::ImageLoader;
use crate::components::bouncer::Bouncer;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::render::DrawSurface;
use crate::resources::imagestore::ImageStore;
use crate::resources::sceneconfig::SceneConfig;
use crate::resources::scenestate::{SceneState, SceneStates};
use crate::resources::ticktimer::TickTimer;
use crate::resources::viewport::Viewport;
use crate::systems::movement::step_scene;
use crate::systems::render::draw_scene;

/// Advance the automaton by at most one tick.
///
/// `now` is the host clock in seconds. When the tick deadline has not been
/// reached this is a no-op returning `false`; otherwise the current state's
/// action runs, the timer is re-armed, and `true` is returned.
pub fn drive_scene(
    world: &mut World,
    loader: &mut dyn ImageLoader,
    surface: &mut dyn DrawSurface,
    now: f64,
) -> bool {
    if !world.resource::<TickTimer>().due(now) {
        return false;
    }

    let state = world.resource::<SceneState>().get();
    match state {
        SceneStates::Loading => {
            let requested = issue_loads(world, loader);
            world.resource_mut::<SceneState>().set(SceneStates::Waiting);
            info!("Requested {} image(s), waiting for decode", requested);
        }
        SceneStates::Waiting => {
            let ready = world.resource::<ImageStore>().all_complete(loader);
            if ready {
                let mut rng = fastrand::Rng::new();
                spawn_ships(world, &mut rng);
                world.resource_mut::<SceneState>().set(SceneStates::Running);
                info!("All images complete, scene running");
            }
        }
        SceneStates::Running => {
            step_scene(world);
            draw_scene(world, surface);
        }
    }

    world.resource_mut::<TickTimer>().rearm(now);
    true
}

/// True once the automaton has reached its steady state.
pub fn scene_is_running(world: &World) -> bool {
    matches!(world.resource::<SceneState>().get(), SceneStates::Running)
}

/// Loading action: request every declared image and record its handle.
/// Returns the number of requests issued.
fn issue_loads(world: &mut World, loader: &mut dyn ImageLoader) -> usize {
    let images = world.resource::<SceneConfig>().images.clone();
    let mut store = world.resource_mut::<ImageStore>();
    for (name, path) in &images {
        let handle = loader.load(path);
        store.insert(name.clone(), handle);
        debug!("Requested image '{}' from {} as {:?}", name, path, handle);
    }
    images.len()
}

/// Scene initialization: spawn one entity per configured facing, placed
/// uniformly at random inside the viewport, z-ordered by spawn index.
pub fn spawn_ships(world: &mut World, rng: &mut fastrand::Rng) {
    let config = world.resource::<SceneConfig>().clone();
    let viewport = *world.resource::<Viewport>();
    let max_x = viewport.w - config.sprite_width as i32;
    let max_y = viewport.h - config.sprite_height as i32;

    for (i, facing) in config.facings.iter().enumerate() {
        let x = rand_coord(rng, max_x);
        let y = rand_coord(rng, max_y);
        world.spawn((
            MapPosition::new(x, y),
            Bouncer::new(*facing, config.speed),
            Sprite::new(
                config.sprite_image.clone(),
                config.sprite_width,
                config.sprite_height,
            ),
            ZIndex(i as i32),
        ));
        debug!("Spawned ship {} at ({}, {}) facing {:?}", i, x, y, facing);
    }
}

/// Integer coordinate drawn uniformly from `[0, max(0, max)]`, inclusive.
fn rand_coord(rng: &mut fastrand::Rng, max: i32) -> f32 {
    rng.i32(0..=max.max(0)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rand_coord_stays_in_bounds() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..200 {
            let v = rand_coord(&mut rng, 300);
            assert!((0.0..=300.0).contains(&v));
        }
    }

    #[test]
    fn rand_coord_degenerate_max_is_zero() {
        let mut rng = fastrand::Rng::with_seed(7);
        assert_eq!(rand_coord(&mut rng, -50), 0.0);
        assert_eq!(rand_coord(&mut rng, 0), 0.0);
    }
}
