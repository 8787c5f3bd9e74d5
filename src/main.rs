//! Sprite Bounce main entry point.
//!
//! A minimal animated-scene driver using:
//! - **raylib** for windowing and graphics
//! - **bevy_ecs** for entity and resource storage
//!
//! The executable shows one or more ships bouncing horizontally inside the
//! window, driven by a three-state automaton: request image loads, poll for
//! decode completion, then update and redraw at a fixed tick interval.
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the raylib window, build the ECS world
//! 2. Every frame: pump the background image loader, then offer the host
//!    clock to [`drive_scene`] — it acts only when the tick is due
//! 3. Between due ticks, repaint the unchanged scene so the backbuffer
//!    stays valid
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use spritebounce::backend::TextureStore;
use spritebounce::backend::loader::AssetLoader;
use spritebounce::backend::surface::RaylibSurface;
use spritebounce::render::DrawSurface;
use spritebounce::resources::imagestore::ImageStore;
use spritebounce::resources::sceneconfig::SceneConfig;
use spritebounce::resources::scenestate::SceneState;
use spritebounce::resources::ticktimer::TickTimer;
use spritebounce::resources::viewport::Viewport;
use spritebounce::scene::{drive_scene, scene_is_running};
use spritebounce::systems::render::draw_scene;

/// Sprite Bounce 2D
#[derive(Parser)]
#[command(version, about = "Bouncing sprite scene driver")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the ship count; initial facings alternate right/left.
    #[arg(long, value_name = "N")]
    ships: Option<usize>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => SceneConfig::with_path(path),
        None => SceneConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults
    if let Some(count) = cli.ships {
        config.set_ship_count(count);
    }

    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title("Sprite Bounce")
        .build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    // Viewport is fixed at startup; the scene never resizes mid-run.
    world.insert_resource(Viewport {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(SceneState::new());
    world.insert_resource(ImageStore::default());
    world.insert_resource(TickTimer::new(config.tick_ms));
    world.insert_resource(config);

    let mut textures = TextureStore::default();
    let mut loader = AssetLoader::new();

    log::info!("Sprite Bounce starting");

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        loader.pump(&mut rl, &thread, &mut textures);
        let now = rl.get_time();

        let mut d = rl.begin_drawing(&thread);
        let mut surface = RaylibSurface {
            d: &mut d,
            textures: &textures,
        };

        let ticked = drive_scene(&mut world, &mut loader, &mut surface, now);
        if !ticked {
            // Off-tick frame: raylib still presents, so repaint the scene
            // unchanged (or a blank viewport before the first spawn).
            let viewport = *world.resource::<Viewport>();
            if scene_is_running(&world) {
                draw_scene(&mut world, &mut surface);
            } else {
                surface.clear(viewport.w as f32, viewport.h as f32);
            }
        }
    }
}
