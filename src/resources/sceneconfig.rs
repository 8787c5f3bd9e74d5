//! Scene configuration resource.
//!
//! Manages window and scene settings loaded from an INI configuration file.
//! Provides defaults for safe startup, so a missing file just runs the stock
//! two-ship scene.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 450
//! target_fps = 60
//!
//! [scene]
//! tick_ms = 100
//! speed = 5
//! sprite_width = 100
//! sprite_height = 50
//! sprite_image = ship
//! facings = right,left
//!
//! [images]
//! ship = assets/img/ship.png
//! ```
//!
//! Every entry in `facings` spawns one entity with that initial direction;
//! an empty list is a valid (empty) scene.

use crate::components::bouncer::Facing;
use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 450;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TICK_MS: u64 = 100;
const DEFAULT_SPEED: f32 = 5.0;
const DEFAULT_SPRITE_WIDTH: f32 = 100.0;
const DEFAULT_SPRITE_HEIGHT: f32 = 50.0;
const DEFAULT_SPRITE_IMAGE: &str = "ship";
const DEFAULT_IMAGE_PATH: &str = "assets/img/ship.png";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Scene configuration resource.
///
/// Stores window settings, the tick interval, sprite metrics, the declared
/// image set, and the per-entity initial facings.
#[derive(Resource, Debug, Clone)]
pub struct SceneConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second for the host loop.
    pub target_fps: u32,
    /// Automaton tick interval in milliseconds.
    pub tick_ms: u64,
    /// Horizontal speed in pixels per tick, shared by every spawned entity.
    pub speed: f32,
    /// Sprite width in pixels.
    pub sprite_width: f32,
    /// Sprite height in pixels.
    pub sprite_height: f32,
    /// Name of the declared image every entity is drawn with.
    pub sprite_image: String,
    /// Declared images: (name, file path).
    pub images: Vec<(String, String)>,
    /// One entity is spawned per entry, with that initial facing.
    pub facings: Vec<Facing>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneConfig {
    /// Create a new configuration with safe default values: the stock
    /// two-ship scene, one moving right and one moving left.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            tick_ms: DEFAULT_TICK_MS,
            speed: DEFAULT_SPEED,
            sprite_width: DEFAULT_SPRITE_WIDTH,
            sprite_height: DEFAULT_SPRITE_HEIGHT,
            sprite_image: DEFAULT_SPRITE_IMAGE.to_string(),
            images: vec![(
                DEFAULT_SPRITE_IMAGE.to_string(),
                DEFAULT_IMAGE_PATH.to_string(),
            )],
            facings: vec![Facing::Right, Facing::Left],
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        self.apply(&config)?;

        info!(
            "Loaded config: {}x{} window, tick={}ms, speed={}, {} ship(s)",
            self.window_width,
            self.window_height,
            self.tick_ms,
            self.speed,
            self.facings.len()
        );

        Ok(())
    }

    /// Replace the facing list with `count` entries alternating right/left,
    /// starting right (two ships reproduce the stock scene exactly).
    pub fn set_ship_count(&mut self, count: usize) {
        self.facings = (0..count)
            .map(|i| if i % 2 == 0 { Facing::Right } else { Facing::Left })
            .collect();
    }

    fn apply(&mut self, config: &Ini) -> Result<(), String> {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [scene] section
        if let Some(tick) = config.getuint("scene", "tick_ms").ok().flatten() {
            self.tick_ms = tick;
        }
        if let Some(speed) = config.getfloat("scene", "speed").ok().flatten() {
            self.speed = speed as f32;
        }
        if let Some(w) = config.getfloat("scene", "sprite_width").ok().flatten() {
            self.sprite_width = w as f32;
        }
        if let Some(h) = config.getfloat("scene", "sprite_height").ok().flatten() {
            self.sprite_height = h as f32;
        }
        if let Some(image) = config.get("scene", "sprite_image") {
            self.sprite_image = image;
        }
        if let Some(facings) = config.get("scene", "facings") {
            self.facings = parse_facings(&facings)?;
        }

        // [images] section: every key declares one loadable image
        if let Some(section) = config.get_map_ref().get("images") {
            let mut images: Vec<(String, String)> = section
                .iter()
                .filter_map(|(name, path)| {
                    path.as_ref().map(|p| (name.clone(), p.clone()))
                })
                .collect();
            images.sort();
            self.images = images;
        }

        Ok(())
    }
}

/// Parse a comma-separated facing list, e.g. `"right,left"`. An empty
/// string declares an empty scene.
pub fn parse_facings(s: &str) -> Result<Vec<Facing>, String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_scene() {
        let config = SceneConfig::new();
        assert_eq!(config.tick_ms, 100);
        assert_eq!(config.speed, 5.0);
        assert_eq!(config.sprite_width, 100.0);
        assert_eq!(config.sprite_height, 50.0);
        assert_eq!(config.facings, vec![Facing::Right, Facing::Left]);
        assert_eq!(config.images.len(), 1);
        assert_eq!(config.images[0].0, "ship");
    }

    #[test]
    fn parse_facings_roundtrip() {
        assert_eq!(
            parse_facings("right,left").unwrap(),
            vec![Facing::Right, Facing::Left]
        );
        assert_eq!(
            parse_facings(" left , left ").unwrap(),
            vec![Facing::Left, Facing::Left]
        );
    }

    #[test]
    fn parse_facings_empty_is_empty_scene() {
        assert!(parse_facings("").unwrap().is_empty());
    }

    #[test]
    fn parse_facings_rejects_unknown() {
        assert!(parse_facings("right,up").is_err());
    }

    #[test]
    fn set_ship_count_alternates_starting_right() {
        let mut config = SceneConfig::new();
        config.set_ship_count(3);
        assert_eq!(
            config.facings,
            vec![Facing::Right, Facing::Left, Facing::Right]
        );
        config.set_ship_count(0);
        assert!(config.facings.is_empty());
    }

    #[test]
    fn apply_reads_ini_values() {
        let mut ini = Ini::new();
        ini.read(
            "[window]\nwidth = 400\nheight = 300\n\
             [scene]\ntick_ms = 50\nspeed = 2.5\nfacings = left\n\
             [images]\nship = art/ship.png\n"
                .to_string(),
        )
        .unwrap();

        let mut config = SceneConfig::new();
        config.apply(&ini).unwrap();

        assert_eq!(config.window_width, 400);
        assert_eq!(config.window_height, 300);
        assert_eq!(config.tick_ms, 50);
        assert_eq!(config.speed, 2.5);
        assert_eq!(config.facings, vec![Facing::Left]);
        assert_eq!(
            config.images,
            vec![("ship".to_string(), "art/ship.png".to_string())]
        );
    }
}
