//! Sprite Bounce library.
//!
//! This module exposes the scene driver's components, resources, systems,
//! and collaborator interfaces for use in integration tests and as a
//! reusable library.

pub mod assets;
pub mod backend;
pub mod components;
pub mod render;
pub mod resources;
pub mod scene;
pub mod systems;
