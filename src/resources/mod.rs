//! ECS resources shared across the scene.
//!
//! Submodules overview:
//! - [`imagestore`] – declared image handles and the aggregate readiness query
//! - [`sceneconfig`] – INI-backed scene and window settings
//! - [`scenestate`] – current automaton state
//! - [`ticktimer`] – fixed-interval tick deadline, re-armed after every action
//! - [`viewport`] – fixed viewport dimensions

pub mod imagestore;
pub mod sceneconfig;
pub mod scenestate;
pub mod ticktimer;
pub mod viewport;
