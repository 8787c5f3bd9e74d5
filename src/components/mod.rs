//! ECS components for scene entities.
//!
//! Submodules overview:
//! - [`bouncer`] – horizontal travel direction and constant speed
//! - [`mapposition`] – world-space position for an entity
//! - [`sprite`] – 2D sprite rendering component
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod bouncer;
pub mod mapposition;
pub mod sprite;
pub mod zindex;
