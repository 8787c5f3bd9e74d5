//! Scene systems.
//!
//! - [`movement`] – the horizontal bounce rule
//! - [`render`] – clear + ordered blit pass over the whole scene

pub mod movement;
pub mod render;
