//! raylib implementations of the scene's collaborator interfaces.
//!
//! - [`loader`] – background-thread image fetching bridged over crossbeam
//!   channels, with main-thread decode and texture upload
//! - [`surface`] – a [`DrawSurface`](crate::render::DrawSurface) over a
//!   raylib draw handle

pub mod loader;
pub mod surface;

use crate::assets::ImageHandle;
use raylib::prelude::Texture2D;
use std::collections::HashMap;

/// GPU textures uploaded for completed image handles.
///
/// Owned by the main loop, written by [`loader::AssetLoader::pump`] and read
/// by [`surface::RaylibSurface`].
#[derive(Default)]
pub struct TextureStore {
    pub map: HashMap<ImageHandle, Texture2D>,
}
