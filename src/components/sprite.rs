use bevy_ecs::prelude::Component;

/// Sprite is identified by a texture key and its size in pixels.
/// The key resolves to an image handle through
/// [`ImageStore`](crate::resources::imagestore::ImageStore); the handle is
/// shared read-only between every entity drawn with the same art asset.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Sprite {
            tex_key: tex_key.into(),
            width,
            height,
        }
    }
}
