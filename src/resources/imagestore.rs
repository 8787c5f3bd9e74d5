//! Declared image handles and the aggregate readiness query.

use crate::assets::{ImageHandle, ImageLoader};
use bevy_ecs::prelude::Resource;
use std::collections::HashMap;

/// Mapping from declared image name to its in-flight or loaded handle.
///
/// Populated exactly once by the Loading action, read thereafter. Readiness
/// of the whole set is a single query over every declared handle, so the
/// Waiting state's contract stays total: an empty store is trivially ready.
#[derive(Resource, Default)]
pub struct ImageStore {
    pub map: HashMap<String, ImageHandle>,
}

impl ImageStore {
    /// Record the handle returned for a declared image name.
    pub fn insert(&mut self, name: impl Into<String>, handle: ImageHandle) {
        self.map.insert(name.into(), handle);
    }

    /// Look up the handle for a texture key.
    pub fn get(&self, name: &str) -> Option<ImageHandle> {
        self.map.get(name).copied()
    }

    /// True once every declared image reports decode complete.
    pub fn all_complete(&self, loader: &dyn ImageLoader) -> bool {
        self.map.values().all(|h| loader.is_complete(*h))
    }
}
