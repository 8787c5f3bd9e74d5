//! Image loading collaborator interface.
//!
//! The automaton never blocks on image loading. [`ImageLoader::load`] begins
//! an asynchronous fetch+decode and returns a handle immediately; the Waiting
//! state polls [`ImageLoader::is_complete`] once per tick until every
//! declared handle reports done. There is no error channel: a load that never
//! finishes simply keeps the automaton in Waiting.

/// Opaque identifier for a loaded (or in-flight) image resource.
///
/// Handles are cheap to copy and shared read-only between every entity that
/// uses the same art asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

/// Asynchronous image loading collaborator.
pub trait ImageLoader {
    /// Begin fetching and decoding the image at `path`. Fire-and-forget:
    /// returns a handle immediately without waiting for the result.
    fn load(&mut self, path: &str) -> ImageHandle;

    /// True once the image behind `handle` has finished decoding and is
    /// ready to draw.
    fn is_complete(&self, handle: ImageHandle) -> bool;
}
