//! Asynchronous image loader backed by a background fetch thread.
//!
//! [`AssetLoader::load`] hands the file path to a worker thread and returns
//! immediately; the worker reads the bytes off disk and sends them back over
//! a crossbeam channel. The main loop calls [`AssetLoader::pump`] once per
//! frame to drain finished fetches, decode them, and upload the textures —
//! GPU upload has to happen on the thread that owns the raylib context. A
//! handle only reports complete after its texture is in the store, so the
//! scene automaton's readiness poll is the single point of truth.
//!
//! A failed read or decode is logged and the handle never completes; the
//! automaton then stays in Waiting, which is the documented behavior for a
//! perpetually-failing load.

use crate::assets::{ImageHandle, ImageLoader};
use crate::backend::TextureStore;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, error};
use raylib::prelude::*;
use std::collections::HashSet;
use std::path::Path;

type FetchResult = (ImageHandle, String, Result<Vec<u8>, String>);

/// Image loading collaborator for the raylib backend.
pub struct AssetLoader {
    tx_job: Sender<(ImageHandle, String)>,
    rx_done: Receiver<FetchResult>,
    completed: HashSet<ImageHandle>,
    next_id: u32,
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetLoader {
    /// Spawn the fetch thread. It exits on its own when the loader is
    /// dropped and the job channel disconnects.
    pub fn new() -> Self {
        let (tx_job, rx_job) = unbounded::<(ImageHandle, String)>();
        let (tx_done, rx_done) = unbounded::<FetchResult>();

        std::thread::spawn(move || {
            while let Ok((handle, path)) = rx_job.recv() {
                let result = std::fs::read(&path).map_err(|e| e.to_string());
                // Ignore send error on shutdown
                let _ = tx_done.send((handle, path, result));
            }
        });

        AssetLoader {
            tx_job,
            rx_done,
            completed: HashSet::new(),
            next_id: 0,
        }
    }

    /// Drain finished fetches: decode, upload to the GPU, and mark the
    /// handle complete. Non-blocking; call once per frame.
    pub fn pump(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, store: &mut TextureStore) {
        while let Ok((handle, path, result)) = self.rx_done.try_recv() {
            let image = result.and_then(|bytes| {
                Image::load_image_from_mem(file_ext(&path), &bytes)
                    .map_err(|e| e.to_string())
            });
            match image {
                Ok(image) => match rl.load_texture_from_image(thread, &image) {
                    Ok(texture) => {
                        store.map.insert(handle, texture);
                        self.completed.insert(handle);
                        debug!("Image {} uploaded as {:?}", path, handle);
                    }
                    Err(e) => error!("Failed to upload texture for {}: {}", path, e),
                },
                Err(e) => error!("Failed to load image {}: {}", path, e),
            }
        }
    }
}

impl ImageLoader for AssetLoader {
    fn load(&mut self, path: &str) -> ImageHandle {
        let handle = ImageHandle(self.next_id);
        self.next_id += 1;
        // Ignore send error; an unreachable worker just never completes
        let _ = self.tx_job.send((handle, path.to_string()));
        handle
    }

    fn is_complete(&self, handle: ImageHandle) -> bool {
        self.completed.contains(&handle)
    }
}

/// File extension with leading dot, as raylib's decoder expects.
fn file_ext(path: &str) -> &'static str {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => ".jpg",
        Some("bmp") => ".bmp",
        _ => ".png",
    }
}
