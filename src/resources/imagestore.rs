//! Image store resource.
//!
//! A non-send resource mapping image names to their pixel size. The crate
//! never decodes pixels; it only needs the size of every image an
//! [`Actor`](crate::components::actor::Actor) refers to.
//!
//! Sizes live behind shared [`ImageHandle`]s, so resizing an image after
//! actors were created is observed by all of them on their next access.
//!
//! The store can be filled from a JSON manifest:
//!
//! ```json
//! { "alien": [66, 92], "bee": [32, 32] }
//! ```

use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::error::{EngineError, EngineResult};

/// Name and current size of a registered image.
#[derive(Debug)]
pub struct ImageInfo {
    name: String,
    width: Cell<f64>,
    height: Cell<f64>,
}

impl ImageInfo {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> f64 {
        self.width.get()
    }

    pub fn height(&self) -> f64 {
        self.height.get()
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width.get(), self.height.get())
    }

    /// Change the size seen by every holder of this image.
    pub fn set_size(&self, width: f64, height: f64) {
        self.width.set(width);
        self.height.set(height);
    }
}

/// Shared handle to an [`ImageInfo`].
pub type ImageHandle = Rc<ImageInfo>;

/// Map of image names to their sizes.
///
/// This is a non-send resource; use `NonSend<ImageStore>` in system parameters.
// NonSend resource: insert with insert_non_send_resource and access via NonSend/NonSendMut
#[derive(Debug, Default)]
pub struct ImageStore {
    images: FxHashMap<String, ImageHandle>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image, or resize it when the name is already known.
    ///
    /// Returns the shared handle in both cases.
    pub fn register(&mut self, name: impl Into<String>, width: f64, height: f64) -> ImageHandle {
        let name = name.into();
        if let Some(existing) = self.images.get(&name) {
            existing.set_size(width, height);
            return existing.clone();
        }
        let handle = Rc::new(ImageInfo {
            name: name.clone(),
            width: Cell::new(width),
            height: Cell::new(height),
        });
        self.images.insert(name, handle.clone());
        handle
    }

    /// Look an image up by name.
    pub fn get(&self, name: impl AsRef<str>) -> EngineResult<ImageHandle> {
        let name = name.as_ref();
        self.images
            .get(name)
            .cloned()
            .ok_or_else(|| EngineError::UnknownImage(name.to_string()))
    }

    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.images.contains_key(name.as_ref())
    }

    /// Resize a registered image.
    pub fn resize(&self, name: impl AsRef<str>, width: f64, height: f64) -> EngineResult<()> {
        self.get(name)?.set_size(width, height);
        Ok(())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.images.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Forget every image. Handles held by actors stay valid.
    pub fn clear(&mut self) {
        self.images.clear();
    }

    /// Register every entry of a JSON manifest string.
    ///
    /// Returns the number of registered images.
    pub fn load_manifest_str(&mut self, json: &str) -> EngineResult<usize> {
        let entries: FxHashMap<String, [f64; 2]> =
            serde_json::from_str(json).map_err(|e| EngineError::Manifest(e.to_string()))?;
        let count = entries.len();
        for (name, [width, height]) in entries {
            debug!("image {name}: {width}x{height}");
            self.register(name, width, height);
        }
        Ok(count)
    }

    /// Register every entry of a JSON manifest file.
    pub fn load_manifest(&mut self, path: impl AsRef<Path>) -> EngineResult<usize> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| EngineError::Manifest(format!("{}: {}", path.display(), e)))?;
        let count = self.load_manifest_str(&json)?;
        info!("Loaded {} images from {:?}", count, path);
        Ok(count)
    }
}
