//! Keyed, ordered frame sequences for raster sprites

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use super::ImageData;

/// Ordered frames keyed by frame number
///
/// A key whose image failed to load keeps its slot with no image: it still
/// counts toward [`RasterMap::len`] and drawing it is a no-op. Cloning shares
/// the decoded pixels.
#[derive(Debug, Clone, Default)]
pub struct RasterMap {
    frames: BTreeMap<u32, Option<Arc<ImageData>>>,
}

impl RasterMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from already decoded images, keyed `0..n` in order
    pub fn from_images<I>(images: I) -> Self
    where
        I: IntoIterator<Item = ImageData>,
    {
        let frames = images
            .into_iter()
            .zip(0..)
            .map(|(image, key)| (key, Some(Arc::new(image))))
            .collect();
        Self { frames }
    }

    /// Put an image (or an empty slot) under `key`
    pub fn insert(&mut self, key: u32, image: Option<ImageData>) {
        self.frames.insert(key, image.map(Arc::new));
    }

    /// Load `path` into slot `key`
    ///
    /// A load failure is logged and leaves the slot empty. Returns whether an
    /// image was stored.
    pub fn load_frame<P: AsRef<Path>>(&mut self, key: u32, path: P) -> bool {
        match ImageData::from_file(path.as_ref()) {
            Ok(image) => {
                self.frames.insert(key, Some(Arc::new(image)));
                true
            }
            Err(err) => {
                log::warn!("Raster frame {} left empty: {}", key, err);
                self.frames.insert(key, None);
                false
            }
        }
    }

    /// Load a whole sequence, keying the paths `0..n` in order
    pub fn load_sequence<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut map = Self::new();
        for (key, path) in (0..).zip(paths) {
            map.load_frame(key, path);
        }
        map
    }

    /// Image for `key`, if the key exists and its load succeeded
    pub fn get(&self, key: u32) -> Option<&ImageData> {
        self.frames.get(&key)?.as_deref()
    }

    /// Image under the lowest key
    pub fn first(&self) -> Option<&ImageData> {
        self.frames.values().next()?.as_deref()
    }

    /// Number of slots, including empty ones
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether there are no slots at all
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of slots holding an image
    pub fn loaded(&self) -> usize {
        self.frames.values().filter(|slot| slot.is_some()).count()
    }
}
