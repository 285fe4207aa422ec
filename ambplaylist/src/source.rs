//! Les deux stratégies de construction de playlist
//!
//! Both strategies implement [`AssetSource`], the common "produce an ordered
//! list of playable items" contract, so a HUD variant can swap one for the
//! other without touching dispatch logic.

use crate::asset::VideoAsset;
use crate::error::{Error, Result};
use ambhost::{MediaType, PlayableItem};
use std::path::Path;

/// Produces the ordered (pre-shuffle) list of playable items for a category
/// directory
pub trait AssetSource {
    /// Collects the playable items under `base_dir`
    ///
    /// Returns [`Error::AssetDirMissing`] when `base_dir` does not exist;
    /// callers decide whether that is fatal (it never is in the service).
    fn playable_items(&self, base_dir: &Path) -> Result<Vec<PlayableItem>>;
}

/// Variant A: a hardcoded catalogue of described assets
///
/// Each [`VideoAsset`] resolves to `base_dir/folder/file`, with title, year,
/// poster art and the `movie` media type attached.
#[derive(Debug, Clone, Default)]
pub struct FixedCatalog {
    assets: Vec<VideoAsset>,
}

impl FixedCatalog {
    pub fn new(assets: Vec<VideoAsset>) -> Self {
        Self { assets }
    }

    pub fn assets(&self) -> &[VideoAsset] {
        &self.assets
    }
}

impl AssetSource for FixedCatalog {
    fn playable_items(&self, base_dir: &Path) -> Result<Vec<PlayableItem>> {
        if !base_dir.exists() {
            return Err(Error::AssetDirMissing(base_dir.to_path_buf()));
        }

        let mut items = Vec::with_capacity(self.assets.len());
        for asset in &self.assets {
            let folder = base_dir.join(&asset.folder);
            let url = folder.join(&asset.file);

            let mut item = PlayableItem::new(
                url.to_string_lossy().into_owned(),
                asset.title.clone(),
                MediaType::Movie,
            );
            if let Some(year) = asset.year {
                item = item.with_year(year);
            }
            if let Some(poster) = &asset.poster {
                item = item.with_poster(folder.join(poster).to_string_lossy().into_owned());
            }
            items.push(item);
        }
        Ok(items)
    }
}

/// Variant B: every directory entry is a playable file
///
/// File names double as display titles; no year, no poster, media type
/// `video`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryScan;

impl AssetSource for DirectoryScan {
    fn playable_items(&self, base_dir: &Path) -> Result<Vec<PlayableItem>> {
        if !base_dir.exists() {
            return Err(Error::AssetDirMissing(base_dir.to_path_buf()));
        }

        let mut items = Vec::new();
        for entry in std::fs::read_dir(base_dir)? {
            let entry = entry?;
            let title = entry.file_name().to_string_lossy().into_owned();
            let url = entry.path().to_string_lossy().into_owned();
            items.push(PlayableItem::new(url, title, MediaType::Video));
        }
        Ok(items)
    }
}
