//! Assemblage et mélange des playlists

use crate::error::{Error, Result};
use crate::source::AssetSource;
use ambhost::{PlayableItem, Playlist};
use rand::seq::SliceRandom;
use tracing::{debug, error};

/// Shuffles items in place with a uniform random permutation
///
/// One-time randomization, no seed control: two invocations over the same
/// items will generally produce different orders.
pub fn shuffle_items(items: &mut [PlayableItem]) {
    let mut rng = rand::rng();
    items.shuffle(&mut rng);
}

/// Builds a shuffled playlist from `source` over `base_dir`
///
/// Collects the ordered items, shuffles them once, and wraps them. Errors
/// (missing directory, unreadable directory) are propagated; see
/// [`build_playlist_or_empty`] for the soft-fail variant the service uses.
pub fn build_playlist(source: &dyn AssetSource, base_dir: &std::path::Path) -> Result<Playlist> {
    let mut items = source.playable_items(base_dir)?;
    shuffle_items(&mut items);
    debug!(items = items.len(), dir = %base_dir.display(), "Built playlist");
    Ok(Playlist::from_items(items))
}

/// Builds a shuffled playlist, treating every failure as "nothing to play"
///
/// A missing asset directory is logged at error severity and yields an empty
/// playlist; the caller skips playback and carries on. Nothing is ever
/// propagated from here.
pub fn build_playlist_or_empty(source: &dyn AssetSource, base_dir: &std::path::Path) -> Playlist {
    match build_playlist(source, base_dir) {
        Ok(playlist) => playlist,
        Err(Error::AssetDirMissing(path)) => {
            error!("Asset directory does not exist: {}", path.display());
            Playlist::new()
        }
        Err(err) => {
            error!(dir = %base_dir.display(), "Failed to build playlist: {err}");
            Playlist::new()
        }
    }
}
