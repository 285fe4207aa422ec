//! Console implementation of `HostPlatform`
//!
//! Logs every hand-off instead of driving a real media center. Doubles as
//! the observation point for tests: received playlists are recorded and can
//! be inspected afterwards.

use crate::error::Result;
use crate::item::Playlist;
use crate::platform::{DisplayConfig, HostPlatform};
use async_trait::async_trait;
use std::sync::Mutex;
use tracing::{debug, info};

/// Host implementation backed by the log output only
#[derive(Debug, Default)]
pub struct ConsoleHost {
    played: Mutex<Vec<Playlist>>,
}

impl ConsoleHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Playlists received so far, in hand-off order
    pub fn played_playlists(&self) -> Vec<Playlist> {
        self.played.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostPlatform for ConsoleHost {
    async fn play_playlist(&self, playlist: Playlist) -> Result<()> {
        info!(items = playlist.len(), "Playlist handed to playback engine");
        for item in playlist.items() {
            debug!(
                title = %item.title,
                media_type = %item.media_type,
                year = ?item.year,
                url = %item.url,
                "Queued item"
            );
        }
        self.played.lock().unwrap().push(playlist);
        Ok(())
    }

    async fn show_modal_hud(&self, display_config: &DisplayConfig) -> Result<()> {
        info!(
            skin = %display_config.skin_file,
            profile = %display_config.profile,
            resolution = %display_config.resolution,
            fullscreen = display_config.fullscreen,
            "Modal HUD opened"
        );
        // Pas de fenêtre réelle : la modale est refermée immédiatement.
        info!(skin = %display_config.skin_file, "Modal HUD dismissed");
        Ok(())
    }
}
