//! The `HostPlatform` trait and the window configuration it consumes

use crate::error::Result;
use crate::item::Playlist;
use async_trait::async_trait;

/// Window configuration for a HUD variant
///
/// One is selected per invocation from the hostname dispatch table and stays
/// immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Skin XML file the host renders the window from
    pub skin_file: String,
    /// Skin profile name
    pub profile: String,
    /// Display resolution the skin was authored for (e.g. `"1080i"`)
    pub resolution: String,
    /// Whether the window is opened fullscreen
    pub fullscreen: bool,
}

impl DisplayConfig {
    pub fn new(
        skin_file: impl Into<String>,
        profile: impl Into<String>,
        resolution: impl Into<String>,
        fullscreen: bool,
    ) -> Self {
        Self {
            skin_file: skin_file.into(),
            profile: profile.into(),
            resolution: resolution.into(),
            fullscreen,
        }
    }

    /// Windowed 1080i configuration with the default profile
    pub fn windowed(skin_file: impl Into<String>) -> Self {
        Self::new(skin_file, "default", "1080i", false)
    }
}

/// Contract with the external media-center host
///
/// The host owns windowing, decoding and playlist execution; this trait is
/// the whole surface AmbientHUD uses. Implementations must be `Send + Sync`
/// so the service can hold them behind an `Arc`.
///
/// # Examples
///
/// ```
/// use ambhost::{async_trait, DisplayConfig, HostPlatform, Playlist, Result};
///
/// #[derive(Debug)]
/// struct NoopHost;
///
/// #[async_trait]
/// impl HostPlatform for NoopHost {
///     async fn play_playlist(&self, _playlist: Playlist) -> Result<()> {
///         Ok(())
///     }
///
///     async fn show_modal_hud(&self, _display: &DisplayConfig) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait HostPlatform: Send + Sync + std::fmt::Debug {
    /// Hands a playlist to the host playback engine
    ///
    /// Fire-and-forget: resolves once the host has accepted the playlist.
    /// No control over playback progress, completion or errors is retained.
    async fn play_playlist(&self, playlist: Playlist) -> Result<()>;

    /// Opens the HUD window described by `display` and waits until the host
    /// dismisses it
    async fn show_modal_hud(&self, display: &DisplayConfig) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windowed_defaults() {
        let display = DisplayConfig::windowed("HalloweenHUD.xml");
        assert_eq!(display.skin_file, "HalloweenHUD.xml");
        assert_eq!(display.profile, "default");
        assert_eq!(display.resolution, "1080i");
        assert!(!display.fullscreen);
    }
}
