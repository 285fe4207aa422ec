//! Point d'entrée du service

use crate::dispatch::dispatch;
use crate::error::Result;
use ambconfig::Config;
use ambhost::HostPlatform;
use ambplaylist::build_playlist_or_empty;
use std::time::Duration;
use tracing::{debug, info};

/// Delay left to the host to tear the HUD window down after dismissal
const WINDOW_TEARDOWN_DELAY: Duration = Duration::from_millis(100);

/// Runs the service for `hostname` against the global configuration
///
/// See [`run_with_config`] for the full sequence.
pub async fn run(hostname: &str, host: &dyn HostPlatform) -> Result<()> {
    run_with_config(hostname, host, &ambconfig::get_config()).await
}

/// Runs the service for `hostname` with an explicit configuration
///
/// Sequence:
/// 1. resolve the HUD variant from the dispatch table (unknown hostnames
///    fall back to the default variant),
/// 2. build a shuffled playlist with the variant's strategy over its
///    category directory — a missing directory logs an error and yields an
///    empty playlist,
/// 3. hand a non-empty playlist to the host playback engine
///    (fire-and-forget),
/// 4. show the modal HUD window and wait until the host dismisses it.
pub async fn run_with_config(
    hostname: &str,
    host: &dyn HostPlatform,
    config: &Config,
) -> Result<()> {
    debug!("Running AmbientHUD service on {hostname}");

    let variant = dispatch(hostname);
    let display_config = variant.display();
    info!(
        hostname,
        variant = variant.name(),
        skin = %display_config.skin_file,
        "Selected HUD variant"
    );

    let base_dir = config.get_category_dir(variant.category());
    let playlist = build_playlist_or_empty(variant.source().as_ref(), &base_dir);

    if playlist.is_empty() {
        info!(dir = %base_dir.display(), "Nothing to play");
    } else {
        host.play_playlist(playlist).await?;
    }

    host.show_modal_hud(&display_config).await?;

    // L'hôte démonte la fenêtre après la fermeture de la modale.
    tokio::time::sleep(WINDOW_TEARDOWN_DELAY).await;

    debug!("Exiting AmbientHUD service");
    Ok(())
}
