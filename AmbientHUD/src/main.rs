use ambhost::ConsoleHost;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ========== PHASE 1 : Configuration et logging ==========

    let config = ambconfig::get_config();

    // RUST_LOG prime sur le niveau configuré.
    let min_level = config
        .get_log_min_level()
        .unwrap_or_else(|_| "INFO".to_string());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(min_level.to_lowercase()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // ========== PHASE 2 : Dispatch et exécution ==========

    let hostname = ambutils::system_hostname().unwrap_or_else(|| "localhost".to_string());
    info!(hostname = %hostname, video_root = %config.get_video_root().display(), "Starting AmbientHUD");

    // Hôte console : journalise les remises de playlist au lieu de piloter
    // un vrai media center.
    let host = ConsoleHost::new();
    ambservice::run(&hostname, &host).await?;

    info!("AmbientHUD finished");
    Ok(())
}
