//! Types d'erreurs pour ambhost

/// Erreurs remontées par une implémentation de `HostPlatform`
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Host platform not available: {0}")]
    HostUnavailable(String),

    #[error("Window error: {0}")]
    WindowError(String),

    #[error("Playback error: {0}")]
    PlaybackError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Type Result spécialisé pour ambhost
pub type Result<T> = std::result::Result<T, Error>;
