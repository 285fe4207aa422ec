//! Types d'erreurs pour ambservice

/// Erreurs du service AmbientHUD
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Host(#[from] ambhost::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Type Result spécialisé pour ambservice
pub type Result<T> = std::result::Result<T, Error>;
