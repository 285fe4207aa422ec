//! Types d'erreurs pour ambplaylist

use std::path::PathBuf;

/// Erreurs de construction de playlist
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Asset directory does not exist: {}", .0.display())]
    AssetDirMissing(PathBuf),

    #[error("Failed to read asset directory: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Type Result spécialisé pour ambplaylist
pub type Result<T> = std::result::Result<T, Error>;
