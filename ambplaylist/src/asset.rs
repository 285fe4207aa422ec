//! Catalogue descriptors for fixed-catalog HUD variants

/// One catalogued video asset
///
/// Immutable configuration data: the descriptor names a folder and file
/// under a category directory plus the metadata to attach when the asset is
/// queued. Paths are resolved at playlist-build time, never stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoAsset {
    /// Display title (e.g. `"Scream"`)
    pub title: String,
    /// Release year, when known
    pub year: Option<u32>,
    /// Folder name under the category directory
    pub folder: String,
    /// Media file name inside the folder
    pub file: String,
    /// Poster image file name inside the folder, when one exists
    pub poster: Option<String>,
}

impl VideoAsset {
    pub fn new(title: impl Into<String>, folder: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: None,
            folder: folder.into(),
            file: file.into(),
            poster: None,
        }
    }

    /// Attaches a release year
    pub fn with_year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Attaches a poster image file name
    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_builder() {
        let asset = VideoAsset::new("Scream", "Scream (1996) [Remastered]", "scream.mkv")
            .with_year(1996)
            .with_poster("scream-poster.jpg");
        assert_eq!(asset.title, "Scream");
        assert_eq!(asset.year, Some(1996));
        assert_eq!(asset.poster.as_deref(), Some("scream-poster.jpg"));
    }
}
