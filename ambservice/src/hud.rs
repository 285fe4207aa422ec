//! HUD variants: window configuration plus playlist strategy
//!
//! A variant is the unit the dispatcher selects. It knows which skin file
//! the host should render, which video category feeds it, and which of the
//! two playlist strategies builds the queue.

use ambhost::DisplayConfig;
use ambplaylist::{AssetSource, DirectoryScan, FixedCatalog, VideoAsset};

/// The named HUD variants a machine can be dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudVariant {
    /// Horizontal Halloween HUD over the fixed movie catalogue
    Halloween,
    /// Vertical-screen layout of the Halloween HUD
    Vertical,
    /// Lab-wall layout of the Halloween HUD
    Lab,
    /// Ventura HUD playing whatever the Ventura directory holds
    Ventura,
}

impl HudVariant {
    /// Stable variant name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            HudVariant::Halloween => "halloween",
            HudVariant::Vertical => "vertical",
            HudVariant::Lab => "lab",
            HudVariant::Ventura => "ventura",
        }
    }

    /// Window configuration handed to the host
    pub fn display(&self) -> DisplayConfig {
        match self {
            HudVariant::Halloween => DisplayConfig::windowed("HalloweenHUD.xml"),
            HudVariant::Vertical => DisplayConfig::windowed("VerticalHUD.xml"),
            HudVariant::Lab => DisplayConfig::windowed("LabHUD.xml"),
            HudVariant::Ventura => DisplayConfig::windowed("VenturaHUD.xml"),
        }
    }

    /// Video category whose directory feeds the playlist
    pub fn category(&self) -> &'static str {
        match self {
            HudVariant::Halloween | HudVariant::Vertical | HudVariant::Lab => "Halloween",
            HudVariant::Ventura => "Ventura",
        }
    }

    /// Playlist strategy for the variant
    pub fn source(&self) -> Box<dyn AssetSource> {
        match self {
            HudVariant::Halloween | HudVariant::Vertical | HudVariant::Lab => {
                Box::new(halloween_catalog())
            }
            HudVariant::Ventura => Box::new(DirectoryScan),
        }
    }
}

/// The fixed Halloween movie catalogue
///
/// Folder and file names match the release layout on disk under
/// `<video root>/Halloween/`.
pub fn halloween_catalog() -> FixedCatalog {
    FixedCatalog::new(vec![
        VideoAsset::new(
            "Scream",
            "Scream (1996) [Remastered]",
            "Scream 1996 REMASTERED BluRay 1080p DTS AC3 x264-MgB.mkv",
        )
        .with_year(1996)
        .with_poster("Scream 1996 REMASTERED BluRay 1080p DTS AC3 x264-MgB-poster.jpg"),
        // VideoAsset::new(
        //     "Jaws",
        //     "Jaws (1975) [Remastered]",
        //     "Jaws 1975 Remastered -  Eng Subs 1080p [H264-mp4].mp4",
        // )
        // .with_year(1975)
        // .with_poster("Jaws 1975 Remastered -  Eng Subs 1080p [H264-mp4]-poster.jpg"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_skins() {
        assert_eq!(HudVariant::Halloween.display().skin_file, "HalloweenHUD.xml");
        assert_eq!(HudVariant::Vertical.display().skin_file, "VerticalHUD.xml");
        assert_eq!(HudVariant::Lab.display().skin_file, "LabHUD.xml");
        assert_eq!(HudVariant::Ventura.display().skin_file, "VenturaHUD.xml");
    }

    #[test]
    fn test_variant_display_tuple() {
        for variant in [
            HudVariant::Halloween,
            HudVariant::Vertical,
            HudVariant::Lab,
            HudVariant::Ventura,
        ] {
            let display = variant.display();
            assert_eq!(display.profile, "default");
            assert_eq!(display.resolution, "1080i");
            assert!(!display.fullscreen);
        }
    }

    #[test]
    fn test_variant_categories() {
        assert_eq!(HudVariant::Halloween.category(), "Halloween");
        assert_eq!(HudVariant::Vertical.category(), "Halloween");
        assert_eq!(HudVariant::Lab.category(), "Halloween");
        assert_eq!(HudVariant::Ventura.category(), "Ventura");
    }

    #[test]
    fn test_halloween_catalog_contents() {
        let catalog = halloween_catalog();
        assert_eq!(catalog.assets().len(), 1);
        let scream = &catalog.assets()[0];
        assert_eq!(scream.title, "Scream");
        assert_eq!(scream.year, Some(1996));
        assert_eq!(scream.folder, "Scream (1996) [Remastered]");
        assert!(scream.poster.is_some());
    }
}
