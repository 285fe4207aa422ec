//! Table de correspondance hostname → variante de HUD

use crate::hud::HudVariant;

/// Variant used for every hostname missing from [`HOST_TABLE`]
///
/// The fallback is deliberate: a new machine gets the default HUD, not an
/// error.
pub const DEFAULT_VARIANT: HudVariant = HudVariant::Halloween;

/// Known machines and their HUD variants, matched by exact hostname
pub const HOST_TABLE: &[(&str, HudVariant)] = &[
    ("cinder", HudVariant::Halloween),
    ("lenovo", HudVariant::Vertical),
    ("substation", HudVariant::Lab),
];

/// Resolves the HUD variant for a hostname
pub fn dispatch(hostname: &str) -> HudVariant {
    HOST_TABLE
        .iter()
        .find(|(name, _)| *name == hostname)
        .map(|(_, variant)| *variant)
        .unwrap_or(DEFAULT_VARIANT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_hostnames() {
        assert_eq!(dispatch("cinder"), HudVariant::Halloween);
        assert_eq!(dispatch("lenovo"), HudVariant::Vertical);
        assert_eq!(dispatch("substation"), HudVariant::Lab);
    }

    #[test]
    fn test_unknown_hostname_falls_back() {
        assert_eq!(dispatch("garage-pi"), DEFAULT_VARIANT);
        assert_eq!(dispatch(""), DEFAULT_VARIANT);
    }

    #[test]
    fn test_match_is_exact() {
        // Ni préfixe ni casse approchante ne doivent matcher.
        assert_eq!(dispatch("cinder2"), DEFAULT_VARIANT);
        assert_eq!(dispatch("Cinder"), DEFAULT_VARIANT);
        assert_eq!(dispatch("lenovo "), DEFAULT_VARIANT);
    }
}
