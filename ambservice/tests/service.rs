use ambconfig::Config;
use ambhost::{ConsoleHost, MediaType};
use ambservice::run_with_config;
use std::fs;
use tempfile::TempDir;

/// Configuration isolée pointant sur un répertoire vidéo temporaire
fn test_setup() -> (TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_config(dir.path().join("conf").to_str().unwrap()).unwrap();
    let video_root = dir.path().join("Videos");
    fs::create_dir_all(&video_root).unwrap();
    config.set_video_root(video_root.to_str().unwrap()).unwrap();
    (dir, config)
}

fn populate_halloween(dir: &TempDir) {
    let folder = dir
        .path()
        .join("Videos")
        .join("Halloween")
        .join("Scream (1996) [Remastered]");
    fs::create_dir_all(&folder).unwrap();
    fs::write(
        folder.join("Scream 1996 REMASTERED BluRay 1080p DTS AC3 x264-MgB.mkv"),
        b"",
    )
    .unwrap();
}

#[tokio::test]
async fn known_hostname_plays_halloween_catalog() {
    let (dir, config) = test_setup();
    populate_halloween(&dir);

    let host = ConsoleHost::new();
    run_with_config("cinder", &host, &config).await.unwrap();

    let played = host.played_playlists();
    assert_eq!(played.len(), 1);
    assert_eq!(played[0].len(), 1);

    let item = &played[0].items()[0];
    assert_eq!(item.title, "Scream");
    assert_eq!(item.year, Some(1996));
    assert_eq!(item.media_type, MediaType::Movie);

    let expected_path = dir
        .path()
        .join("Videos")
        .join("Halloween")
        .join("Scream (1996) [Remastered]")
        .join("Scream 1996 REMASTERED BluRay 1080p DTS AC3 x264-MgB.mkv");
    assert_eq!(item.url, expected_path.to_string_lossy());
}

#[tokio::test]
async fn unknown_hostname_uses_default_variant() {
    let (dir, config) = test_setup();
    populate_halloween(&dir);

    let host = ConsoleHost::new();
    run_with_config("some-new-machine", &host, &config)
        .await
        .unwrap();

    // Le fallback joue le même catalogue Halloween que la variante par défaut.
    let played = host.played_playlists();
    assert_eq!(played.len(), 1);
    assert_eq!(played[0].items()[0].title, "Scream");
}

#[tokio::test]
async fn ventura_variant_scans_directory() {
    let (dir, config) = test_setup();
    let ventura = dir.path().join("Videos").join("Ventura");
    fs::create_dir_all(&ventura).unwrap();
    for name in ["waves.mkv", "sunset.mp4"] {
        fs::write(ventura.join(name), b"").unwrap();
    }

    // Ventura n'est atteignable que par surcharge de la table ; on exerce la
    // variante directement via sa stratégie déclarée.
    use ambplaylist::build_playlist_or_empty;
    let variant = ambservice::HudVariant::Ventura;
    let playlist = build_playlist_or_empty(
        variant.source().as_ref(),
        &config.get_category_dir(variant.category()),
    );

    assert_eq!(playlist.len(), 2);
    let mut titles: Vec<_> = playlist.items().iter().map(|i| i.title.clone()).collect();
    titles.sort();
    assert_eq!(titles, vec!["sunset.mp4", "waves.mkv"]);
}

#[tokio::test]
async fn missing_asset_dir_skips_playback() {
    // Pas de répertoire Halloween : le service doit quand même dérouler la
    // modale et rendre la main sans erreur.
    let (_dir, config) = test_setup();

    let host = ConsoleHost::new();
    run_with_config("cinder", &host, &config).await.unwrap();

    assert!(host.played_playlists().is_empty());
}
