use ambhost::MediaType;
use ambplaylist::{build_playlist, build_playlist_or_empty, DirectoryScan, FixedCatalog, VideoAsset};
use std::fs;
use tempfile::TempDir;

/// Crée un répertoire de catégorie avec le catalogue Halloween de test
fn halloween_dir() -> (TempDir, FixedCatalog) {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("Scream (1996) [Remastered]");
    fs::create_dir_all(&folder).unwrap();
    fs::write(
        folder.join("Scream 1996 REMASTERED BluRay 1080p DTS AC3 x264-MgB.mkv"),
        b"",
    )
    .unwrap();
    fs::write(
        folder.join("Scream 1996 REMASTERED BluRay 1080p DTS AC3 x264-MgB-poster.jpg"),
        b"",
    )
    .unwrap();

    let catalog = FixedCatalog::new(vec![VideoAsset::new(
        "Scream",
        "Scream (1996) [Remastered]",
        "Scream 1996 REMASTERED BluRay 1080p DTS AC3 x264-MgB.mkv",
    )
    .with_year(1996)
    .with_poster("Scream 1996 REMASTERED BluRay 1080p DTS AC3 x264-MgB-poster.jpg")]);

    (dir, catalog)
}

#[test]
fn fixed_catalog_yields_one_item_with_metadata() {
    let (dir, catalog) = halloween_dir();
    let playlist = build_playlist(&catalog, dir.path()).unwrap();

    assert_eq!(playlist.len(), 1);
    let item = &playlist.items()[0];
    assert_eq!(item.title, "Scream");
    assert_eq!(item.year, Some(1996));
    assert_eq!(item.media_type, MediaType::Movie);

    let expected_path = dir
        .path()
        .join("Scream (1996) [Remastered]")
        .join("Scream 1996 REMASTERED BluRay 1080p DTS AC3 x264-MgB.mkv");
    assert_eq!(item.url, expected_path.to_string_lossy());

    let expected_poster = dir
        .path()
        .join("Scream (1996) [Remastered]")
        .join("Scream 1996 REMASTERED BluRay 1080p DTS AC3 x264-MgB-poster.jpg");
    assert_eq!(item.poster.as_deref(), Some(&*expected_poster.to_string_lossy()));
}

#[test]
fn fixed_catalog_yields_exactly_n_items() {
    let dir = tempfile::tempdir().unwrap();
    let assets: Vec<VideoAsset> = (0..5)
        .map(|i| VideoAsset::new(format!("Movie {i}"), format!("folder{i}"), format!("{i}.mkv")))
        .collect();
    let catalog = FixedCatalog::new(assets);

    // Les chemins sont joints sans vérifier l'existence des fichiers,
    // seul le répertoire de base est contrôlé.
    let playlist = build_playlist(&catalog, dir.path()).unwrap();
    assert_eq!(playlist.len(), 5);
    for item in playlist.items() {
        assert!(item.url.starts_with(&*dir.path().to_string_lossy()));
        assert_eq!(item.media_type, MediaType::Movie);
    }
}

#[test]
fn directory_scan_yields_one_item_per_entry() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["waves.mkv", "sunset.mp4", "pier.mov"] {
        fs::write(dir.path().join(name), b"").unwrap();
    }

    let playlist = build_playlist(&DirectoryScan, dir.path()).unwrap();
    assert_eq!(playlist.len(), 3);

    let mut titles: Vec<_> = playlist.items().iter().map(|i| i.title.clone()).collect();
    titles.sort();
    assert_eq!(titles, vec!["pier.mov", "sunset.mp4", "waves.mkv"]);

    for item in playlist.items() {
        assert_eq!(item.media_type, MediaType::Video);
        assert!(item.url.ends_with(&item.title));
        assert_eq!(item.year, None);
        assert_eq!(item.poster, None);
    }
}

#[test]
fn directory_scan_empty_dir_is_empty_playlist() {
    let dir = tempfile::tempdir().unwrap();
    let playlist = build_playlist(&DirectoryScan, dir.path()).unwrap();
    assert!(playlist.is_empty());
}

#[test]
fn missing_dir_is_soft_failure() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("gone");

    let playlist = build_playlist_or_empty(&DirectoryScan, &missing);
    assert!(playlist.is_empty());

    let (_, catalog) = halloween_dir();
    let playlist = build_playlist_or_empty(&catalog, &missing);
    assert!(playlist.is_empty());
}
