//! Playable items and playlists handed to the host platform

use std::fmt;

/// Media type attached to a playable item
///
/// Matches the canonical lowercase names the host's info tags expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// A catalogued feature film
    Movie,
    /// A plain video file without catalogue metadata
    Video,
}

impl MediaType {
    /// Canonical lowercase name (`"movie"`, `"video"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Video => "video",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One playable entry in a playlist
///
/// Built by a playlist strategy, consumed by the host playback engine. The
/// `url` is the absolute path of the media file; the optional `poster` is the
/// absolute path of its poster image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayableItem {
    pub url: String,
    pub title: String,
    pub media_type: MediaType,
    pub year: Option<u32>,
    pub poster: Option<String>,
}

impl PlayableItem {
    /// Creates an item without year or poster art
    pub fn new(url: impl Into<String>, title: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            media_type,
            year: None,
            poster: None,
        }
    }

    /// Attaches a release year
    pub fn with_year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Attaches a poster image path
    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }
}

/// Ordered sequence of playable items
///
/// Owned and consumed entirely by the host playback engine after hand-off;
/// the service keeps no control over its lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    items: Vec<PlayableItem>,
}

impl Playlist {
    /// Creates an empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already ordered list of items
    pub fn from_items(items: Vec<PlayableItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[PlayableItem] {
        &self.items
    }

    /// Consumes the playlist, yielding its items in order
    pub fn into_items(self) -> Vec<PlayableItem> {
        self.items
    }
}

impl FromIterator<PlayableItem> for Playlist {
    fn from_iter<I: IntoIterator<Item = PlayableItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
