//! # ambplaylist
//!
//! Playlist construction for AmbientHUD.
//!
//! A HUD variant binds a video category to one of two strategies, both
//! behind the same `AssetSource` contract ("produce an ordered list of
//! playable items"):
//!
//! - **FixedCatalog**: a hardcoded list of [`VideoAsset`] descriptors whose
//!   paths are resolved against the category directory and whose metadata
//!   (title, year, poster, media type) is attached to each item.
//! - **DirectoryScan**: every entry of the category directory becomes a
//!   playable item, file name as title, no external metadata.
//!
//! [`build_playlist`] collects the items and shuffles them once with a
//! uniform random permutation; there is no seed control and no determinism
//! guarantee. A missing category directory is a soft failure:
//! [`build_playlist_or_empty`] logs it at error severity and returns an
//! empty playlist instead of propagating.
//!
//! # Example
//!
//! ```no_run
//! use ambplaylist::{build_playlist_or_empty, DirectoryScan};
//! use std::path::Path;
//!
//! let playlist = build_playlist_or_empty(&DirectoryScan, Path::new("/home/user/Videos/Ventura"));
//! println!("{} item(s) queued", playlist.len());
//! ```

mod asset;
mod builder;
mod error;
mod source;

// Réexports publics
pub use asset::VideoAsset;
pub use builder::{build_playlist, build_playlist_or_empty, shuffle_items};
pub use error::{Error, Result};
pub use source::{AssetSource, DirectoryScan, FixedCatalog};
