//! # ambhost
//!
//! Host-platform boundary for AmbientHUD.
//!
//! The media-center host owns windowing, video decoding and playlist
//! execution. This crate defines the narrow contract AmbientHUD uses to talk
//! to it, plus the data types that cross that boundary:
//!
//! - **PlayableItem / Playlist**: ordered playable entries with metadata
//!   (title, year, media type, poster art).
//! - **DisplayConfig**: the skin/profile/resolution tuple a HUD window is
//!   opened with.
//! - **HostPlatform**: async trait with two operations, `play_playlist`
//!   (fire-and-forget hand-off) and `show_modal_hud` (resolves when the host
//!   dismisses the window).
//! - **ConsoleHost**: reference implementation that logs every call and
//!   records playlists, used by the dry-run binary and the test suites.
//!
//! Nothing in here renders or plays anything; implementations bind to a real
//! host, the console, or a test double.

mod console;
mod error;
mod item;
mod platform;

// Réexports publics
pub use async_trait::async_trait;
pub use console::ConsoleHost;
pub use error::{Error, Result};
pub use item::{MediaType, PlayableItem, Playlist};
pub use platform::{DisplayConfig, HostPlatform};
