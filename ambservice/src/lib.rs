//! # ambservice
//!
//! Service entry point and hostname dispatch for AmbientHUD.
//!
//! Each machine runs the same binary; the hostname decides which HUD variant
//! it gets. A variant bundles a window configuration (skin, profile,
//! resolution, fullscreen flag) with a playlist strategy over a video
//! category directory. The dispatch table is explicit enumerated data so
//! adding a machine or a variant is a data change, not new control flow.
//!
//! Unknown hostnames deliberately fall back to the default variant; there is
//! no error path for an unrecognized machine.
//!
//! # Example
//!
//! ```no_run
//! use ambhost::ConsoleHost;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> ambservice::Result<()> {
//! let host = ConsoleHost::new();
//! ambservice::run("cinder", &host).await?;
//! # Ok(())
//! # }
//! ```

mod dispatch;
mod error;
mod hud;
mod service;

// Réexports publics
pub use dispatch::{dispatch, DEFAULT_VARIANT, HOST_TABLE};
pub use error::{Error, Result};
pub use hud::{halloween_catalog, HudVariant};
pub use service::{run, run_with_config};
