//! System introspection helpers for AmbientHUD.
//!
//! The service selects its HUD variant from the machine's hostname, so the
//! only job of this crate is to answer "what machine am I running on?" in a
//! portable way.

use sysinfo::System;

/// Returns the hostname of the running machine, if the platform exposes one.
///
/// Uses the `sysinfo` crate to query the OS. The result is trimmed; an empty
/// hostname is reported as `None` so callers fall back to their default.
///
/// # Examples
///
/// ```
/// let hostname = ambutils::system_hostname().unwrap_or_else(|| "localhost".to_string());
/// println!("Running on {}", hostname);
/// ```
pub fn system_hostname() -> Option<String> {
    let name = System::host_name()?;
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
