//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is reachable under `/host`, which
//! maps to the directory Zellij was started from (normally `$HOME`).

use std::path::PathBuf;

/// Returns the directory holding neonfeed's trace log.
///
/// # Examples
///
/// ```
/// use neonfeed::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/neonfeed"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("neonfeed")
}

/// Rewrites a leading `~` to the sandbox's `/host` mount.
///
/// Used for the `theme_file` option so users can write `~/themes/x.toml`.
///
/// # Examples
///
/// ```
/// use neonfeed::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/neon.toml"), "/host/themes/neon.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("~bob/x"), "~bob/x");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}
