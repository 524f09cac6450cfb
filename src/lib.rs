//! neonfeed: a social feed browser for Zellij.
//!
//! neonfeed renders a mock social network inside a Zellij pane:
//! - A home feed with stories, likes, saves and a post actions menu
//! - Search across people, posts and trending tags with match highlighting
//! - Notifications with category filters and read tracking
//! - Conversations, a profile with posts/saved/tagged tabs, and settings
//!
//! All engagement (liked, saved, following, read) is session-local and held
//! in a single [`EngagementStore`], so every view agrees on it at every frame.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Key mapping
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and navigation history            │
//! │  - Filters and match highlighting                   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Engagement    │   │ Dataset       │
//! │ (ui/)         │   │ (engagement/) │   │ (dataset/)    │
//! │ - Rendering   │   │ - Toggle sets │   │ - Embedded    │
//! │ - Theming     │   │ - Read state  │   │   mock JSON   │
//! │ - Components  │   │ - Filters     │   │ - Lookups     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Records, formatting, errors (domain/)            │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/neonfeed.wasm" {
//!         start_view "notifications"
//!         theme "catppuccin-mocha"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use neonfeed::{handle_event, initialize, Config, Event};
//! use neonfeed::engagement::EntityKind;
//!
//! let mut state = initialize(&Config::default())?;
//! handle_event(&mut state, &Event::ToggleLike)?;
//! assert!(state.store.is_on(EntityKind::Like, 1));
//! # Ok::<(), neonfeed::NeonfeedError>(())
//! ```

pub mod app;
pub mod dataset;
pub mod domain;
pub mod engagement;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, NavTab, View};
pub use dataset::Dataset;
pub use domain::{NeonfeedError, Result};
pub use engagement::{EngagementStore, EntityKind};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration map.
///
/// ```kdl
/// plugin location="file:/path/to/neonfeed.wasm" {
///     start_view "search"
///     theme "neon-night"
///     theme_file "~/.config/neonfeed/theme.toml"
///     trace_level "neonfeed=debug"
///     username "mayapatel"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// View shown when the plugin loads. Default: [`View::Home`]
    pub start_view: View,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` maps to the sandbox `/host`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for traces. Default: `"info"`
    pub trace_level: Option<String>,

    /// Handle whose profile counts as "own". Default: the dataset's user.
    pub username: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_view: View::Home,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            username: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored and an invalid `start_view` falls back to
    /// Home with a warning. Blank values count as unset.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use neonfeed::{Config, View};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("start_view".to_string(), "Settings".to_string());
    /// map.insert("username".to_string(), "@mayapatel".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.start_view, View::Settings);
    /// assert_eq!(config.username.as_deref(), Some("mayapatel"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let start_view = value("start_view").map_or(View::Home, |raw| {
            parse_start_view(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring start_view");
                View::Home
            })
        });

        Self {
            start_view,
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
            username: value("username").map(|u| u.trim_start_matches('@').to_string()),
        }
    }

    /// Resolves the configured theme: file first, then name, then default.
    ///
    /// Failures are logged and fall back to the default theme.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(file) = &self.theme_file {
            let path = infrastructure::expand_tilde(file);
            match Theme::from_file(&path) {
                Ok(theme) => return theme,
                Err(e) => tracing::warn!(theme_file = %path, error = %e, "using default theme"),
            }
        } else if let Some(name) = &self.theme_name {
            match Theme::from_name(name) {
                Some(theme) => return theme,
                None => tracing::warn!(theme = %name, "unknown theme, using default"),
            }
        }
        Theme::default()
    }
}

/// Parses a `start_view` value such as `"notifications"`.
///
/// # Errors
///
/// Returns [`NeonfeedError::Config`] if the value names no navigation tab.
pub fn parse_start_view(value: &str) -> Result<View> {
    View::from_config(value).ok_or_else(|| {
        NeonfeedError::Config(format!(
            "start_view must be one of home, search, notifications, messages, profile, settings (got {value:?})"
        ))
    })
}

/// Builds the initial application state from configuration.
///
/// Loads the embedded dataset, resolves the theme, applies `username` when it
/// names a known person, and opens `start_view`.
///
/// # Errors
///
/// Returns [`NeonfeedError::Dataset`] if the embedded dataset fails to parse.
///
/// # Example
///
/// ```
/// use neonfeed::{initialize, Config, View};
///
/// let config = Config { start_view: View::Messages, ..Default::default() };
/// let state = initialize(&config)?;
/// assert_eq!(state.view, View::Messages);
/// # Ok::<(), neonfeed::NeonfeedError>(())
/// ```
pub fn initialize(config: &Config) -> Result<AppState> {
    let _span = tracing::debug_span!("initialize", start_view = ?config.start_view).entered();

    let mut dataset = Dataset::builtin()?;
    if let Some(username) = &config.username {
        if dataset.person_by_username(username).is_some() {
            dataset.current_user.clone_from(username);
        } else {
            let err = NeonfeedError::NotFound {
                kind: "person",
                key: username.clone(),
            };
            tracing::warn!(error = %err, "ignoring username");
        }
    }

    let mut state = AppState::new(dataset, config.load_theme());
    state.view = config.start_view.clone();

    tracing::info!(
        user = %state.current_user(),
        theme = %state.theme.name,
        "neonfeed initialized"
    );
    Ok(state)
}
