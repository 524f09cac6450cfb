//! Side effects requested by the event handler.
//!
//! The handler mutates [`AppState`](crate::app::AppState) directly and returns
//! `Vec<Action>` for everything that must go through the host: hiding the pane
//! and retitling it. The plugin shim executes them in order.
//!
//! # Example
//!
//! ```
//! use neonfeed::app::{handle_event, Action, AppState, Event};
//! use neonfeed::app::modes::NavTab;
//! use neonfeed::dataset::Dataset;
//! use neonfeed::ui::Theme;
//!
//! let mut state = AppState::new(Dataset::builtin().unwrap(), Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::Navigate(NavTab::Settings)).unwrap();
//! assert_eq!(actions, vec![Action::RenamePane { title: "neonfeed: Settings".to_string() }]);
//! ```

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane. Sent when the user presses `q`.
    CloseFocus,

    /// Retitles the plugin pane after the active view changed.
    RenamePane {
        /// New pane title, e.g. "neonfeed: Notifications".
        title: String,
    },
}

impl Action {
    /// The rename action for a view title.
    #[must_use]
    pub fn rename_for(view_title: &str) -> Self {
        Self::RenamePane {
            title: format!("neonfeed: {view_title}"),
        }
    }
}
