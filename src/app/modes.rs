//! View, tab and input mode types.
//!
//! These enums form the navigation state machine: which view is active, which
//! tab or filter inside it is selected, and whether keystrokes are commands or
//! text for an input field.
//!
//! # Example
//!
//! ```
//! use neonfeed::app::modes::{InputMode, NavTab, TextTarget, View};
//!
//! let view = NavTab::Notifications.view();
//! assert_eq!(view, View::Notifications);
//! assert_eq!(view.nav_tab(), Some(NavTab::Notifications));
//!
//! let mode = InputMode::Typing(TextTarget::SearchQuery);
//! assert!(mode.is_typing());
//! ```

/// A screen of the application.
///
/// Detail views carry only an identifier; the entity is looked up in the
/// dataset when the view model is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    Search,
    Notifications,
    Messages,
    /// A profile by handle. `None` is the signed-in user's own profile.
    Profile(Option<String>),
    Settings,
    /// Post detail by post id.
    Post(u64),
    /// Content warning shown before a sensitive post.
    ContentWarning(u64),
}

impl View {
    /// The nav tab highlighted while this view is active.
    ///
    /// Detail views (post, content warning, another user's profile) have no
    /// tab of their own.
    #[must_use]
    pub fn nav_tab(&self) -> Option<NavTab> {
        match self {
            Self::Home => Some(NavTab::Home),
            Self::Search => Some(NavTab::Search),
            Self::Notifications => Some(NavTab::Notifications),
            Self::Messages => Some(NavTab::Messages),
            Self::Profile(None) => Some(NavTab::Profile),
            Self::Settings => Some(NavTab::Settings),
            Self::Profile(Some(_)) | Self::Post(_) | Self::ContentWarning(_) => None,
        }
    }

    /// Human-readable title used for the header and pane name.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Profile(Some(handle)) => format!("@{handle}"),
            Self::Post(_) => "Post".to_string(),
            Self::ContentWarning(_) => "Content Warning".to_string(),
            other => other
                .nav_tab()
                .map_or_else(String::new, |tab| tab.label().to_string()),
        }
    }

    /// Parses a `start_view` configuration value.
    #[must_use]
    pub fn from_config(value: &str) -> Option<Self> {
        NavTab::ALL
            .iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(value.trim()))
            .map(|tab| tab.view())
    }
}

/// The six primary navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTab {
    Home,
    Search,
    Notifications,
    Messages,
    Profile,
    Settings,
}

impl NavTab {
    /// Tabs in display order. Position `n` is bound to key `n + 1`.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Search,
        Self::Notifications,
        Self::Messages,
        Self::Profile,
        Self::Settings,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Search => "Search",
            Self::Notifications => "Notifications",
            Self::Messages => "Messages",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
        }
    }

    /// Maps a 1-based number key to its tab.
    #[must_use]
    pub fn from_index(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// The root view this tab opens.
    #[must_use]
    pub const fn view(self) -> View {
        match self {
            Self::Home => View::Home,
            Self::Search => View::Search,
            Self::Notifications => View::Notifications,
            Self::Messages => View::Messages,
            Self::Profile => View::Profile(None),
            Self::Settings => View::Settings,
        }
    }
}

/// Which text buffer receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget {
    /// The search view's query.
    SearchQuery,
    /// The messages view's conversation filter.
    MessageQuery,
    /// The comment draft on the post detail view.
    CommentDraft,
}

/// Current input handling mode.
///
/// In `Normal` mode letters are commands; in `Typing` mode they go to the
/// targeted buffer and only Enter, Esc and Backspace keep special meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Typing(TextTarget),
}

impl InputMode {
    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Typing(_))
    }
}

/// Result tabs on the search view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchTab {
    /// Matching people followed by matching posts.
    #[default]
    Top,
    Posts,
    People,
    Tags,
}

impl SearchTab {
    pub const ALL: [Self; 4] = [Self::Top, Self::Posts, Self::People, Self::Tags];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Posts => "Posts",
            Self::People => "People",
            Self::Tags => "Tags",
        }
    }
}

/// Content tabs on a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Posts,
    /// Posts in the save-set. Only visible on the signed-in user's profile.
    Saved,
    /// Posts the profile owner is tagged in.
    Tagged,
}

impl ProfileTab {
    pub const ALL: [Self; 3] = [Self::Posts, Self::Saved, Self::Tagged];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Saved => "saved",
            Self::Tagged => "tagged",
        }
    }
}

/// Entries of the post actions overlay, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    ViewPost,
    ViewProfile,
    Like,
    Save,
    Close,
}

impl PostAction {
    pub const ALL: [Self; 5] = [
        Self::ViewPost,
        Self::ViewProfile,
        Self::Like,
        Self::Save,
        Self::Close,
    ];
}

/// A modal drawn over the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Actions for one post, with the cursor on `ALL[selected]`.
    PostActions { post_id: u64, selected: usize },
}

/// Steps to the neighbour of `current` in `all`, wrapping at both ends.
///
/// Returns `current` unchanged if it is not in `all`.
#[must_use]
pub fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let Some(pos) = all.iter().position(|t| *t == current) else {
        return current;
    };
    let len = all.len();
    let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
    all[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keys_map_to_tabs() {
        assert_eq!(NavTab::from_index(1), Some(NavTab::Home));
        assert_eq!(NavTab::from_index(6), Some(NavTab::Settings));
        assert_eq!(NavTab::from_index(0), None);
        assert_eq!(NavTab::from_index(7), None);
    }

    #[test]
    fn cycle_wraps_both_ways() {
        assert_eq!(cycle(&SearchTab::ALL, SearchTab::Tags, true), SearchTab::Top);
        assert_eq!(cycle(&SearchTab::ALL, SearchTab::Top, false), SearchTab::Tags);
        assert_eq!(cycle(&ProfileTab::ALL, ProfileTab::Posts, true), ProfileTab::Saved);
    }

    #[test]
    fn start_view_parsing_is_case_insensitive() {
        assert_eq!(View::from_config("Notifications"), Some(View::Notifications));
        assert_eq!(View::from_config("profile"), Some(View::Profile(None)));
        assert_eq!(View::from_config("inbox"), None);
    }

    #[test]
    fn detail_views_have_no_nav_tab() {
        assert_eq!(View::Post(1).nav_tab(), None);
        assert_eq!(View::Profile(Some("mayapatel".into())).nav_tab(), None);
        assert_eq!(View::Profile(Some("mayapatel".into())).title(), "@mayapatel");
    }
}
