//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) by
//! `compute_viewmodel` and consumed by the renderer. They hold display-ready
//! strings and flags only: every derived boolean (liked, saved, following,
//! read) has already been resolved against the engagement store, so the
//! renderer never consults session state.
//!
//! # Example
//!
//! ```
//! use neonfeed::ui::viewmodel::{DisplayItem, Marker};
//!
//! let item = DisplayItem {
//!     title: "Maya Patel".to_string(),
//!     detail: "Design is not decoration.".to_string(),
//!     meta: "♥ 189  ✎ 32  4h ago".to_string(),
//!     markers: vec![Marker::Liked],
//!     is_selected: true,
//!     is_emphasized: false,
//!     highlight_ranges: vec![],
//! };
//! assert_eq!(item.markers[0].glyph(), "♥");
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// The six nav tabs with the active one flagged.
    pub nav: Vec<NavItem>,

    /// Present on views with a text input (search, messages, post detail).
    pub search_bar: Option<SearchBarInfo>,

    /// Present on views with sub-tabs or filters.
    pub tabs: Option<Vec<TabItem>>,

    /// Context lines drawn above the list (stories row, profile card, post
    /// body, warnings, the settings saved banner).
    pub banner: Vec<BannerLine>,

    /// Rows of the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Shown in place of the list when the view has no rows.
    pub empty_state: Option<EmptyState>,

    pub overlay: Option<OverlayInfo>,

    pub footer: FooterInfo,
}

/// One row of a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Primary text (author, person, tag, setting label).
    pub title: String,

    /// Secondary text (post content, role, last message, description).
    pub detail: String,

    /// Right-aligned metadata (counts, relative time).
    pub meta: String,

    /// State glyphs drawn before the title.
    pub markers: Vec<Marker>,

    pub is_selected: bool,

    /// Drawn in the accent colour (unread notifications, open conversation).
    pub is_emphasized: bool,

    /// Character ranges of `title` matching the active query.
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Derived state glyphs attached to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Liked,
    Saved,
    Following,
    Unread,
    Online,
    Sensitive,
    FollowRequest,
    /// Notification category glyph.
    Category(crate::domain::NotificationCategory),
    /// Toggle setting switched on.
    On,
    /// Toggle setting switched off.
    Off,
    /// Link setting.
    Link,
}

impl Marker {
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Liked => "♥",
            Self::Saved => "⚑",
            Self::Following => "✓",
            Self::Unread => "●",
            Self::Online => "◉",
            Self::Sensitive => "⚠",
            Self::FollowRequest => "?",
            Self::Category(category) => category.glyph(),
            Self::On => "[x]",
            Self::Off => "[ ]",
            Self::Link => "›",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Second line, e.g. "You have 3 unread notifications".
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    /// Number key bound to the tab.
    pub key: char,
    pub is_active: bool,
    /// Count bubble (unread notifications, unread messages).
    pub badge: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub label: String,
    pub is_active: bool,
}

/// Styling class of a banner line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerStyle {
    Plain,
    Accent,
    Muted,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerLine {
    pub text: String,
    pub style: BannerStyle,
}

impl BannerLine {
    pub fn new(text: impl Into<String>, style: BannerStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No notifications found").
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Label drawn before the query ("Search", "Comment").
    pub prompt: String,
    pub query: String,
    /// Whether keystrokes currently go to this input.
    pub is_focused: bool,
}

/// A modal menu drawn over the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayInfo {
    pub title: String,
    pub entries: Vec<String>,
    pub selected: usize,
}
