//! Notifications and the filter predicates over them.
//!
//! A notification's *category* is a structured field shipped with the data.
//! Filters look only at that field and at read-state, never at the free-text
//! `action` string, so "sent you a follow request" and "started following
//! you" both land in the follows filter.

use serde::{Deserialize, Serialize};

/// Structured category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Like,
    Follow,
    Comment,
    Mention,
}

impl NotificationCategory {
    /// Single-glyph marker rendered next to the actor name.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Like => "♥",
            Self::Follow => "+",
            Self::Comment => "✎",
            Self::Mention => "@",
        }
    }
}

/// One entry on the notifications view.
///
/// Read-state lives in the read-set of the engagement store; the dataset's
/// initial read flags are applied there at mount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub id: u64,
    /// Actor display name ("Sam and 12 others").
    pub name: String,
    /// Actor handle, used to navigate to the actor's profile.
    pub username: String,
    /// Free-text action ("liked your post"). Display only.
    pub action: String,
    pub category: NotificationCategory,
    pub age_secs: i64,
    /// Excerpt of the post the notification refers to.
    #[serde(default)]
    pub preview: Option<String>,
    /// Follow requests render accept/decline hints.
    #[serde(default)]
    pub follow_request: bool,
}

/// Predicate selecting a subset of notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    /// Every notification.
    #[default]
    All,
    /// Notifications not in the read-set.
    Unread,
    /// `category == like`.
    Likes,
    /// `category == follow`.
    Follows,
    /// `category == comment || category == mention`.
    Comments,
}

impl NotificationFilter {
    /// Filter tabs in display order.
    pub const ALL: [Self; 5] = [Self::All, Self::Unread, Self::Likes, Self::Follows, Self::Comments];

    /// Tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Unread => "unread",
            Self::Likes => "likes",
            Self::Follows => "follows",
            Self::Comments => "comments",
        }
    }

    /// Evaluates the predicate for one item given its current read-state.
    ///
    /// # Examples
    ///
    /// ```
    /// use neonfeed::domain::{NotificationCategory, NotificationFilter, NotificationItem};
    ///
    /// let item = NotificationItem {
    ///     id: 6,
    ///     name: "Maya Patel".into(),
    ///     username: "mayapatel".into(),
    ///     action: "mentioned you in a comment".into(),
    ///     category: NotificationCategory::Mention,
    ///     age_secs: 10_800,
    ///     preview: None,
    ///     follow_request: false,
    /// };
    /// assert!(NotificationFilter::Comments.matches(&item, true));
    /// assert!(!NotificationFilter::Unread.matches(&item, true));
    /// ```
    #[must_use]
    pub const fn matches(self, item: &NotificationItem, is_read: bool) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !is_read,
            Self::Likes => matches!(item.category, NotificationCategory::Like),
            Self::Follows => matches!(item.category, NotificationCategory::Follow),
            Self::Comments => matches!(
                item.category,
                NotificationCategory::Comment | NotificationCategory::Mention
            ),
        }
    }
}
