//! People and conversations.

use serde::{Deserialize, Serialize};

/// A person known to the session (the "PersonRef" of the interaction model).
///
/// The identifier keys the follow-set; the handle is what views navigate by.
/// Whether the current user follows this person is derived from the follow-set
/// and deliberately absent from this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    pub name: String,
    /// Handle without the leading `@`.
    pub username: String,
    /// Short role line shown in search results ("UI/UX Designer").
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub bio: String,
    /// Base follower count shipped with the dataset.
    #[serde(default)]
    pub followers: u64,
    /// Number of accounts this person follows.
    #[serde(default)]
    pub following: u64,
    /// Number of posts this person has published.
    #[serde(default)]
    pub posts: u64,
}

impl Person {
    /// Returns `true` if `needle` is a substring of the name or handle,
    /// ignoring case.
    ///
    /// An empty needle matches everyone.
    ///
    /// # Examples
    ///
    /// ```
    /// use neonfeed::domain::Person;
    ///
    /// let maya = Person {
    ///     id: 1,
    ///     name: "Maya Patel".into(),
    ///     username: "mayapatel".into(),
    ///     role: String::new(),
    ///     bio: String::new(),
    ///     followers: 0,
    ///     following: 0,
    ///     posts: 0,
    /// };
    /// assert!(maya.matches("pat"));
    /// assert!(maya.matches(""));
    /// assert!(!maya.matches("zed"));
    /// ```
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle) || contains_ignore_case(&self.username, needle)
    }
}

/// A direct-message conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub last_message: String,
    pub age_secs: i64,
    /// Unread message count shipped with the dataset.
    #[serde(default)]
    pub unread: u32,
    #[serde(default)]
    pub online: bool,
}

impl Conversation {
    /// Case-insensitive substring match over name or handle.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle) || contains_ignore_case(&self.username, needle)
    }
}

/// Case-insensitive substring test shared by every list filter.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
