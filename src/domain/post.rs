//! Feed content: posts, comments and stories.
//!
//! These records are seeded once from the mock dataset and never mutated.
//! Whether a post is liked or saved is *not* a field here; it is answered by
//! the [`EngagementStore`](crate::engagement::EngagementStore) at render time.

use serde::{Deserialize, Serialize};

/// A piece of feed content (the "ContentItem" of the interaction model).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier. Keys the like-set and save-set.
    pub id: u64,
    /// Display name of the author.
    pub author: String,
    /// Author handle, without the leading `@`.
    pub username: String,
    /// Post body text.
    pub content: String,
    /// Base like count shipped with the dataset, before session toggles.
    pub likes: u64,
    /// Comment count shipped with the dataset.
    pub comments: u64,
    /// Seconds before session mount at which the post was published.
    pub age_secs: i64,
    /// Sensitive posts are gated behind the content-warning view.
    #[serde(default)]
    pub sensitive: bool,
    /// Hashtags attached to the post, lowercase and without `#`.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Handles of people tagged in the post.
    #[serde(default)]
    pub tagged: Vec<String>,
}

impl Post {
    /// Returns `true` if `username` authored this post.
    #[must_use]
    pub fn is_by(&self, username: &str) -> bool {
        self.username == username
    }
}

/// A comment attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub author: String,
    pub username: String,
    pub content: String,
    pub likes: u64,
    /// Seconds before session mount. Negative for comments written during the
    /// session.
    pub age_secs: i64,
}

/// An entry in the home view's stories row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub is_yours: bool,
    #[serde(default)]
    pub has_new: bool,
}

/// A trending hashtag shown on the search view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingTag {
    pub tag: String,
    /// Number of posts using the tag.
    pub posts: u64,
}
