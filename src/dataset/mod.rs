//! Static mock dataset.
//!
//! Every collection the views display (posts, stories, people, conversations,
//! notifications, comments, trending tags and the settings catalogue) ships
//! as one JSON document embedded in the binary. It is deserialized once at
//! mount and never mutated afterwards; session changes go to the
//! [`EngagementStore`](crate::engagement::EngagementStore) or to
//! [`AppState`](crate::app::AppState).
//!
//! # Seeding
//!
//! The `following` and `read_notifications` lists are the dataset's initial
//! memberships. They seed the store's follow-set and read-set and are not
//! consulted again.

use crate::domain::{
    Comment, Conversation, NotificationItem, Person, Post, Result, SettingSection, Story,
    TrendingTag,
};
use serde::Deserialize;

/// The JSON document compiled into the plugin.
const BUILTIN_SEED: &str = include_str!("../../data/seed.json");

/// Immutable collections backing every view.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    /// Handle of the signed-in user ("own" profile, comment author).
    pub current_user: String,

    pub people: Vec<Person>,

    /// Person ids offered as suggestions on the search view, in display order.
    #[serde(default)]
    pub search_people: Vec<u64>,

    /// Person ids followed at mount.
    #[serde(default)]
    pub following: Vec<u64>,

    #[serde(default)]
    pub stories: Vec<Story>,

    pub posts: Vec<Post>,

    #[serde(default)]
    pub comments: Vec<Comment>,

    #[serde(default)]
    pub conversations: Vec<Conversation>,

    #[serde(default)]
    pub notifications: Vec<NotificationItem>,

    /// Notification ids already read at mount.
    #[serde(default)]
    pub read_notifications: Vec<u64>,

    #[serde(default)]
    pub tags: Vec<TrendingTag>,

    #[serde(default)]
    pub settings: Vec<SettingSection>,
}

impl Dataset {
    /// Loads the dataset compiled into the plugin.
    ///
    /// # Errors
    ///
    /// Returns [`NeonfeedError::Dataset`](crate::NeonfeedError::Dataset) if the
    /// embedded JSON does not match the expected shape.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_SEED)
    }

    /// Parses a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`NeonfeedError::Dataset`](crate::NeonfeedError::Dataset) on
    /// malformed input.
    ///
    /// # Example
    ///
    /// ```
    /// use neonfeed::dataset::Dataset;
    ///
    /// let json = r#"{ "current_user": "me", "people": [], "posts": [] }"#;
    /// let dataset = Dataset::from_json(json).unwrap();
    /// assert_eq!(dataset.current_user, "me");
    /// assert!(dataset.notifications.is_empty());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Self = serde_json::from_str(json)?;
        tracing::debug!(
            posts = dataset.posts.len(),
            people = dataset.people.len(),
            notifications = dataset.notifications.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Looks up a post by id.
    #[must_use]
    pub fn post(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Looks up a person by id.
    #[must_use]
    pub fn person(&self, id: u64) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Looks up a person by handle. A leading `@` is ignored.
    #[must_use]
    pub fn person_by_username(&self, username: &str) -> Option<&Person> {
        let handle = username.trim_start_matches('@');
        self.people.iter().find(|p| p.username == handle)
    }

    /// The signed-in user's person record.
    #[must_use]
    pub fn current_person(&self) -> Option<&Person> {
        self.person_by_username(&self.current_user)
    }

    /// The people suggested on the search view.
    ///
    /// Falls back to everyone except the current user when no explicit list
    /// was shipped.
    #[must_use]
    pub fn suggested_people(&self) -> Vec<&Person> {
        if self.search_people.is_empty() {
            return self
                .people
                .iter()
                .filter(|p| p.username != self.current_user)
                .collect();
        }
        self.search_people
            .iter()
            .filter_map(|id| self.person(*id))
            .collect()
    }

    /// Comments on `post_id`, oldest first.
    #[must_use]
    pub fn comments_for(&self, post_id: u64) -> Vec<&Comment> {
        let mut comments: Vec<&Comment> =
            self.comments.iter().filter(|c| c.post_id == post_id).collect();
        comments.sort_by_key(|c| std::cmp::Reverse(c.age_secs));
        comments
    }

    #[must_use]
    pub fn conversation(&self, id: u64) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Posts authored by `username`, in feed order.
    #[must_use]
    pub fn posts_by(&self, username: &str) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.is_by(username)).collect()
    }

    /// Posts in which `username` is tagged.
    #[must_use]
    pub fn tagged_posts(&self, username: &str) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| p.tagged.iter().any(|t| t == username))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dataset_parses() {
        let dataset = Dataset::builtin().unwrap();
        assert_eq!(dataset.current_user, "alexjohnson");
        assert_eq!(dataset.notifications.len(), 7);
        assert_eq!(dataset.post(1).map(|p| p.likes), Some(234));
        assert!(dataset.post(3).is_some_and(|p| p.sensitive));
    }

    #[test]
    fn lookups_by_handle_ignore_at_sign() {
        let dataset = Dataset::builtin().unwrap();
        let maya = dataset.person_by_username("@mayapatel").unwrap();
        assert_eq!(maya.name, "Maya Patel");
        assert!(dataset.person_by_username("nobody").is_none());
    }

    #[test]
    fn comments_are_oldest_first() {
        let dataset = Dataset::builtin().unwrap();
        let ids: Vec<u64> = dataset.comments_for(1).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn suggested_people_follow_explicit_order() {
        let dataset = Dataset::builtin().unwrap();
        let names: Vec<&str> = dataset
            .suggested_people()
            .iter()
            .map(|p| p.username.as_str())
            .collect();
        assert_eq!(names, vec!["mayapatel", "davidlee", "sarahwilson", "jameschen"]);
    }

    #[test]
    fn malformed_json_is_a_dataset_error() {
        let err = Dataset::from_json("{ not json").unwrap_err();
        assert!(matches!(err, crate::NeonfeedError::Dataset(_)));
    }
}
