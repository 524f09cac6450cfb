//! Domain layer for neonfeed.
//!
//! Plain data records seeded from the mock dataset, the notification filter
//! predicates, display formatting, and the crate error type. Nothing in here
//! holds session state; that belongs to [`crate::engagement`] and
//! [`crate::app`].
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`post`]: Posts, comments, stories, trending tags
//! - [`person`]: People and conversations
//! - [`notification`]: Notifications and filter predicates
//! - [`settings`]: Settings catalogue
//! - [`format`]: Count and relative-time formatting

pub mod error;
pub mod format;
pub mod notification;
pub mod person;
pub mod post;
pub mod settings;

pub use error::{NeonfeedError, Result};
pub use format::{age_label, format_count, time_ago};
pub use notification::{NotificationCategory, NotificationFilter, NotificationItem};
pub use person::{contains_ignore_case, Conversation, Person};
pub use post::{Comment, Post, Story, TrendingTag};
pub use settings::{SettingDef, SettingKind, SettingSection, SHOW_SENSITIVE};
