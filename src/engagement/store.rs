//! The engagement state store.
//!
//! [`EngagementStore`] is the single source of truth for every derived
//! boolean the views display: liked, saved, following and read. It holds one
//! identifier set per [`EntityKind`] and the session's notification list.
//!
//! # State Machine
//!
//! Each identifier is either **off** (absent, the default) or **on**
//! (present). [`toggle`](EngagementStore::toggle) flips it. The only other
//! writes are the one-way read markers
//! ([`mark_read`](EngagementStore::mark_read),
//! [`mark_all_read`](EngagementStore::mark_all_read)) and seeding at
//! construction.
//!
//! # Example
//!
//! ```
//! use neonfeed::engagement::{EngagementStore, EntityKind};
//!
//! let mut store = EngagementStore::new(vec![]);
//! assert_eq!(store.displayed_count(EntityKind::Like, 1, 234), 234);
//!
//! store.toggle(EntityKind::Like, 1);
//! assert_eq!(store.displayed_count(EntityKind::Like, 1, 234), 235);
//!
//! store.toggle(EntityKind::Like, 1);
//! assert_eq!(store.displayed_count(EntityKind::Like, 1, 234), 234);
//! ```

use super::kind::EntityKind;
use crate::domain::{NotificationFilter, NotificationItem};
use std::collections::HashSet;

/// Per-session membership sets plus the notifications they describe.
///
/// Owned by [`AppState`](crate::app::AppState); views borrow it and never keep
/// copies of membership.
#[derive(Debug, Clone, Default)]
pub struct EngagementStore {
    /// One set per entity kind, indexed by [`EntityKind::index`].
    sets: [HashSet<u64>; 4],

    /// Notifications in dataset order. Read-state is in `sets[Read]`.
    notifications: Vec<NotificationItem>,
}

impl EngagementStore {
    /// Creates a store with every set empty.
    #[must_use]
    pub fn new(notifications: Vec<NotificationItem>) -> Self {
        Self {
            sets: Default::default(),
            notifications,
        }
    }

    /// Creates a store seeded with the dataset's initial follow and read
    /// memberships. Like and save sets start empty.
    #[must_use]
    pub fn seeded(
        notifications: Vec<NotificationItem>,
        following: impl IntoIterator<Item = u64>,
        read: impl IntoIterator<Item = u64>,
    ) -> Self {
        let mut store = Self::new(notifications);
        store.sets[EntityKind::Follow.index()].extend(following);
        store.sets[EntityKind::Read.index()].extend(read);

        tracing::debug!(
            notifications = store.notifications.len(),
            following = store.set(EntityKind::Follow).len(),
            read = store.set(EntityKind::Read).len(),
            "engagement store seeded"
        );
        store
    }

    fn set(&self, kind: EntityKind) -> &HashSet<u64> {
        &self.sets[kind.index()]
    }

    fn set_mut(&mut self, kind: EntityKind) -> &mut HashSet<u64> {
        &mut self.sets[kind.index()]
    }

    /// Flips membership of `id` in the `kind` set and returns the new state.
    ///
    /// Total over any identifier. Two calls in a row restore the original
    /// state, and other kinds' sets are never touched.
    pub fn toggle(&mut self, kind: EntityKind, id: u64) -> bool {
        let set = self.set_mut(kind);
        let on = if set.remove(&id) {
            false
        } else {
            set.insert(id);
            true
        };

        tracing::debug!(kind = %kind, id, on, "membership toggled");
        on
    }

    /// Returns the current membership of `id` in the `kind` set.
    #[must_use]
    pub fn is_on(&self, kind: EntityKind, id: u64) -> bool {
        self.set(kind).contains(&id)
    }

    /// Count to display for an entity whose shipped count is `base`.
    ///
    /// `base + 1` while the identifier is on, `base` otherwise. Toggling off
    /// restores `base` exactly.
    #[must_use]
    pub fn displayed_count(&self, kind: EntityKind, id: u64, base: u64) -> u64 {
        base + u64::from(self.is_on(kind, id))
    }

    /// Identifiers currently on for `kind`, ascending.
    #[must_use]
    pub fn members(&self, kind: EntityKind) -> Vec<u64> {
        let mut ids: Vec<u64> = self.set(kind).iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Marks a single notification read. Returns `true` if it was unread.
    pub fn mark_read(&mut self, id: u64) -> bool {
        let changed = self.set_mut(EntityKind::Read).insert(id);
        if changed {
            tracing::debug!(id, "notification marked read");
        }
        changed
    }

    /// Marks every notification read and returns how many were unread.
    ///
    /// Re-invoking when everything is already read changes nothing.
    pub fn mark_all_read(&mut self) -> usize {
        let ids: Vec<u64> = self.notifications.iter().map(|n| n.id).collect();
        let read = &mut self.sets[EntityKind::Read.index()];
        let newly_read = ids.into_iter().filter(|id| read.insert(*id)).count();

        tracing::debug!(newly_read, "all notifications marked read");
        newly_read
    }

    /// Returns the notifications matching `filter`, in dataset order.
    ///
    /// Produces a fresh sequence and never mutates the store. An empty result
    /// is a normal outcome.
    #[must_use]
    pub fn filter_notifications(&self, filter: NotificationFilter) -> Vec<&NotificationItem> {
        let read = self.set(EntityKind::Read);
        self.notifications
            .iter()
            .filter(|n| filter.matches(n, read.contains(&n.id)))
            .collect()
    }

    /// All notifications, in dataset order.
    #[must_use]
    pub fn notifications(&self) -> &[NotificationItem] {
        &self.notifications
    }

    /// Looks up a notification by id.
    #[must_use]
    pub fn notification(&self, id: u64) -> Option<&NotificationItem> {
        self.notifications.iter().find(|n| n.id == id)
    }

    /// Number of notifications not in the read-set.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        let read = self.set(EntityKind::Read);
        self.notifications.iter().filter(|n| !read.contains(&n.id)).count()
    }
}
