//! Application state management.
//!
//! This module defines [`AppState`], the container owning everything a session
//! knows: the immutable [`Dataset`], the one [`EngagementStore`], and the
//! per-view UI state (active view and history, selection, queries, tabs,
//! drafts, settings). Views receive `&AppState` and derive every displayed
//! boolean from the store at view-model time.
//!
//! # State Components
//!
//! - **Dataset**: seeded collections, never mutated
//! - **Store**: like, save, follow and read membership
//! - **Navigation**: current [`View`] plus a back stack
//! - **Selection**: cursor into the current view's [`rows`](AppState::rows)
//! - **Inputs**: search query, message filter, comment draft
//! - **Settings**: toggle values seeded from the catalogue defaults
//!
//! # Example
//!
//! ```
//! use neonfeed::app::{AppState, View};
//! use neonfeed::dataset::Dataset;
//! use neonfeed::engagement::EntityKind;
//! use neonfeed::ui::Theme;
//!
//! let mut state = AppState::new(Dataset::builtin().unwrap(), Theme::default());
//! state.store.toggle(EntityKind::Save, 4);
//! state.open_profile("alexjohnson").unwrap();
//! assert_eq!(state.view, View::Profile(None));
//! ```

use super::filters::{filter_conversations, filter_people, filter_posts, filter_tags};
use super::modes::{InputMode, NavTab, Overlay, ProfileTab, SearchTab, TextTarget, View};
use crate::dataset::Dataset;
use crate::domain::{
    Comment, NeonfeedError, NotificationCategory, NotificationFilter, Person, Post, Result,
    SettingDef, SettingKind, SHOW_SENSITIVE,
};
use crate::engagement::{EngagementStore, EntityKind};
use crate::ui::theme::Theme;
use std::collections::BTreeMap;

/// What a row of the current view refers to.
///
/// Rows carry identifiers only; the entity is looked up when the row is
/// rendered or activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowTarget {
    Post(u64),
    Person(u64),
    Tag(String),
    Notification(u64),
    Conversation(u64),
    Comment(u64),
    Setting(String),
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Static collections loaded at mount.
    pub dataset: Dataset,

    /// Single source of truth for liked, saved, following and read.
    pub store: EngagementStore,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Active view.
    pub view: View,

    /// Views to return to on back navigation, most recent last.
    ///
    /// Cleared when a nav tab is chosen.
    pub history: Vec<View>,

    pub input_mode: InputMode,

    pub overlay: Option<Overlay>,

    /// Zero-based cursor into [`rows`](Self::rows). Wraps on movement and is
    /// clamped whenever the row list changes.
    pub selected_index: usize,

    pub search_query: String,
    pub search_tab: SearchTab,

    /// Filter over conversations on the messages view.
    pub message_query: String,

    pub notification_filter: NotificationFilter,

    pub profile_tab: ProfileTab,

    /// Unsent comment on the post detail view.
    pub comment_draft: String,

    /// Comments written during this session, in submission order.
    pub local_comments: Vec<Comment>,

    /// Toggle settings by id, seeded from catalogue defaults.
    pub settings: BTreeMap<String, bool>,

    /// Set by "save settings"; cleared by the next event.
    pub settings_saved: bool,

    /// Conversation highlighted as open on the messages view.
    pub open_conversation: Option<u64>,

    /// Unix timestamp at which the session mounted. Dataset ages are relative
    /// to it.
    pub mounted_at: i64,
}

impl AppState {
    /// Creates the session state from a dataset and theme.
    ///
    /// Seeds the engagement store with the dataset's initial follow and read
    /// memberships and the settings map with each toggle's default. Starts on
    /// the home view.
    #[must_use]
    pub fn new(dataset: Dataset, theme: Theme) -> Self {
        let store = EngagementStore::seeded(
            dataset.notifications.clone(),
            dataset.following.iter().copied(),
            dataset.read_notifications.iter().copied(),
        );

        let settings = dataset
            .settings
            .iter()
            .flat_map(|section| section.settings.iter())
            .filter_map(|def| match def.kind {
                SettingKind::Toggle { default } => Some((def.id.clone(), default)),
                SettingKind::Link { .. } => None,
            })
            .collect();

        Self {
            dataset,
            store,
            theme,
            view: View::Home,
            history: Vec::new(),
            input_mode: InputMode::Normal,
            overlay: None,
            selected_index: 0,
            search_query: String::new(),
            search_tab: SearchTab::default(),
            message_query: String::new(),
            notification_filter: NotificationFilter::default(),
            profile_tab: ProfileTab::default(),
            comment_draft: String::new(),
            local_comments: Vec::new(),
            settings,
            settings_saved: false,
            open_conversation: None,
            mounted_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Handle of the signed-in user.
    #[must_use]
    pub fn current_user(&self) -> &str {
        &self.dataset.current_user
    }

    /// Current value of a toggle setting. Unknown ids read as off.
    #[must_use]
    pub fn setting(&self, id: &str) -> bool {
        self.settings.get(id).copied().unwrap_or(false)
    }

    /// Handle whose profile is displayed, if the profile view is active.
    #[must_use]
    pub fn profile_handle(&self) -> Option<&str> {
        match &self.view {
            View::Profile(handle) => Some(handle.as_deref().unwrap_or(self.current_user())),
            _ => None,
        }
    }

    /// Whether `handle` is the signed-in user.
    #[must_use]
    pub fn is_current_user(&self, handle: &str) -> bool {
        handle.trim_start_matches('@') == self.current_user()
    }

    // ---- rows and selection ----------------------------------------------

    /// Rows of the current view, top to bottom.
    ///
    /// Recomputed on demand so filters, tabs and membership changes are
    /// always reflected.
    #[must_use]
    pub fn rows(&self) -> Vec<RowTarget> {
        match &self.view {
            View::Home => self.dataset.posts.iter().map(|p| RowTarget::Post(p.id)).collect(),
            View::Search => self.search_rows(),
            View::Notifications => self
                .store
                .filter_notifications(self.notification_filter)
                .iter()
                .map(|n| RowTarget::Notification(n.id))
                .collect(),
            View::Messages => filter_conversations(&self.dataset.conversations, &self.message_query)
                .iter()
                .map(|c| RowTarget::Conversation(c.id))
                .collect(),
            View::Profile(_) => self
                .profile_posts()
                .iter()
                .map(|p| RowTarget::Post(p.id))
                .collect(),
            View::Settings => self
                .setting_defs()
                .map(|def| RowTarget::Setting(def.id.clone()))
                .collect(),
            View::Post(id) => self
                .comments_for(*id)
                .iter()
                .map(|c| RowTarget::Comment(c.id))
                .collect(),
            View::ContentWarning(_) => vec![],
        }
    }

    fn search_rows(&self) -> Vec<RowTarget> {
        let people = || {
            self.search_people()
                .into_iter()
                .map(|p| RowTarget::Person(p.id))
        };
        let posts = || {
            filter_posts(&self.dataset.posts, &self.search_query)
                .into_iter()
                .map(|p| RowTarget::Post(p.id))
        };

        match self.search_tab {
            SearchTab::Top => people().chain(posts()).collect(),
            SearchTab::Posts => posts().collect(),
            SearchTab::People => people().collect(),
            SearchTab::Tags => filter_tags(&self.dataset.tags, &self.search_query)
                .into_iter()
                .map(|t| RowTarget::Tag(t.tag.clone()))
                .collect(),
        }
    }

    /// People matching the search query.
    ///
    /// A blank query shows the suggested list; otherwise everyone except the
    /// signed-in user is searched.
    #[must_use]
    pub fn search_people(&self) -> Vec<&Person> {
        if self.search_query.trim().is_empty() {
            return self.dataset.suggested_people();
        }
        let others = self
            .dataset
            .people
            .iter()
            .filter(|p| !self.is_current_user(&p.username));
        filter_people(others, self.search_query.trim())
    }

    /// Posts listed under the active profile tab.
    ///
    /// The saved tab reads the save-set and is only populated on the
    /// signed-in user's own profile.
    #[must_use]
    pub fn profile_posts(&self) -> Vec<&Post> {
        let Some(handle) = self.profile_handle() else {
            return vec![];
        };
        match self.profile_tab {
            ProfileTab::Posts => self.dataset.posts_by(handle),
            ProfileTab::Saved if self.is_current_user(handle) => self
                .store
                .members(EntityKind::Save)
                .into_iter()
                .filter_map(|id| self.dataset.post(id))
                .collect(),
            ProfileTab::Saved => vec![],
            ProfileTab::Tagged => self.dataset.tagged_posts(handle),
        }
    }

    /// Every setting definition in catalogue order.
    pub fn setting_defs(&self) -> impl Iterator<Item = &SettingDef> {
        self.dataset
            .settings
            .iter()
            .flat_map(|section| section.settings.iter())
    }

    /// Dataset comments on `post_id` followed by this session's comments.
    #[must_use]
    pub fn comments_for(&self, post_id: u64) -> Vec<&Comment> {
        let mut comments = self.dataset.comments_for(post_id);
        comments.extend(self.local_comments.iter().filter(|c| c.post_id == post_id));
        comments
    }

    /// Comment count shown for a post: the shipped count plus comments written
    /// this session.
    #[must_use]
    pub fn comment_count(&self, post: &Post) -> u64 {
        let local = self.local_comments.iter().filter(|c| c.post_id == post.id).count();
        post.comments + local as u64
    }

    /// The row under the cursor.
    #[must_use]
    pub fn selected_target(&self) -> Option<RowTarget> {
        self.rows().into_iter().nth(self.selected_index)
    }

    /// Moves selection down by one position, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves selection up by one position, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Keeps the cursor inside the current row list.
    pub fn clamp_selection(&mut self) {
        let len = self.rows().len();
        self.selected_index = if len == 0 { 0 } else { self.selected_index.min(len - 1) };
    }

    // ---- navigation ------------------------------------------------------

    fn reset_view_state(&mut self) {
        self.selected_index = 0;
        self.overlay = None;
        self.input_mode = InputMode::Normal;
    }

    /// Opens `view`, remembering the current one for back navigation.
    pub fn navigate(&mut self, view: View) {
        if view == self.view {
            return;
        }
        tracing::debug!(from = ?self.view, to = ?view, "navigate");
        let previous = std::mem::replace(&mut self.view, view);
        self.history.push(previous);
        self.reset_view_state();
    }

    /// Jumps to a primary tab, clearing the back stack.
    pub fn go_to_tab(&mut self, tab: NavTab) {
        tracing::debug!(tab = tab.label(), "nav tab selected");
        self.history.clear();
        self.view = tab.view();
        if tab == NavTab::Profile {
            self.profile_tab = ProfileTab::Posts;
        }
        self.reset_view_state();
    }

    /// Returns to the previous view. `false` if there is none.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        tracing::debug!(from = ?self.view, to = ?previous, "back");
        self.view = previous;
        self.reset_view_state();
        true
    }

    /// Opens a post by id.
    ///
    /// A sensitive post goes to the content-warning view first unless the
    /// "show sensitive content" setting is on.
    ///
    /// # Errors
    ///
    /// Returns [`NeonfeedError::NotFound`] if the dataset has no such post.
    pub fn open_post(&mut self, id: u64) -> Result<()> {
        let post = self.dataset.post(id).ok_or_else(|| NeonfeedError::NotFound {
            kind: "post",
            key: id.to_string(),
        })?;

        if post.sensitive && !self.setting(SHOW_SENSITIVE) {
            self.navigate(View::ContentWarning(id));
        } else {
            self.navigate(View::Post(id));
        }
        Ok(())
    }

    /// Replaces the content-warning view with the post it guards.
    ///
    /// Back navigation then skips the warning. No-op on other views.
    pub fn reveal_sensitive(&mut self) -> bool {
        let View::ContentWarning(id) = self.view else {
            return false;
        };
        tracing::debug!(post_id = id, "content warning bypassed");
        self.view = View::Post(id);
        self.reset_view_state();
        true
    }

    /// Opens a profile by handle.
    ///
    /// The signed-in user's handle opens the own-profile view.
    ///
    /// # Errors
    ///
    /// Returns [`NeonfeedError::NotFound`] if no person has that handle.
    pub fn open_profile(&mut self, handle: &str) -> Result<()> {
        let person = self
            .dataset
            .person_by_username(handle)
            .ok_or_else(|| NeonfeedError::NotFound {
                kind: "person",
                key: handle.to_string(),
            })?;

        let view = if self.is_current_user(&person.username) {
            View::Profile(None)
        } else {
            View::Profile(Some(person.username.clone()))
        };
        self.profile_tab = ProfileTab::Posts;
        self.navigate(view);
        Ok(())
    }

    /// Follows an in-app link. Profile and settings targets lead somewhere;
    /// the rest have no view yet.
    pub fn follow_link(&mut self, target: &str) -> bool {
        if target == "/profile" || target.starts_with("/profile/") {
            self.profile_tab = ProfileTab::Posts;
            self.navigate(View::Profile(None));
            return true;
        }
        if target == "/settings" {
            self.navigate(View::Settings);
            return true;
        }
        tracing::debug!(target, "settings link has no view");
        false
    }

    // ---- focused entities ------------------------------------------------

    /// Post that like/save/actions apply to: the overlay's post, the post on
    /// the detail view, or the selected post row.
    #[must_use]
    pub fn focused_post(&self) -> Option<u64> {
        if let Some(Overlay::PostActions { post_id, .. }) = self.overlay {
            return Some(post_id);
        }
        match (&self.view, self.selected_target()) {
            (View::Post(id), _) => Some(*id),
            (_, Some(RowTarget::Post(id))) => Some(id),
            _ => None,
        }
    }

    /// Person that a follow toggle applies to.
    ///
    /// Another user's profile, a selected person row, or the actor of a
    /// selected follow notification (following back).
    #[must_use]
    pub fn focused_person(&self) -> Option<u64> {
        if let View::Profile(Some(handle)) = &self.view {
            return self.dataset.person_by_username(handle).map(|p| p.id);
        }
        match self.selected_target()? {
            RowTarget::Person(id) => Some(id),
            RowTarget::Notification(id) => {
                let item = self.store.notification(id)?;
                if item.category != NotificationCategory::Follow {
                    return None;
                }
                self.dataset.person_by_username(&item.username).map(|p| p.id)
            }
            _ => None,
        }
    }

    // ---- text input ------------------------------------------------------

    /// Mutable buffer for a text target.
    pub fn text_buffer_mut(&mut self, target: TextTarget) -> &mut String {
        match target {
            TextTarget::SearchQuery => &mut self.search_query,
            TextTarget::MessageQuery => &mut self.message_query,
            TextTarget::CommentDraft => &mut self.comment_draft,
        }
    }

    /// Appends the draft as a comment by the signed-in user on the displayed
    /// post.
    ///
    /// Blank drafts are ignored. Returns `true` if a comment was added; the
    /// draft is cleared in that case.
    pub fn submit_comment(&mut self) -> bool {
        let View::Post(post_id) = self.view else {
            return false;
        };
        let content = self.comment_draft.trim();
        if content.is_empty() {
            return false;
        }

        let id = self
            .dataset
            .comments
            .iter()
            .chain(self.local_comments.iter())
            .map(|c| c.id)
            .max()
            .unwrap_or(0)
            + 1;
        let author = self
            .dataset
            .current_person()
            .map_or_else(|| self.current_user().to_string(), |p| p.name.clone());

        let comment = Comment {
            id,
            post_id,
            author,
            username: self.current_user().to_string(),
            content: content.to_string(),
            likes: 0,
            age_secs: self.mounted_at - chrono::Utc::now().timestamp(),
        };

        tracing::info!(post_id, comment_id = id, "comment added");
        self.local_comments.push(comment);
        self.comment_draft.clear();
        true
    }

    /// Flips a toggle setting. Returns the new value, or `None` if `id` is not
    /// a toggle.
    pub fn toggle_setting(&mut self, id: &str) -> Option<bool> {
        let value = self.settings.get_mut(id)?;
        *value = !*value;
        tracing::debug!(setting = id, value = *value, "setting toggled");
        Some(*value)
    }
}
