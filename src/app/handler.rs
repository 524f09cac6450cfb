//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for input. It mutates
//! [`AppState`] (and through it the engagement store) synchronously and
//! returns whether a re-render is needed plus any [`Action`]s for the host.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `Open`, `Back`, `Navigate`,
//!   `NextTab`, `PrevTab`, `OpenPost`, `OpenProfile`
//! - **Engagement**: `ToggleLike`, `ToggleSave`, `ToggleFollow`, `MarkRead`,
//!   `MarkAllRead`
//! - **Input**: `FocusInput`, `ComposeComment`, `Char`, `Backspace`
//! - **Overlay**: `ShowActions`
//! - **Settings**: `ToggleSetting`, `SaveSettings`
//! - **Host**: `CloseFocus`
//!
//! # Example
//!
//! ```
//! use neonfeed::app::{handle_event, AppState, Event};
//! use neonfeed::dataset::Dataset;
//! use neonfeed::engagement::EntityKind;
//! use neonfeed::ui::Theme;
//!
//! let mut state = AppState::new(Dataset::builtin().unwrap(), Theme::default());
//! let (render, _) = handle_event(&mut state, &Event::ToggleLike).unwrap();
//! assert!(render);
//! assert!(state.store.is_on(EntityKind::Like, 1));
//! ```

use super::modes::{cycle, InputMode, NavTab, Overlay, PostAction, ProfileTab, SearchTab, TextTarget, View};
use super::state::RowTarget;
use crate::app::{Action, AppState};
use crate::domain::{NotificationFilter, Result, SettingKind};
use crate::engagement::EntityKind;

/// Input events delivered by the plugin shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor (or overlay cursor) down, wrapping.
    KeyDown,
    /// Moves the cursor (or overlay cursor) up, wrapping.
    KeyUp,
    /// Activates the selected row, overlay entry or input.
    Open,
    /// Unwinds one level: overlay, input focus, open conversation, history.
    Back,
    /// Hides the plugin pane.
    CloseFocus,
    /// Jumps to a primary tab.
    Navigate(NavTab),
    /// Next sub-tab or notification filter.
    NextTab,
    /// Previous sub-tab or notification filter.
    PrevTab,
    ToggleLike,
    ToggleSave,
    ToggleFollow,
    /// Marks the selected notification read.
    MarkRead,
    MarkAllRead,
    /// Opens the actions overlay for the focused post.
    ShowActions,
    /// Focuses the current view's text input.
    FocusInput,
    /// Focuses the comment draft on the post detail view.
    ComposeComment,
    /// Appends a character to the focused input.
    Char(char),
    /// Removes the last character of the focused input.
    Backspace,
    /// Flips the selected toggle setting.
    ToggleSetting,
    /// Shows the saved banner on the settings view.
    SaveSettings,
    /// Follows the content warning's link to the settings view.
    OpenPreferences,
    /// Opens a post by id, as from a deep link.
    OpenPost(u64),
    /// Opens a profile by handle, as from a deep link.
    OpenProfile(String),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. A [`Action::RenamePane`] is appended whenever
/// the active view's title changed.
///
/// # Errors
///
/// Returns [`NeonfeedError::NotFound`](crate::NeonfeedError::NotFound) when
/// `OpenPost`/`OpenProfile` (or an overlay entry) names an entity the dataset
/// does not contain. State is left unchanged in that case.
///
/// # Tracing
///
/// Each call runs inside a debug-level span carrying the event.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let title_before = state.view.title();
    let banner_cleared = !matches!(event, Event::SaveSettings) && std::mem::take(&mut state.settings_saved);

    let (render, mut actions) = dispatch(state, event)?;

    let title = state.view.title();
    let renamed = title != title_before;
    if renamed {
        actions.push(Action::rename_for(&title));
    }

    Ok((render || renamed || banner_cleared, actions))
}

fn dispatch(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::KeyDown => {
            if let Some(Overlay::PostActions { selected, .. }) = &mut state.overlay {
                *selected = (*selected + 1) % PostAction::ALL.len();
            } else {
                state.move_selection_down();
            }
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if let Some(Overlay::PostActions { selected, .. }) = &mut state.overlay {
                let len = PostAction::ALL.len();
                *selected = (*selected + len - 1) % len;
            } else {
                state.move_selection_up();
            }
            Ok((true, vec![]))
        }
        Event::Open => open(state),
        Event::Back => Ok((go_back(state), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Navigate(tab) => {
            state.go_to_tab(*tab);
            Ok((true, vec![]))
        }
        Event::NextTab => Ok((cycle_tab(state, true), vec![])),
        Event::PrevTab => Ok((cycle_tab(state, false), vec![])),
        Event::ToggleLike => Ok((toggle_post(state, EntityKind::Like), vec![])),
        Event::ToggleSave => Ok((toggle_post(state, EntityKind::Save), vec![])),
        Event::ToggleFollow => {
            let Some(person_id) = state.focused_person() else {
                tracing::debug!("no person focused to follow");
                return Ok((false, vec![]));
            };
            state.store.toggle(EntityKind::Follow, person_id);
            Ok((true, vec![]))
        }
        Event::MarkRead => {
            let Some(RowTarget::Notification(id)) = state.selected_target() else {
                return Ok((false, vec![]));
            };
            let changed = state.store.mark_read(id);
            state.clamp_selection();
            Ok((changed, vec![]))
        }
        Event::MarkAllRead => {
            if state.view != View::Notifications {
                return Ok((false, vec![]));
            }
            let newly_read = state.store.mark_all_read();
            state.clamp_selection();
            Ok((newly_read > 0, vec![]))
        }
        Event::ShowActions => {
            let Some(post_id) = state.focused_post() else {
                return Ok((false, vec![]));
            };
            state.overlay = Some(Overlay::PostActions { post_id, selected: 0 });
            Ok((true, vec![]))
        }
        Event::FocusInput => {
            let target = match state.view {
                View::Home => {
                    state.go_to_tab(NavTab::Search);
                    TextTarget::SearchQuery
                }
                View::Search => TextTarget::SearchQuery,
                View::Messages => TextTarget::MessageQuery,
                View::Post(_) => TextTarget::CommentDraft,
                _ => return Ok((false, vec![])),
            };
            state.input_mode = InputMode::Typing(target);
            Ok((true, vec![]))
        }
        Event::ComposeComment => {
            if !matches!(state.view, View::Post(_)) {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Typing(TextTarget::CommentDraft);
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            let InputMode::Typing(target) = state.input_mode else {
                return Ok((false, vec![]));
            };
            state.text_buffer_mut(target).push(*c);
            if target != TextTarget::CommentDraft {
                state.selected_index = 0;
            }
            Ok((true, vec![]))
        }
        Event::Backspace => {
            let InputMode::Typing(target) = state.input_mode else {
                return Ok((false, vec![]));
            };
            let removed = state.text_buffer_mut(target).pop().is_some();
            if removed && target != TextTarget::CommentDraft {
                state.selected_index = 0;
            }
            Ok((removed, vec![]))
        }
        Event::ToggleSetting => {
            let Some(RowTarget::Setting(id)) = state.selected_target() else {
                return Ok((false, vec![]));
            };
            Ok((state.toggle_setting(&id).is_some(), vec![]))
        }
        Event::SaveSettings => {
            if state.view != View::Settings {
                return Ok((false, vec![]));
            }
            state.settings_saved = true;
            tracing::info!(settings = ?state.settings, "settings saved");
            Ok((true, vec![]))
        }
        Event::OpenPreferences => {
            if !matches!(state.view, View::ContentWarning(_)) {
                return Ok((false, vec![]));
            }
            Ok((state.follow_link("/settings"), vec![]))
        }
        Event::OpenPost(id) => {
            state.open_post(*id)?;
            Ok((true, vec![]))
        }
        Event::OpenProfile(handle) => {
            state.open_profile(handle)?;
            Ok((true, vec![]))
        }
    }
}

/// Enter: submits or leaves an input, applies an overlay entry, bypasses a
/// content warning, or activates the selected row.
fn open(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if let InputMode::Typing(target) = state.input_mode {
        state.input_mode = InputMode::Normal;
        if target == TextTarget::CommentDraft {
            state.submit_comment();
        }
        return Ok((true, vec![]));
    }

    if let Some(Overlay::PostActions { post_id, selected }) = state.overlay {
        let action = PostAction::ALL.get(selected).copied().unwrap_or(PostAction::Close);
        return apply_post_action(state, post_id, action);
    }

    if state.reveal_sensitive() {
        return Ok((true, vec![]));
    }

    let Some(target) = state.selected_target() else {
        return Ok((false, vec![]));
    };

    match target {
        RowTarget::Post(id) => state.open_post(id)?,
        RowTarget::Person(id) => {
            if let Some(handle) = state.dataset.person(id).map(|p| p.username.clone()) {
                state.open_profile(&handle)?;
            }
        }
        RowTarget::Tag(tag) => {
            tracing::debug!(tag = %tag, "searching tag");
            state.search_query = tag;
            state.search_tab = SearchTab::Posts;
            state.selected_index = 0;
        }
        RowTarget::Notification(id) => {
            state.store.mark_read(id);
            let actor = state.store.notification(id).map(|n| n.username.clone());
            if let Some(handle) = actor {
                if let Err(err) = state.open_profile(&handle) {
                    tracing::warn!(error = %err, notification_id = id, "notification actor has no profile");
                    state.clamp_selection();
                }
            }
        }
        RowTarget::Conversation(id) => {
            tracing::debug!(conversation_id = id, "conversation opened");
            state.open_conversation = Some(id);
        }
        RowTarget::Comment(id) => {
            let View::Post(post_id) = state.view else {
                return Ok((false, vec![]));
            };
            let author = state
                .comments_for(post_id)
                .into_iter()
                .find(|c| c.id == id)
                .map(|c| c.username.clone());
            if let Some(handle) = author {
                state.open_profile(&handle)?;
            }
        }
        RowTarget::Setting(id) => {
            let kind = state.setting_defs().find(|d| d.id == id).map(|d| d.kind.clone());
            match kind {
                Some(SettingKind::Toggle { .. }) => {
                    state.toggle_setting(&id);
                }
                Some(SettingKind::Link { target }) => {
                    state.follow_link(&target);
                }
                None => return Ok((false, vec![])),
            }
        }
    }
    Ok((true, vec![]))
}

fn apply_post_action(state: &mut AppState, post_id: u64, action: PostAction) -> Result<(bool, Vec<Action>)> {
    tracing::debug!(post_id, action = ?action, "post action");
    match action {
        PostAction::ViewPost => {
            state.overlay = None;
            state.open_post(post_id)?;
        }
        PostAction::ViewProfile => {
            state.overlay = None;
            if let Some(handle) = state.dataset.post(post_id).map(|p| p.username.clone()) {
                state.open_profile(&handle)?;
            }
        }
        PostAction::Like => {
            state.store.toggle(EntityKind::Like, post_id);
            state.overlay = None;
        }
        PostAction::Save => {
            state.store.toggle(EntityKind::Save, post_id);
            state.overlay = None;
        }
        PostAction::Close => state.overlay = None,
    }
    Ok((true, vec![]))
}

/// Esc: closes the innermost layer. Returns `false` when there was nothing
/// to close.
fn go_back(state: &mut AppState) -> bool {
    if state.overlay.take().is_some() {
        return true;
    }
    if state.input_mode.is_typing() {
        state.input_mode = InputMode::Normal;
        return true;
    }
    if state.view == View::Messages && state.open_conversation.take().is_some() {
        return true;
    }
    state.back()
}

fn toggle_post(state: &mut AppState, kind: EntityKind) -> bool {
    let Some(post_id) = state.focused_post() else {
        tracing::debug!(kind = %kind, "no post focused");
        return false;
    };
    state.store.toggle(kind, post_id);
    if matches!(state.view, View::Profile(_)) {
        state.clamp_selection();
    }
    true
}

fn cycle_tab(state: &mut AppState, forward: bool) -> bool {
    match state.view {
        View::Search => state.search_tab = cycle(&SearchTab::ALL, state.search_tab, forward),
        View::Notifications => {
            state.notification_filter = cycle(&NotificationFilter::ALL, state.notification_filter, forward);
        }
        View::Profile(_) => state.profile_tab = cycle(&ProfileTab::ALL, state.profile_tab, forward),
        _ => return false,
    }
    state.selected_index = 0;
    true
}
