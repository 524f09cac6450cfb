use neonfeed::app::modes::NavTab;
use neonfeed::app::RowTarget;
use neonfeed::ui::Marker;
use neonfeed::{handle_event, initialize, Action, AppState, Config, EntityKind, Event, NeonfeedError, View};

fn state() -> AppState {
    initialize(&Config::default()).unwrap()
}

fn send(state: &mut AppState, events: &[Event]) {
    for event in events {
        handle_event(state, event).unwrap();
    }
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        handle_event(state, &Event::Char(c)).unwrap();
    }
}

fn banner_text(state: &AppState) -> Vec<String> {
    state
        .compute_viewmodel(40, 120)
        .banner
        .into_iter()
        .map(|line| line.text)
        .collect()
}

#[test]
fn like_on_feed_shows_on_post_detail_and_back() {
    let mut state = state();
    send(&mut state, &[Event::ToggleLike]);

    let vm = state.compute_viewmodel(40, 120);
    assert!(vm.display_items[0].markers.contains(&Marker::Liked));
    assert!(vm.display_items[0].meta.starts_with("♥ 235"));

    send(&mut state, &[Event::Open]);
    assert_eq!(state.view, View::Post(1));
    let status = banner_text(&state).pop().unwrap();
    assert!(status.starts_with("♥ 235"), "{status}");
    assert!(status.contains("liked"));

    send(&mut state, &[Event::ToggleLike, Event::Back]);
    assert_eq!(state.view, View::Home);
    let vm = state.compute_viewmodel(40, 120);
    assert!(!vm.display_items[0].markers.contains(&Marker::Liked));
    assert!(vm.display_items[0].meta.starts_with("♥ 234"));
}

#[test]
fn saved_post_appears_on_own_saved_tab() {
    let mut state = state();
    send(&mut state, &[Event::KeyDown, Event::ToggleSave]);
    assert!(state.store.is_on(EntityKind::Save, 2));

    send(&mut state, &[Event::Navigate(NavTab::Profile), Event::NextTab]);
    assert_eq!(state.rows(), vec![RowTarget::Post(2)]);

    send(&mut state, &[Event::ToggleSave]);
    assert!(state.rows().is_empty());
    let vm = state.compute_viewmodel(40, 120);
    assert!(vm.empty_state.is_some());
}

#[test]
fn saved_tab_of_another_profile_is_private() {
    let mut state = state();
    send(&mut state, &[Event::ToggleSave, Event::OpenProfile("mayapatel".to_string()), Event::NextTab]);
    assert_eq!(state.view, View::Profile(Some("mayapatel".to_string())));
    assert!(state.rows().is_empty());
}

#[test]
fn sensitive_post_passes_through_content_warning() {
    let mut state = state();
    send(&mut state, &[Event::KeyDown, Event::KeyDown, Event::Open]);
    assert_eq!(state.view, View::ContentWarning(3));
    assert!(banner_text(&state)[0].contains("Sensitive content"));

    send(&mut state, &[Event::Open]);
    assert_eq!(state.view, View::Post(3));

    send(&mut state, &[Event::Back]);
    assert_eq!(state.view, View::Home);
}

#[test]
fn content_warning_links_to_settings() {
    let mut state = state();
    send(&mut state, &[Event::OpenPost(3)]);
    assert!(banner_text(&state).iter().any(|l| l.contains("Settings")));

    send(&mut state, &[Event::OpenPreferences]);
    assert_eq!(state.view, View::Settings);

    send(&mut state, &[Event::Back]);
    assert_eq!(state.view, View::ContentWarning(3));
}

#[test]
fn preferences_link_is_inert_elsewhere() {
    let mut state = state();
    let (render, actions) = handle_event(&mut state, &Event::OpenPreferences).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(state.view, View::Home);
}

#[test]
fn follow_request_shows_labels_without_key_hints() {
    let mut state = state();
    send(&mut state, &[Event::Navigate(NavTab::Notifications)]);
    let vm = state.compute_viewmodel(40, 120);
    let request = vm
        .display_items
        .iter()
        .find(|item| item.title == "James Wilson")
        .unwrap();
    assert!(request.markers.contains(&Marker::FollowRequest));
    assert!(request.detail.ends_with("Accept · Decline"));
    assert!(!request.detail.contains("r: decline"));
}

#[test]
fn sensitive_setting_skips_the_warning() {
    let mut state = state();
    send(&mut state, &[Event::Navigate(NavTab::Settings), Event::ToggleSetting]);
    assert!(state.setting("sensitive"));

    send(&mut state, &[Event::OpenPost(3)]);
    assert_eq!(state.view, View::Post(3));
}

#[test]
fn submitted_comment_is_listed_and_counted() {
    let mut state = state();
    send(&mut state, &[Event::OpenPost(1), Event::ComposeComment]);
    type_text(&mut state, "  love it  ");
    send(&mut state, &[Event::Open]);

    assert!(!state.input_mode.is_typing());
    assert!(state.comment_draft.is_empty());
    assert_eq!(state.rows().last(), Some(&RowTarget::Comment(6)));

    let comment = state.comments_for(1).pop().unwrap();
    assert_eq!(comment.content, "love it");
    assert_eq!(comment.username, "alexjohnson");

    let post = state.dataset.post(1).unwrap().clone();
    assert_eq!(state.comment_count(&post), 46);
}

#[test]
fn blank_comment_is_discarded() {
    let mut state = state();
    send(&mut state, &[Event::OpenPost(1), Event::ComposeComment]);
    type_text(&mut state, "   ");
    send(&mut state, &[Event::Open]);
    assert!(state.local_comments.is_empty());
}

#[test]
fn opening_a_notification_marks_it_read_and_shows_actor() {
    let mut state = state();
    send(&mut state, &[Event::Navigate(NavTab::Notifications), Event::KeyDown, Event::Open]);

    assert!(state.store.is_on(EntityKind::Read, 2));
    assert_eq!(state.view, View::Profile(Some("sam".to_string())));

    send(&mut state, &[Event::Back]);
    assert_eq!(state.view, View::Notifications);
    assert_eq!(state.store.unread_count(), 2);
}

#[test]
fn notification_from_current_user_opens_own_profile() {
    let mut state = state();
    send(&mut state, &[Event::Navigate(NavTab::Notifications), Event::Open]);
    assert_eq!(state.view, View::Profile(None));
}

#[test]
fn mark_all_read_only_applies_on_notifications() {
    let mut state = state();
    let (render, _) = handle_event(&mut state, &Event::MarkAllRead).unwrap();
    assert!(!render);
    assert_eq!(state.store.unread_count(), 3);

    send(&mut state, &[Event::Navigate(NavTab::Notifications)]);
    let vm = state.compute_viewmodel(40, 120);
    assert_eq!(vm.header.subtitle.as_deref(), Some("You have 3 unread notifications"));

    send(&mut state, &[Event::MarkAllRead]);
    assert_eq!(state.store.unread_count(), 0);
    assert!(state.compute_viewmodel(40, 120).header.subtitle.is_none());
}

#[test]
fn unread_filter_shows_empty_state_after_reading_everything() {
    let mut state = state();
    send(
        &mut state,
        &[Event::Navigate(NavTab::Notifications), Event::NextTab, Event::MarkAllRead],
    );
    let vm = state.compute_viewmodel(40, 120);
    assert!(vm.display_items.is_empty());
    assert_eq!(vm.empty_state.unwrap().message, "No notifications found");
}

#[test]
fn following_from_profile_updates_follower_count() {
    let mut state = state();
    send(&mut state, &[Event::OpenProfile("@sam".to_string())]);
    assert!(banner_text(&state).iter().any(|l| l.starts_with("950 followers")));

    send(&mut state, &[Event::ToggleFollow]);
    assert!(state.store.is_on(EntityKind::Follow, 7));
    let banner = banner_text(&state);
    assert!(banner[0].contains("[Following]"));
    assert!(banner.iter().any(|l| l.starts_with("951 followers")));
}

#[test]
fn search_typing_filters_and_highlights() {
    let mut state = state();
    send(&mut state, &[Event::Navigate(NavTab::Search), Event::FocusInput]);
    type_text(&mut state, "maya");

    assert_eq!(state.rows().first(), Some(&RowTarget::Person(2)));
    let vm = state.compute_viewmodel(40, 120);
    assert_eq!(vm.display_items[0].title, "Maya Patel");
    assert_eq!(vm.display_items[0].highlight_ranges, vec![(0, 4)]);
    assert!(vm.search_bar.unwrap().is_focused);
}

#[test]
fn search_matching_nothing_is_empty_not_an_error() {
    let mut state = state();
    send(&mut state, &[Event::Navigate(NavTab::Search), Event::FocusInput]);
    type_text(&mut state, "zzzzqx");

    assert!(state.rows().is_empty());
    assert!(state.compute_viewmodel(40, 120).empty_state.is_some());
}

#[test]
fn unknown_post_is_not_found_and_leaves_view() {
    let mut state = state();
    let err = handle_event(&mut state, &Event::OpenPost(999)).unwrap_err();
    assert!(matches!(err, NeonfeedError::NotFound { kind: "post", .. }));
    assert_eq!(state.view, View::Home);
}

#[test]
fn navigation_retitles_the_pane() {
    let mut state = state();
    let (_, actions) = handle_event(&mut state, &Event::Navigate(NavTab::Messages)).unwrap();
    assert_eq!(actions, vec![Action::rename_for("Messages")]);

    let (_, actions) = handle_event(&mut state, &Event::KeyDown).unwrap();
    assert!(actions.is_empty());

    let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
    assert!(!render);
    assert_eq!(actions, vec![Action::CloseFocus]);
}

#[test]
fn settings_saved_banner_clears_on_next_event() {
    let mut state = state();
    send(&mut state, &[Event::Navigate(NavTab::Settings), Event::SaveSettings]);
    assert_eq!(banner_text(&state), vec!["✓ Saved!".to_string()]);

    send(&mut state, &[Event::KeyDown]);
    assert!(banner_text(&state).is_empty());
}

#[test]
fn escape_closes_overlay_before_leaving_view() {
    let mut state = state();
    send(&mut state, &[Event::OpenPost(2), Event::ShowActions]);
    assert!(state.overlay.is_some());

    send(&mut state, &[Event::Back]);
    assert!(state.overlay.is_none());
    assert_eq!(state.view, View::Post(2));

    send(&mut state, &[Event::Back]);
    assert_eq!(state.view, View::Home);
}

#[test]
fn overlay_like_entry_toggles_the_post_and_closes() {
    let mut state = state();
    send(&mut state, &[Event::ShowActions, Event::KeyDown, Event::KeyDown, Event::Open]);
    assert!(state.store.is_on(EntityKind::Like, 1));
    assert!(state.overlay.is_none());
    assert_eq!(state.view, View::Home);
}

#[test]
fn overlay_save_entry_toggles_the_post_and_closes() {
    let mut state = state();
    send(&mut state, &[Event::ShowActions, Event::KeyUp, Event::KeyUp, Event::Open]);
    assert!(state.store.is_on(EntityKind::Save, 1));
    assert!(state.overlay.is_none());
}

#[test]
fn opening_a_conversation_then_escape_closes_it() {
    let mut state = state();
    send(&mut state, &[Event::Navigate(NavTab::Messages), Event::Open]);
    assert_eq!(state.open_conversation, Some(1));

    send(&mut state, &[Event::Back]);
    assert_eq!(state.open_conversation, None);
    assert_eq!(state.view, View::Messages);
}

#[test]
fn selection_wraps_around() {
    let mut state = state();
    send(&mut state, &[Event::KeyUp]);
    assert_eq!(state.selected_index, state.rows().len() - 1);
    send(&mut state, &[Event::KeyDown]);
    assert_eq!(state.selected_index, 0);
}
