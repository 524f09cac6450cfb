//! Zellij plugin wrapper and entry point.
//!
//! The thin layer between the neonfeed library and Zellij: it maps keys to
//! library events, runs `handle_event`, and executes the returned actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult`
//! 3. **Update**: Map keys, delegate to the library, execute actions
//! 4. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! In normal mode:
//! - `1`-`6`: Home, Search, Notifications, Messages, Profile, Settings
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `Enter`: Open; `Esc`: Back; `q`: Hide the pane
//! - `l`/`s`/`f`: Like, save, follow
//! - `r`/`R`: Mark read, mark all read
//! - `Tab`/`Shift+Tab`: Cycle sub-tabs and filters
//! - `/`: Focus the input box; `c`: Compose a comment
//! - `a`: Post actions menu
//! - `Space`: Toggle a setting; `w`: Save settings
//! - `p`: From a content warning, open Settings
//!
//! While typing, every character goes to the input; `Enter` submits and
//! `Esc` leaves the input.
//!
//! Built for a non-wasm target, the binary prints one frame of the
//! configured start view instead: `neonfeed start_view=notifications`.

#![allow(clippy::multiple_crate_versions)]

#[cfg(not(target_family = "wasm"))]
use std::collections::BTreeMap;

#[cfg(target_family = "wasm")]
use plugin::State;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(State);

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use neonfeed::app::modes::NavTab;
    use neonfeed::{handle_event, Action, AppState, Config, Event, InputMode};

    /// Plugin state wrapper.
    #[derive(Default)]
    pub struct State {
        /// `None` until `load` has run, or if the embedded dataset failed.
        app: Option<AppState>,
    }

    impl ZellijPlugin for State {
        /// Parses configuration, builds the app state and subscribes to keys.
        ///
        /// Requests `ChangeApplicationState` to hide and retitle the pane.
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            neonfeed::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();
            tracing::debug!(config = ?config, "parsed configuration");

            match neonfeed::initialize(&config) {
                Ok(app) => self.app = Some(app),
                Err(e) => tracing::error!(error = %e, "failed to initialize neonfeed"),
            }

            request_permission(&[PermissionType::ChangeApplicationState]);
            subscribe(&[EventType::Key, EventType::PermissionRequestResult]);
        }

        /// Returns `true` if the plugin UI should re-render.
        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let Some(app) = self.app.as_mut() else {
                return false;
            };

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match map_key_event(app, key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                    match status {
                        PermissionStatus::Granted => {
                            execute_action(&Action::rename_for(&app.view.title()));
                        }
                        PermissionStatus::Denied => {
                            tracing::warn!("permissions denied - pane cannot be hidden or renamed");
                        }
                    }
                    return false;
                }
                _ => return false,
            };

            let _guard = tracing::debug_span!("plugin_update", event = ?our_event).entered();

            match handle_event(app, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(action_count = actions.len(), should_render, "event handled");
                    for action in &actions {
                        execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::error!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            match &self.app {
                Some(app) => neonfeed::ui::render(app, rows, cols),
                None => print!("neonfeed failed to start; see neonfeed-otlp.json"),
            }
        }
    }

    /// Maps keyboard input to application events for the current input mode.
    fn map_key_event(app: &AppState, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if let InputMode::Typing(_) = app.input_mode {
            return match key.bare_key {
                BareKey::Enter => Some(Event::Open),
                BareKey::Esc => Some(Event::Back),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Down => Some(Event::KeyDown),
                BareKey::Up => Some(Event::KeyUp),
                BareKey::Char(c) => Some(Event::Char(c)),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevTab,
            BareKey::Tab => Event::NextTab,
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::Open,
            BareKey::Esc => Event::Back,
            BareKey::Char(c @ '1'..='6') => {
                let index = c.to_digit(10).map_or(1, |d| d as usize);
                Event::Navigate(NavTab::from_index(index)?)
            }
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Char('l') => Event::ToggleLike,
            BareKey::Char('s') => Event::ToggleSave,
            BareKey::Char('f') => Event::ToggleFollow,
            BareKey::Char('r') => Event::MarkRead,
            BareKey::Char('R') => Event::MarkAllRead,
            BareKey::Char('/') => Event::FocusInput,
            BareKey::Char('a') => Event::ShowActions,
            BareKey::Char('c') => Event::ComposeComment,
            BareKey::Char(' ') => Event::ToggleSetting,
            BareKey::Char('w') => Event::SaveSettings,
            BareKey::Char('p') => Event::OpenPreferences,
            _ => return None,
        })
    }

    fn execute_action(action: &Action) {
        tracing::debug!(action = ?action, "executing action");
        match action {
            Action::CloseFocus => hide_self(),
            Action::RenamePane { title } => {
                rename_plugin_pane(get_plugin_ids().plugin_id, title);
            }
        }
    }
}

/// Parses `key=value` arguments into a Zellij-style configuration map.
#[cfg(not(target_family = "wasm"))]
fn parse_args(args: impl IntoIterator<Item = String>) -> BTreeMap<String, String> {
    args.into_iter()
        .filter_map(|arg| {
            let (key, value) = arg.split_once('=')?;
            Some((key.trim().to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(not(target_family = "wasm"))]
fn main() {
    let configuration = parse_args(std::env::args().skip(1));
    let config = neonfeed::Config::from_zellij(&configuration);

    match neonfeed::initialize(&config) {
        Ok(state) => {
            print!("\u{1b}[2J");
            neonfeed::ui::render(&state, 30, 100);
            println!("\u{1b}[31;1H");
        }
        Err(e) => {
            eprintln!("neonfeed: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(all(test, not(target_family = "wasm")))]
mod tests {
    use super::parse_args;

    #[test]
    fn parses_key_value_arguments() {
        let map = parse_args(["start_view=search".to_string(), "theme = x".to_string(), "junk".to_string()]);
        assert_eq!(map.get("start_view").map(String::as_str), Some("search"));
        assert_eq!(map.get("theme").map(String::as_str), Some(" x"));
        assert_eq!(map.len(), 2);
    }
}
