use neonfeed::app::RowTarget;
use neonfeed::{initialize, parse_start_view, Config, NeonfeedError, View};
use std::collections::BTreeMap;

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn empty_map_gives_defaults() {
    assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
}

#[test]
fn all_keys_are_read() {
    let config = Config::from_zellij(&map(&[
        ("start_view", " notifications "),
        ("theme", "catppuccin-mocha"),
        ("theme_file", "~/themes/mine.toml"),
        ("trace_level", "neonfeed=debug"),
        ("username", "davidlee"),
    ]));

    assert_eq!(config.start_view, View::Notifications);
    assert_eq!(config.theme_name.as_deref(), Some("catppuccin-mocha"));
    assert_eq!(config.theme_file.as_deref(), Some("~/themes/mine.toml"));
    assert_eq!(config.trace_level.as_deref(), Some("neonfeed=debug"));
    assert_eq!(config.username.as_deref(), Some("davidlee"));
}

#[test]
fn invalid_start_view_falls_back_to_home() {
    let config = Config::from_zellij(&map(&[("start_view", "timeline")]));
    assert_eq!(config.start_view, View::Home);

    let err = parse_start_view("timeline").unwrap_err();
    assert!(matches!(err, NeonfeedError::Config(_)));
}

#[test]
fn blank_values_count_as_unset() {
    let config = Config::from_zellij(&map(&[("theme", "  "), ("username", "")]));
    assert!(config.theme_name.is_none());
    assert!(config.username.is_none());
}

#[test]
fn initialize_applies_start_view_and_username() {
    let config = Config {
        start_view: View::Profile(None),
        username: Some("mayapatel".to_string()),
        ..Default::default()
    };
    let state = initialize(&config).unwrap();

    assert_eq!(state.view, View::Profile(None));
    assert_eq!(state.current_user(), "mayapatel");
    assert_eq!(state.rows(), vec![RowTarget::Post(2)]);
}

#[test]
fn unknown_username_keeps_dataset_user() {
    let config = Config {
        username: Some("nobody".to_string()),
        ..Default::default()
    };
    let state = initialize(&config).unwrap();
    assert_eq!(state.current_user(), "alexjohnson");
}
