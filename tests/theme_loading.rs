use neonfeed::{Config, NeonfeedError, Theme};
use std::io::Write;

const CUSTOM_THEME: &str = r##"
name = "synthwave"

[colors]
header_fg = "#ffffff"
header_bg = "#241b2f"
selection_fg = "#241b2f"
selection_bg = "#ff7edb"
text_normal = "#f0f0f0"
text_dim = "#848bbd"
border = "#495495"
search_bar_border = "#36f9f6"
match_highlight_fg = "#241b2f"
match_highlight_bg = "#fede5d"
empty_state_fg = "#36f9f6"
accent = "#ff7edb"
like_fg = "#fe4450"
saved_fg = "#ff7edb"
unread_fg = "#36f9f6"
online_fg = "#72f1b8"
warning_fg = "#f97e72"
"##;

fn theme_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn custom_theme_file_loads() {
    let file = theme_file(CUSTOM_THEME);
    let theme = Theme::from_file(file.path()).unwrap();

    assert_eq!(theme.name, "synthwave");
    assert_eq!(theme.colors.header_bg.as_deref(), Some("#241b2f"));
    assert_eq!(theme.colors.like_fg, "#fe4450");
}

#[test]
fn incomplete_theme_file_is_a_theme_error() {
    let file = theme_file("name = \"broken\"\n[colors]\nheader_fg = \"#ffffff\"\n");
    let err = Theme::from_file(file.path()).unwrap_err();
    assert!(matches!(err, NeonfeedError::Theme(_)));
}

#[test]
fn missing_theme_file_is_a_theme_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Theme::from_file(dir.path().join("nope.toml")).unwrap_err();
    assert!(err.to_string().starts_with("Theme error: failed to read"));
}

#[test]
fn config_prefers_theme_file_over_name() {
    let file = theme_file(CUSTOM_THEME);
    let config = Config {
        theme_name: Some("catppuccin-latte".to_string()),
        theme_file: Some(file.path().to_string_lossy().into_owned()),
        ..Default::default()
    };
    assert_eq!(config.load_theme().name, "synthwave");
}

#[test]
fn broken_theme_file_falls_back_to_default() {
    let file = theme_file("not toml at all [[[");
    let config = Config {
        theme_file: Some(file.path().to_string_lossy().into_owned()),
        ..Default::default()
    };
    assert_eq!(config.load_theme(), Theme::default());
}

#[test]
fn unknown_theme_name_falls_back_to_default() {
    let config = Config {
        theme_name: Some("nonexistent".to_string()),
        ..Default::default()
    };
    assert_eq!(config.load_theme().name, "neon-night");

    let config = Config {
        theme_name: Some("catppuccin-mocha".to_string()),
        ..Default::default()
    };
    assert_eq!(config.load_theme().name, "catppuccin-mocha");
}
