//! Settings catalogue.
//!
//! Toggle settings carry a default that seeds the session's settings map;
//! link settings point at another view.

use serde::{Deserialize, Serialize};

/// A titled group of settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingSection {
    pub title: String,
    pub settings: Vec<SettingDef>,
}

/// One row of the settings view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingDef {
    /// Stable key ("sensitive", "push", "edit-profile").
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub kind: SettingKind,
}

/// Behaviour of a setting row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SettingKind {
    /// Boolean switch with its shipped default.
    Toggle { default: bool },
    /// Navigation entry. `target` is a path such as `/profile`.
    Link { target: String },
}

/// Key of the setting that lets sensitive posts skip the content warning.
pub const SHOW_SENSITIVE: &str = "sensitive";
