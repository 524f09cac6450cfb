//! Entity-kind tags selecting a membership set.

use std::fmt;

/// Which membership set a toggle or query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Posts the user liked. Keyed by post id.
    Like,
    /// Posts the user saved. Keyed by post id.
    Save,
    /// People the user follows. Keyed by person id.
    Follow,
    /// Notifications the user has read. Keyed by notification id.
    Read,
}

impl EntityKind {
    /// Every kind, in a stable order.
    pub const ALL: [Self; 4] = [Self::Like, Self::Save, Self::Follow, Self::Read];

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Like => 0,
            Self::Save => 1,
            Self::Follow => 2,
            Self::Read => 3,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Like => "like",
            Self::Save => "save",
            Self::Follow => "follow",
            Self::Read => "read",
        })
    }
}
