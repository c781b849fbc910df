//! The status reactions and how a pull request label maps onto them.

use std::fmt;

/// Label set once a reviewer delegated the merge to the author.
pub const DELEGATED: &str = "delegated";

/// Label set once the pull request was sent to bors.
pub const READY_TO_MERGE: &str = "ready-to-merge";

/// Bors prefixes the title of a merged pull request with this.
pub const MERGED_BY_BORS_PREFIX: &str = "[Merged by Bors]";

/// An emoji reaction used as a status marker on a review message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusEmoji {
    PeaceSign,
    Bors,
    Merge,
}

impl StatusEmoji {
    /// Every status emoji, in the order they are cleared.
    pub const ALL: [StatusEmoji; 3] = [
        StatusEmoji::PeaceSign,
        StatusEmoji::Bors,
        StatusEmoji::Merge,
    ];

    /// The Zulip emoji name.
    pub fn name(self) -> &'static str {
        match self {
            StatusEmoji::PeaceSign => "peace_sign",
            StatusEmoji::Bors => "bors",
            StatusEmoji::Merge => "merge",
        }
    }

    pub fn from_name(name: &str) -> Option<StatusEmoji> {
        StatusEmoji::ALL.into_iter().find(|e| e.name() == name)
    }

    /// Picks the reaction reflecting `label`, if any. The first rule that
    /// matches wins.
    pub fn for_label(label: &str) -> Option<StatusEmoji> {
        if label == DELEGATED {
            Some(StatusEmoji::PeaceSign)
        } else if label == READY_TO_MERGE {
            Some(StatusEmoji::Bors)
        } else if label.starts_with(MERGED_BY_BORS_PREFIX) {
            Some(StatusEmoji::Merge)
        } else {
            None
        }
    }
}

impl fmt::Display for StatusEmoji {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, ":{}:", self.name())
    }
}
