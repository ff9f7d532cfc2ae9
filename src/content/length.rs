//! Game length classification.
//!
//! Most rulesets are either short or loopy, but the length column is free
//! content: some entries say "Short for finite boards" or cite a paper.
//! `GameLength` only produces the two canonical labels.

use serde::{Deserialize, Serialize};

use super::rich::RichContent;

/// Canonical game-tree finiteness classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameLength {
    /// Finite height and width.
    Short,
    /// Positions may repeat indefinitely.
    Loopy,
}

impl GameLength {
    /// Classify from a short/loopy flag.
    #[must_use]
    pub const fn from_short(is_short: bool) -> Self {
        if is_short {
            GameLength::Short
        } else {
            GameLength::Loopy
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            GameLength::Short => "Short",
            GameLength::Loopy => "Loopy",
        }
    }
}

impl std::fmt::Display for GameLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<GameLength> for RichContent {
    fn from(length: GameLength) -> Self {
        RichContent::text(length.label())
    }
}

/// Length cell content: `"Short"` or `"Loopy"`.
#[must_use]
pub fn length_label(is_short: bool) -> RichContent {
    GameLength::from_short(is_short).into()
}
