//! A single colored item placed inside a container.
//!
//! Grounded on `chroma_oracle.lib.item.Item`: an item's identity *is* its
//! color, and two items compare equal iff their colors do.

use crate::color::Color;
use std::fmt;

/// A single colored item. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Item {
    color: Color,
}

impl Item {
    pub fn new(color: Color) -> Self {
        Item { color }
    }

    pub fn color(self) -> Color {
        self.color
    }

    pub fn is_unknown(self) -> bool {
        self.color.is_unknown()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<Color> for Item {
    fn from(color: Color) -> Self {
        Item::new(color)
    }
}
