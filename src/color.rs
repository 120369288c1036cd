//! The closed set of colors an item can take, plus the distinguished
//! `Unknown` marker used for hidden grid positions.
//!
//! Colors compare by identity only. The RGB triple attached to each
//! non-`Unknown` variant is a rendering concern used by `crate::display`
//! and must never be consulted by equality, hashing, or search.

use std::fmt;

/// All colors an item can hold, including the unresolved marker.
///
/// `ALL` lists every resolvable color in a fixed, deterministic order; this
/// order is load-bearing for `crate::resolver`, which walks it to pick
/// unused colors for fully-hidden slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Pink,
    Brown,
    Green,
    LightGreen,
    DarkGreen,
    Yellow,
    Blue,
    LightBlue,
    DarkBlue,
    Grey,
    Purple,
    Orange,
    White,
    Cyan,
    /// A hidden grid position whose true color has not been determined.
    Unknown,
}

/// Every resolvable color, in the fixed order `crate::resolver` relies on.
pub const ALL: [Color; 15] = [
    Color::Red,
    Color::Pink,
    Color::Brown,
    Color::Green,
    Color::LightGreen,
    Color::DarkGreen,
    Color::Yellow,
    Color::Blue,
    Color::LightBlue,
    Color::DarkBlue,
    Color::Grey,
    Color::Purple,
    Color::Orange,
    Color::White,
    Color::Cyan,
];

impl Color {
    /// RGB triple used purely for terminal rendering (`crate::display`).
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Red => (220, 20, 60),
            Color::Pink => (255, 105, 180),
            Color::Brown => (139, 69, 19),
            Color::Green => (34, 139, 34),
            Color::LightGreen => (144, 238, 144),
            Color::DarkGreen => (0, 100, 0),
            Color::Yellow => (255, 215, 0),
            Color::Blue => (30, 144, 255),
            Color::LightBlue => (173, 216, 230),
            Color::DarkBlue => (0, 0, 139),
            Color::Grey => (128, 128, 128),
            Color::Purple => (128, 0, 128),
            Color::Orange => (255, 140, 0),
            Color::White => (245, 245, 245),
            Color::Cyan => (0, 255, 255),
            Color::Unknown => (102, 102, 102),
        }
    }

    /// The name used in the on-disk grid format and in the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Pink => "PINK",
            Color::Brown => "BROWN",
            Color::Green => "GREEN",
            Color::LightGreen => "LIGHT_GREEN",
            Color::DarkGreen => "DARK_GREEN",
            Color::Yellow => "YELLOW",
            Color::Blue => "BLUE",
            Color::LightBlue => "LIGHT_BLUE",
            Color::DarkBlue => "DARK_BLUE",
            Color::Grey => "GREY",
            Color::Purple => "PURPLE",
            Color::Orange => "ORANGE",
            Color::White => "WHITE",
            Color::Cyan => "CYAN",
            Color::Unknown => "UNKNOWN",
        }
    }

    /// Parse a grid cell's raw string into a `Color`. Both `"?"` and
    /// `"UNKNOWN"` denote the hidden marker. Matching is case-sensitive:
    /// `"red"` is not `"RED"`.
    pub fn parse(raw: &str) -> Option<Color> {
        if raw == "?" || raw == "UNKNOWN" {
            return Some(Color::Unknown);
        }
        ALL.iter().copied().find(|c| c.name() == raw)
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, Color::Unknown)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
