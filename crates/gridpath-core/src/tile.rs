//! The [`TileState`] type — the role of a single board cell.

use std::fmt;

/// The state of one board cell.
///
/// A search only ever moves a tile from `Free` to `Closed` and from `Closed`
/// to `Path`, plus the optional `Start`/`Finish` stamps once a route is found.
/// `Blocked` tiles are never written.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileState {
    /// Traversable and not yet visited.
    #[default]
    Free,
    /// Impassable.
    Blocked,
    /// Admitted to the frontier or expanded, but not on the route.
    Closed,
    /// On the discovered route.
    Path,
    Start,
    Finish,
}

impl TileState {
    /// Tile for a numeric board value: `0` is free, anything else blocked.
    #[inline]
    pub const fn from_value(v: i64) -> Self {
        if v == 0 { Self::Free } else { Self::Blocked }
    }

    /// Single-character glyph used when rendering a board.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Free => '0',
            Self::Blocked => 'X',
            Self::Closed => '-',
            Self::Path => 'P',
            Self::Start => 'S',
            Self::Finish => 'F',
        }
    }

    /// Whether a search may step onto this tile.
    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, Self::Free)
    }
}

impl fmt::Display for TileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: [TileState; 6] = [
        TileState::Free,
        TileState::Blocked,
        TileState::Closed,
        TileState::Path,
        TileState::Start,
        TileState::Finish,
    ];

    #[test]
    fn from_value_zero_is_free() {
        assert_eq!(TileState::from_value(0), TileState::Free);
        assert_eq!(TileState::from_value(1), TileState::Blocked);
        assert_eq!(TileState::from_value(-7), TileState::Blocked);
    }

    #[test]
    fn glyphs_are_distinct() {
        let glyphs: HashSet<char> = ALL.iter().map(|t| t.glyph()).collect();
        assert_eq!(glyphs.len(), ALL.len());
        assert_eq!(TileState::Closed.to_string(), "-");
    }

    #[test]
    fn only_free_is_free() {
        let free: Vec<_> = ALL.into_iter().filter(|t| t.is_free()).collect();
        assert_eq!(free, vec![TileState::Free]);
    }
}
