//! Tile classification.

/// Classification of a single maze cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Wall,
    Empty,
    Trap,
}

impl Tile {
    /// Whether the hero may enter a cell of this kind.
    ///
    /// Walls and traps are both forbidden hero destinations.
    #[inline]
    pub const fn hero_passable(self) -> bool {
        matches!(self, Tile::Empty)
    }

    /// Character representation of the tile in the textual layout format.
    pub const fn rune(self) -> char {
        match self {
            Tile::Wall => 'W',
            Tile::Empty => ' ',
            Tile::Trap => 'T',
        }
    }
}
