//! Maze model: tile storage, marker positions, and textual-layout parsing.

use std::fmt;

use crate::geom::{Point, Range};
use crate::tile::Tile;

/// An immutable rectangular maze with fixed hero, beast and exit positions.
///
/// Built once, from a textual layout via [`Maze::parse`] or programmatically
/// via [`Maze::from_parts`], and read-only thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    /// Row-major tile storage, `bounds.width()` entries per row.
    tiles: Vec<Tile>,
    bounds: Range,
    hero: Point,
    beast: Point,
    exit: Point,
}

impl Maze {
    /// Parse a textual layout.
    ///
    /// Each character maps to one cell: space → empty, `W` → wall, `T` →
    /// trap, `H`/`B`/`E` → hero/beast/exit marker standing on an empty cell
    /// (each exactly once), `\n` → row separator. All rows must have the
    /// same length. A trailing newline opens an empty final row and is
    /// rejected as non-rectangular.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        fn set_marker(slot: &mut Option<Point>, ch: char, pos: Point) -> Result<(), MazeError> {
            if slot.is_some() {
                return Err(MazeError::DuplicateMarker { ch, pos });
            }
            *slot = Some(pos);
            Ok(())
        }

        let mut tiles: Vec<Tile> = Vec::new();
        let mut hero: Option<Point> = None;
        let mut beast: Option<Point> = None;
        let mut exit: Option<Point> = None;
        let mut x: i32 = 0;
        let mut y: i32 = 0;
        let mut width: Option<i32> = None;

        for ch in s.chars() {
            if ch == '\n' {
                match width {
                    None => width = Some(x),
                    Some(w) if w != x => return Err(MazeError::NonRectangular { row: y }),
                    Some(_) => {}
                }
                x = 0;
                y += 1;
                continue;
            }
            let pos = Point::new(x, y);
            let tile = match ch {
                ' ' => Tile::Empty,
                'W' => Tile::Wall,
                'T' => Tile::Trap,
                'H' => {
                    set_marker(&mut hero, ch, pos)?;
                    Tile::Empty
                }
                'B' => {
                    set_marker(&mut beast, ch, pos)?;
                    Tile::Empty
                }
                'E' => {
                    set_marker(&mut exit, ch, pos)?;
                    Tile::Empty
                }
                _ => return Err(MazeError::UnknownSymbol { ch, pos }),
            };
            tiles.push(tile);
            x += 1;
        }
        // Last row has no trailing separator.
        match width {
            None => width = Some(x),
            Some(w) if w != x => return Err(MazeError::NonRectangular { row: y }),
            Some(_) => {}
        }

        let hero = hero.ok_or(MazeError::MissingMarker { ch: 'H' })?;
        let beast = beast.ok_or(MazeError::MissingMarker { ch: 'B' })?;
        let exit = exit.ok_or(MazeError::MissingMarker { ch: 'E' })?;

        let width = width.unwrap_or(0);
        let height = if tiles.is_empty() { 0 } else { y + 1 };
        Ok(Self {
            tiles,
            bounds: Range::new(0, 0, width, height),
            hero,
            beast,
            exit,
        })
    }

    /// Build a maze directly from row-major tiles, `width` per row.
    ///
    /// Unlike [`Maze::parse`], marker positions are taken as given and may
    /// coincide (a hero that starts on the exit is constructible this way).
    pub fn from_parts(
        width: i32,
        tiles: Vec<Tile>,
        hero: Point,
        beast: Point,
        exit: Point,
    ) -> Result<Self, MazeError> {
        if width <= 0 || tiles.len() % width as usize != 0 {
            return Err(MazeError::NonRectangular {
                row: (tiles.len() / width.max(1) as usize) as i32,
            });
        }
        let height = (tiles.len() / width as usize) as i32;
        Ok(Self {
            tiles,
            bounds: Range::new(0, 0, width, height),
            hero,
            beast,
            exit,
        })
    }

    /// Tile at `p`. Any point outside the maze bounds is a wall.
    #[inline]
    pub fn tile(&self, p: Point) -> Tile {
        if !self.bounds.contains(p) {
            return Tile::Wall;
        }
        self.tiles[(p.y * self.bounds.width() + p.x) as usize]
    }

    /// The hero's fixed starting position.
    #[inline]
    pub fn hero(&self) -> Point {
        self.hero
    }

    /// The beast's fixed starting position.
    #[inline]
    pub fn beast(&self) -> Point {
        self.beast
    }

    /// The exit position.
    #[inline]
    pub fn exit(&self) -> Point {
        self.exit
    }

    /// The bounding range of the maze.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size as a point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.bounds.width(), self.bounds.height())
    }
}

impl fmt::Display for Maze {
    /// Render the layout back to text, markers overlaid on their cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.bounds.height() {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.bounds.width() {
                let p = Point::new(x, y);
                let ch = if p == self.hero {
                    'H'
                } else if p == self.beast {
                    'B'
                } else if p == self.exit {
                    'E'
                } else {
                    self.tile(p).rune()
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Errors from constructing a [`Maze`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A hero/beast/exit marker appeared more than once.
    DuplicateMarker { ch: char, pos: Point },
    /// A required hero/beast/exit marker never appeared.
    MissingMarker { ch: char },
    /// A character outside the recognized set.
    UnknownSymbol { ch: char, pos: Point },
    /// A row whose length differs from the first row's.
    NonRectangular { row: i32 },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "maze: duplicate marker \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingMarker { ch } => {
                write!(f, "maze: missing marker \u{201c}{ch}\u{201d}")
            }
            Self::UnknownSymbol { ch, pos } => {
                write!(f, "maze: unknown symbol \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::NonRectangular { row } => {
                write!(f, "maze: row {row} differs in length from the first row")
            }
        }
    }
}

impl std::error::Error for MazeError {}
