//! **escapade-core** — Pursuit-evasion maze toolkit (core types).
//!
//! This crate provides the foundational types used across the *escapade*
//! workspace: geometry primitives, tile classification, and the maze model
//! with its textual-layout parser.

pub mod geom;
pub mod maze;
pub mod tile;

pub use geom::{Direction, Point, Range};
pub use maze::{Maze, MazeError};
pub use tile::Tile;
