use escapade_core::{Maze, Point};

/// Pluggable beast movement rule.
///
/// The search consults the policy once per candidate hero move, passing the
/// hero's *new* position and the beast's *current* position. A policy may
/// take several internal sub-steps but reports one combined result, and it
/// must be a pure, total function of its three inputs: no state carried
/// across calls, always some position returned (standing still is expressed
/// by returning `beast` unchanged).
pub trait BeastPolicy {
    /// Compute the beast's next position.
    fn next_position(&self, maze: &Maze, hero: Point, beast: Point) -> Point;
}

impl<F> BeastPolicy for F
where
    F: Fn(&Maze, Point, Point) -> Point,
{
    fn next_position(&self, maze: &Maze, hero: Point, beast: Point) -> Point {
        self(maze, hero, beast)
    }
}
