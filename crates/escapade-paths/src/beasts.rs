//! Provided beast movement policies.

use escapade_core::{Direction, Maze, Point, Tile};

use crate::traits::BeastPolicy;

/// A beast that charges the hero with axis-aligned steps.
///
/// Per hero move the chaser takes `speed` single steps (two by default).
/// Each single step first tries to close the row gap (up or down toward the
/// hero), then the column gap (left or right); if neither target cell is
/// enterable it stands still for that step. Walls always block; traps block
/// unless `crosses_traps` is set.
#[derive(Debug, Clone, Copy)]
pub struct ChaserBeast {
    speed: u32,
    crosses_traps: bool,
}

impl ChaserBeast {
    /// A chaser taking the default two single steps per hero move.
    pub fn new(crosses_traps: bool) -> Self {
        Self::with_speed(2, crosses_traps)
    }

    /// A chaser taking `speed` single steps per hero move.
    pub fn with_speed(speed: u32, crosses_traps: bool) -> Self {
        Self {
            speed,
            crosses_traps,
        }
    }

    fn single_step(&self, maze: &Maze, hero: Point, beast: Point) -> Point {
        if beast.y != hero.y {
            let dir = if beast.y > hero.y {
                Direction::Up
            } else {
                Direction::Down
            };
            let target = beast.step(dir);
            if self.enterable(maze, target) {
                return target;
            }
        }
        if beast.x != hero.x {
            let dir = if beast.x > hero.x {
                Direction::Left
            } else {
                Direction::Right
            };
            let target = beast.step(dir);
            if self.enterable(maze, target) {
                return target;
            }
        }
        beast
    }

    fn enterable(&self, maze: &Maze, p: Point) -> bool {
        match maze.tile(p) {
            Tile::Empty => true,
            Tile::Trap => self.crosses_traps,
            Tile::Wall => false,
        }
    }
}

impl BeastPolicy for ChaserBeast {
    fn next_position(&self, maze: &Maze, hero: Point, beast: Point) -> Point {
        let mut pos = beast;
        for _ in 0..self.speed {
            pos = self.single_step(maze, hero, pos);
        }
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze(s: &str) -> Maze {
        Maze::parse(s).unwrap()
    }

    #[test]
    fn closes_row_gap_before_column_gap() {
        let m = maze("H    \n     \n    B\nE    ");
        let beast = ChaserBeast::with_speed(1, false);
        // Hero at (0, 0), beast at (4, 2): the row gap goes first.
        let next = beast.next_position(&m, m.hero(), m.beast());
        assert_eq!(next, Point::new(4, 1));
    }

    #[test]
    fn steps_sideways_once_rows_align() {
        let m = maze("H   B\nE    ");
        let beast = ChaserBeast::with_speed(1, false);
        let next = beast.next_position(&m, m.hero(), m.beast());
        assert_eq!(next, Point::new(3, 0));
    }

    #[test]
    fn takes_two_steps_per_hero_move() {
        let m = maze("H     B\nE      ");
        let next = ChaserBeast::new(false).next_position(&m, m.hero(), m.beast());
        assert_eq!(next, Point::new(4, 0));
    }

    #[test]
    fn wall_stops_the_charge() {
        let m = maze("H W  B\nE     ");
        let beast = ChaserBeast::with_speed(1, false);
        // (3, 0) is open, (2, 0) is the wall: one step then stuck.
        let once = beast.next_position(&m, m.hero(), m.beast());
        assert_eq!(once, Point::new(4, 0));
        let stuck = beast.next_position(&m, m.hero(), Point::new(3, 0));
        assert_eq!(stuck, Point::new(3, 0));
    }

    #[test]
    fn trap_crossing_is_configurable() {
        let m = maze("H TB \nE    ");
        let hero = m.hero();
        let beast = m.beast();
        assert_eq!(
            ChaserBeast::with_speed(1, true).next_position(&m, hero, beast),
            Point::new(2, 0)
        );
        assert_eq!(
            ChaserBeast::with_speed(1, false).next_position(&m, hero, beast),
            beast
        );
    }

    #[test]
    fn catches_an_adjacent_hero() {
        let m = maze("HB\nE ");
        let next = ChaserBeast::new(false).next_position(&m, m.hero(), m.beast());
        // The closing step lands on the hero's cell, which is an empty
        // tile like any other as far as the beast is concerned.
        assert_eq!(next, m.hero());
    }
}
