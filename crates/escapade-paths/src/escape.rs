//! Joint-state breadth-first escape search.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use escapade_core::{Direction, Maze, Point};

use crate::traits::BeastPolicy;

/// A node in the joint search graph: the hero's and the beast's positions
/// after the same number of hero moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointState {
    pub hero: Point,
    pub beast: Point,
}

/// Coordinator for escape searches.
///
/// Owns the frontier queue and the predecessor map so that repeated
/// searches reuse their allocations. Both are cleared at the start of every
/// query; no state carries over between calls.
pub struct EscapeSearch {
    frontier: VecDeque<JointState>,
    /// Predecessor links for every discovered state; the start state maps to
    /// `None`. Doubles as the visited set: a state is visited iff present.
    parents: HashMap<JointState, Option<JointState>>,
}

impl Default for EscapeSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl EscapeSearch {
    /// Create a new `EscapeSearch`.
    pub fn new() -> Self {
        Self {
            frontier: VecDeque::new(),
            parents: HashMap::new(),
        }
    }

    /// Compute the shortest escape route for the hero.
    ///
    /// Returns the hero's positions from (but excluding) the start position
    /// through the exit, in move order. After every hero move the beast
    /// responds according to `beast`; a move is legal only if its
    /// destination is an empty cell the responding beast does not land on.
    ///
    /// An empty vector means no escape route exists — or that none is
    /// needed, when the hero already starts on the exit. The two cases are
    /// distinguished by comparing `maze.hero()` with `maze.exit()`.
    pub fn escape_route<P: BeastPolicy>(&mut self, maze: &Maze, beast: &P) -> Vec<Point> {
        self.frontier.clear();
        self.parents.clear();

        let start = JointState {
            hero: maze.hero(),
            beast: maze.beast(),
        };
        self.frontier.push_back(start);
        self.parents.insert(start, None);

        while let Some(current) = self.frontier.pop_front() {
            if current.hero == maze.exit() {
                return self.reconstruct(current);
            }

            for dir in Direction::ALL {
                let hero = current.hero.step(dir);
                if !maze.tile(hero).hero_passable() {
                    continue;
                }
                let next = JointState {
                    hero,
                    beast: beast.next_position(maze, hero, current.beast),
                };
                if next.beast == next.hero {
                    // Caught.
                    continue;
                }
                if let Entry::Vacant(e) = self.parents.entry(next) {
                    e.insert(Some(current));
                    self.frontier.push_back(next);
                }
            }
        }

        Vec::new()
    }

    /// Walk predecessor links from `last` back to the start state, then
    /// reverse into move order. The start position itself is dropped.
    fn reconstruct(&self, last: JointState) -> Vec<Point> {
        let mut path = Vec::new();
        let mut state = Some(last);
        while let Some(s) = state {
            path.push(s.hero);
            state = self.parents[&s];
        }
        path.pop();
        path.reverse();
        path
    }
}

/// Run a one-off escape search.
///
/// Convenience wrapper around [`EscapeSearch::escape_route`] for callers
/// that do not reuse search buffers across queries.
pub fn find_escape_route<P: BeastPolicy>(maze: &Maze, beast: &P) -> Vec<Point> {
    EscapeSearch::new().escape_route(maze, beast)
}
