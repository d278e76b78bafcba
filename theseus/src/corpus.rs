//! The fixed regression corpus: maze layouts plus expected escape lengths.

/// Maze layouts, blank-line separated, in corpus order.
const MAZES: &str = include_str!("../data/mazes.txt");

/// Expected escape lengths (number of hero moves) for each maze in
/// [`MAZES`]: first for the trap-crossing chaser, then for the
/// trap-blocked one. Zero means no escape route exists.
pub const EXPECTED: &[(usize, usize)] = &[
    (6, 6),
    (0, 0),
    (13, 13),
    (0, 0),
    (0, 0),
    (0, 0),
    (6, 6),
    (9, 9),
    (9, 9),
    (0, 25),
    (15, 15),
    (0, 26),
    (35, 35),
    (0, 32),
    (34, 34),
];

/// Iterate over `(expected lengths, layout)` pairs.
pub fn entries() -> impl Iterator<Item = ((usize, usize), &'static str)> {
    let layouts = MAZES
        .split("\n\n")
        .map(|m| m.strip_suffix('\n').unwrap_or(m));
    EXPECTED.iter().copied().zip(layouts)
}
