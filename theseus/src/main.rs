//! Theseus — regression driver for the escapade escape search.
//!
//! Runs every corpus maze against both chaser variants and prints an
//! aggregate pass/fail count. Always exits 0; the printed line is the
//! result.

mod corpus;

use escapade_core::Maze;
use escapade_paths::{ChaserBeast, find_escape_route};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut ok = 0usize;
    let mut failed = 0usize;

    for ((crossing, blocked), layout) in corpus::entries() {
        let maze = Maze::parse(layout)?;
        for (expected, crosses_traps) in [(crossing, true), (blocked, false)] {
            let route = find_escape_route(&maze, &ChaserBeast::new(crosses_traps));
            if route.len() == expected {
                ok += 1;
            } else {
                failed += 1;
                eprintln!(
                    "expected {expected} moves, got {} (chaser crossing traps: {crosses_traps}) for:\n{maze}",
                    route.len()
                );
            }
        }
    }

    if failed == 0 {
        println!("Passed all {ok} tests!");
    } else {
        println!("{failed} of {} tests failed", ok + failed);
    }
    Ok(())
}
