//! Pursuit-aware escape routing for escapade mazes.
//!
//! The central entry point is [`find_escape_route`]: a breadth-first search
//! over joint (hero, beast) states that returns the shortest sequence of
//! hero moves reaching the exit without ever being caught. The beast's
//! movement rule is injected through the [`BeastPolicy`] trait, so the
//! search works with arbitrary deterministic pursuit behaviors; a standard
//! axis-chasing policy is provided as [`ChaserBeast`].
//!
//! [`EscapeSearch`] owns the search's working buffers so that repeated
//! queries reuse their allocations.

mod beasts;
mod distance;
mod escape;
mod traits;

pub use beasts::ChaserBeast;
pub use distance::manhattan;
pub use escape::{EscapeSearch, JointState, find_escape_route};
pub use traits::BeastPolicy;
