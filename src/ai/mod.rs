//! Computer opponents.
//!
//! ## Architecture
//!
//! One trait, `Strategy`, with three implementations. `Intermediate` is not
//! an algorithm of its own: it flips a biased coin between `Expert` and
//! `Novice`.
//!
//! Strategies hold no state between calls and never see the board mutably.
//! Randomness is injected through `GameRng` so tests can pin a seed.

pub mod expert;
pub mod policy;

pub use expert::{Continuation, Expert};
pub use policy::{strategy_for, Intermediate, Novice, Strategy};
