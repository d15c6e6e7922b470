//! Turn engine: pure resolution of a roll into an outcome.
//!
//! Given the acting player's position and a validated roll, compute
//! where the player ends up and what happened on the way: an exact
//! landing, a snake slide, a ladder climb, a forfeited overshoot, or the
//! win. The session module owns applying outcomes to state.

pub mod outcome;
pub mod resolve;

pub use outcome::{RollOutcome, Transition};
pub use resolve::resolve_roll;
