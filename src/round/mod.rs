//! The round turn engine.
//!
//! - [`Click`] / [`Outcome`]: messages in, results out
//! - [`Round`]: the state machine
//! - [`RoundCompletion`]: single-shot signal that the round has ended
//! - [`RoundRecord`] / [`RoundEvent`]: the round's history

mod click;
mod completion;
mod event;
mod round;

pub use click::{Click, Outcome};
pub use completion::RoundCompletion;
pub use event::{PlacedTile, RoundEvent, RoundRecord, RoundSummary};
pub use round::{Round, RoundState};
