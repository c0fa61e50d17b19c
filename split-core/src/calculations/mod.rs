//! Check-splitting calculations.
//!
//! Pure arithmetic over validated inputs: gratuity applied to a check
//! amount, and the resulting total divided across the party.

pub mod split;

pub use split::{SplitBreakdown, round_half_up, split_check};
