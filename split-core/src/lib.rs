pub mod calculations;
pub mod models;

pub use calculations::{SplitBreakdown, round_half_up, split_check};
pub use models::*;
