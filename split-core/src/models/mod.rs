mod bill_split;
mod party_size;
mod tip_rate;

pub use bill_split::BillSplit;
pub use party_size::{PartySize, PartySizeError};
pub use tip_rate::{TipRate, TipRateError};
