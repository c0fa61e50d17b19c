mod bill;
mod tip_picker;

pub use bill::BillScreen;
pub use tip_picker::TipPercentageScreen;
