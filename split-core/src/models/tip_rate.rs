use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a tip percentage is outside 0..=100.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("tip percentage must be at most {max}, got {got}", max = TipRate::MAX_PERCENT)]
pub struct TipRateError {
    got: u8,
}

/// Gratuity rate as a whole percentage of the check amount.
///
/// Always between 0 and 100 inclusive.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use split_core::TipRate;
///
/// let rate = TipRate::new(20).unwrap();
/// assert_eq!(rate.percent(), 20);
/// assert_eq!(rate.multiplier(), dec!(0.20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TipRate(u8);

impl TipRate {
    /// No gratuity.
    pub const ZERO: TipRate = TipRate(0);

    /// Largest selectable percentage.
    pub const MAX_PERCENT: u8 = 100;

    const DEFAULT_PERCENT: u8 = 20;

    /// Creates a tip rate from a whole percentage.
    ///
    /// # Errors
    ///
    /// Returns [`TipRateError`] when `percent` exceeds 100.
    pub fn new(percent: u8) -> Result<Self, TipRateError> {
        if percent > Self::MAX_PERCENT {
            return Err(TipRateError { got: percent });
        }
        Ok(Self(percent))
    }

    /// The whole-number percentage.
    pub fn percent(&self) -> u8 {
        self.0
    }

    /// The rate as a decimal multiplier, e.g. 20% → `0.20`.
    pub fn multiplier(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 2)
    }

    /// Picker label, e.g. `"20%"`.
    pub fn label(&self) -> String {
        format!("{}%", self.0)
    }

    /// Every selectable rate in ascending order.
    pub fn all() -> impl Iterator<Item = TipRate> {
        (0..=Self::MAX_PERCENT).map(TipRate)
    }
}

impl Default for TipRate {
    fn default() -> Self {
        Self(Self::DEFAULT_PERCENT)
    }
}

impl std::fmt::Display for TipRate {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_accepts_zero_percent() {
        let rate = TipRate::new(0).unwrap();

        assert_eq!(rate, TipRate::ZERO);
    }

    #[test]
    fn new_accepts_one_hundred_percent() {
        let rate = TipRate::new(100).unwrap();

        assert_eq!(rate.percent(), 100);
    }

    #[test]
    fn new_rejects_percent_above_one_hundred() {
        let result = TipRate::new(101);

        assert_eq!(result, Err(TipRateError { got: 101 }));
    }

    #[test]
    fn default_is_twenty_percent() {
        assert_eq!(TipRate::default().percent(), 20);
    }

    #[test]
    fn multiplier_scales_percent_to_a_fraction() {
        assert_eq!(TipRate::new(20).unwrap().multiplier(), dec!(0.20));
        assert_eq!(TipRate::new(5).unwrap().multiplier(), dec!(0.05));
        assert_eq!(TipRate::new(100).unwrap().multiplier(), dec!(1.00));
        assert_eq!(TipRate::ZERO.multiplier(), dec!(0));
    }

    #[test]
    fn all_covers_every_selectable_rate() {
        let rates: Vec<TipRate> = TipRate::all().collect();

        assert_eq!(rates.len(), 101);
        assert_eq!(rates.first().unwrap().percent(), 0);
        assert_eq!(rates.last().unwrap().percent(), 100);
    }

    #[test]
    fn display_includes_the_percent_sign() {
        assert_eq!(TipRate::default().to_string(), "20%");
    }
}
