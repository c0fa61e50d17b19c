use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when constructing a [`PartySize`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartySizeError {
    /// The party size must be between 2 and 99 people.
    #[error("party size must be between {min} and {max}, got {got}", min = PartySize::MIN_COUNT, max = PartySize::MAX_COUNT)]
    CountOutOfRange { got: u8 },

    /// The selector index must be between 0 and 97.
    #[error("party size index must be at most {max}, got {got}", max = PartySize::MAX_COUNT - PartySize::MIN_COUNT)]
    IndexOutOfRange { got: u8 },
}

/// Number of people splitting the check.
///
/// Always between 2 and 99 inclusive, so dividing by a party size can never
/// divide by zero. Selection controls address sizes by a zero-based index
/// where index 0 means 2 people; [`PartySize::from_index`] and
/// [`PartySize::index`] convert between the two.
///
/// # Example
///
/// ```
/// use split_core::PartySize;
///
/// let four = PartySize::new(4).unwrap();
/// assert_eq!(four.count(), 4);
/// assert_eq!(four.index(), 2);
/// assert_eq!(four, PartySize::from_index(2).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PartySize(u8);

impl PartySize {
    /// Smallest selectable party size.
    pub const MIN_COUNT: u8 = 2;

    /// Largest selectable party size.
    pub const MAX_COUNT: u8 = 99;

    /// Creates a party size from a people count.
    ///
    /// # Errors
    ///
    /// Returns [`PartySizeError::CountOutOfRange`] when `count` is outside
    /// 2..=99.
    pub fn new(count: u8) -> Result<Self, PartySizeError> {
        if (Self::MIN_COUNT..=Self::MAX_COUNT).contains(&count) {
            Ok(Self(count))
        } else {
            Err(PartySizeError::CountOutOfRange { got: count })
        }
    }

    /// Creates a party size from a selector index, where index 0 is the
    /// minimum size of 2 people.
    ///
    /// # Errors
    ///
    /// Returns [`PartySizeError::IndexOutOfRange`] when `index` exceeds 97.
    ///
    /// # Example
    ///
    /// ```
    /// use split_core::PartySize;
    ///
    /// assert_eq!(PartySize::from_index(0).unwrap().count(), 2);
    /// assert_eq!(PartySize::from_index(97).unwrap().count(), 99);
    /// assert!(PartySize::from_index(98).is_err());
    /// ```
    pub fn from_index(index: u8) -> Result<Self, PartySizeError> {
        if index > Self::MAX_COUNT - Self::MIN_COUNT {
            return Err(PartySizeError::IndexOutOfRange { got: index });
        }
        Ok(Self(index + Self::MIN_COUNT))
    }

    /// The number of people.
    pub fn count(&self) -> u8 {
        self.0
    }

    /// The zero-based selector index for this size.
    pub fn index(&self) -> u8 {
        self.0 - Self::MIN_COUNT
    }

    /// The count as a decimal, for use as a divisor.
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }

    /// Picker label, e.g. `"4 people"`.
    pub fn label(&self) -> String {
        format!("{} people", self.0)
    }

    /// Every selectable party size in ascending order.
    pub fn all() -> impl Iterator<Item = PartySize> {
        (Self::MIN_COUNT..=Self::MAX_COUNT).map(PartySize)
    }
}

impl Default for PartySize {
    fn default() -> Self {
        Self(Self::MIN_COUNT)
    }
}

impl std::fmt::Display for PartySize {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
