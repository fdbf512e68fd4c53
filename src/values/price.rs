//! Price value object
//!
//! Defines [`Price`], a strictly positive arbitrary-precision decimal.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::ValidationError;

/// A strictly positive monetary amount.
///
/// Constructed from a decimal-literal string and stored as a
/// [`rust_decimal::Decimal`], so monetary comparisons are exact rather than
/// subject to binary floating-point rounding. Arithmetic produces new
/// instances; there is no in-place mutation.
///
/// Equality against another `Price` compares decimals numerically, so
/// `Price::create("8.0")` equals `Price::create("8.00")`. Equality against a
/// raw string compares the decimal's canonical string form literally: by
/// that path `"50"` and `"50.00"` are different even though numerically
/// equal. That asymmetry reproduces the behavior this type models and is
/// intentional.
///
/// # Examples
///
/// ```
/// use sales_records::values::Price;
///
/// let unit = Price::create("19.99").unwrap();
/// let shipping = Price::create("5.01").unwrap();
/// assert_eq!(unit + shipping, Price::create("25").unwrap());
///
/// // Subtraction must leave a positive amount
/// assert!(shipping.subtract(unit).is_err());
///
/// // Rendering is always two decimal places
/// assert_eq!(Price::create("50").unwrap().to_string(), "50.00");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Creates a `Price` from a decimal-literal string.
    ///
    /// Surrounding whitespace is ignored, matching how decimal literals are
    /// usually accepted from spreadsheet cells.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPrice`] when the input is blank,
    /// not parseable as a decimal number, or not strictly positive.
    pub fn create(value: &str) -> Result<Self, ValidationError> {
        let literal = value.trim();
        if literal.is_empty() {
            return Err(ValidationError::InvalidPrice(
                "must be a non-empty string".to_string(),
            ));
        }
        let parsed = Decimal::from_str(literal).map_err(|_| {
            ValidationError::InvalidPrice(format!("`{literal}` is not a valid decimal number"))
        })?;
        if parsed <= Decimal::ZERO {
            return Err(ValidationError::InvalidPrice(
                "must be a positive decimal number".to_string(),
            ));
        }
        Ok(Self(parsed))
    }

    /// Subtracts another price, returning a new instance.
    ///
    /// Subtraction never represents a zero or negative delta.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPrice`] when the difference is not
    /// strictly positive.
    pub fn subtract(self, other: Self) -> Result<Self, ValidationError> {
        let difference = self.0 - other.0;
        if difference <= Decimal::ZERO {
            return Err(ValidationError::InvalidPrice(
                "resulting price must be positive".to_string(),
            ));
        }
        Ok(Self(difference))
    }

    /// Returns the inner decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl Add for Price {
    type Output = Self;

    /// The sum of two positive amounts is positive, so addition needs no
    /// re-validation.
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl fmt::Display for Price {
    /// Formats to exactly two decimal places regardless of stored precision.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.2}", self.0)
    }
}

impl PartialEq<str> for Price {
    /// Literal comparison against the canonical decimal string form.
    fn eq(&self, other: &str) -> bool {
        self.0.to_string() == other
    }
}

impl PartialEq<&str> for Price {
    fn eq(&self, other: &&str) -> bool {
        self.0.to_string() == *other
    }
}

impl PartialEq<String> for Price {
    fn eq(&self, other: &String) -> bool {
        self.0.to_string() == *other
    }
}

impl PartialEq<Price> for str {
    fn eq(&self, other: &Price) -> bool {
        other.0.to_string() == self
    }
}

impl PartialEq<Price> for &str {
    fn eq(&self, other: &Price) -> bool {
        other.0.to_string() == *self
    }
}
