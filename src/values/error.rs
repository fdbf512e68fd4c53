//! Domain validation error taxonomy

use thiserror::Error;

/// Error raised when a value object or record field rejects its input.
///
/// One variant per invariant category. Each variant carries a message
/// describing the rejected input; the variant itself identifies which
/// invariant was violated, so callers can match on the kind while still
/// reporting a readable description.
///
/// # Examples
///
/// ```
/// use sales_records::values::{Price, ValidationError};
///
/// let error = Price::create("-5").unwrap_err();
/// assert!(matches!(error, ValidationError::InvalidPrice(_)));
/// assert!(error.to_string().starts_with("invalid price"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An identifier was zero, negative, or out of range.
    #[error("invalid id: {0}")]
    InvalidId(String),
    /// A name field was blank.
    #[error("invalid name: {0}")]
    InvalidName(String),
    /// A product category was blank.
    #[error("invalid category: {0}")]
    InvalidCategory(String),
    /// A price literal was blank, unparseable, or not strictly positive,
    /// or a subtraction produced a non-positive result.
    #[error("invalid price: {0}")]
    InvalidPrice(String),
    /// A quantity was negative or out of range.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),
    /// An email address was blank or not an allow-listed address.
    #[error("invalid email: {0}")]
    InvalidEmail(String),
    /// A city was blank.
    #[error("invalid city: {0}")]
    InvalidCity(String),
    /// A state was blank or not a Brazilian federative-unit code.
    #[error("invalid state: {0}")]
    InvalidState(String),
}
