//! Product record
//!
//! Defines [`ProductId`] and [`Product`].

use std::fmt;

use crate::values::constrained;
use crate::values::{Price, ValidationError};

/// A product identifier.
///
/// Strictly positive; the raw integer is available through
/// [`ProductId::value`], while `Display` renders the external
/// prefix-formatted form.
///
/// # Examples
///
/// ```
/// use sales_records::records::ProductId;
///
/// let id = ProductId::create(7).unwrap();
/// assert_eq!(id.value(), 7);
/// assert_eq!(id.to_string(), "P7");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a `ProductId` from an integer.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] when the value is not a
    /// positive integer in range.
    pub fn create(value: i64) -> Result<Self, ValidationError> {
        constrained::create_positive(Self, ValidationError::InvalidId, value)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "P{}", self.0)
    }
}

/// A catalogued product: identifier, name, category, unit price, and stock
/// quantity.
///
/// Mirrors [`crate::records::Client`]: every field is independently
/// reassignable with the construction-time validation. A quantity of zero is
/// valid (out of stock); negative quantities are rejected.
///
/// # Examples
///
/// ```
/// use sales_records::records::Product;
/// use sales_records::values::Price;
///
/// let product = Product::create(
///     1,
///     "Notebook",
///     "Electronics",
///     Price::create("3499.90").unwrap(),
///     12,
/// )
/// .unwrap();
///
/// assert_eq!(product.id().to_string(), "P1");
/// assert_eq!(product.quantity(), 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    price: Price,
    quantity: u32,
}

impl Product {
    /// Creates a `Product`, validating the identifier, both text fields, and
    /// the quantity.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] for a non-positive identifier,
    /// [`ValidationError::InvalidName`] for a blank name,
    /// [`ValidationError::InvalidCategory`] for a blank category, and
    /// [`ValidationError::InvalidQuantity`] for a negative quantity.
    pub fn create(
        id: i64,
        name: &str,
        category: &str,
        price: Price,
        quantity: i64,
    ) -> Result<Self, ValidationError> {
        let id = ProductId::create(id)?;
        let name = Self::validate_name(name)?;
        let category = Self::validate_category(category)?;
        let quantity = Self::validate_quantity(quantity)?;
        Ok(Self {
            id,
            name,
            category,
            price,
            quantity,
        })
    }

    /// Reassigns the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] when the value is not a
    /// positive integer in range.
    pub fn set_id(&mut self, id: i64) -> Result<(), ValidationError> {
        self.id = ProductId::create(id)?;
        Ok(())
    }

    /// Reassigns the name, stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidName`] when the value is blank.
    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = Self::validate_name(name)?;
        Ok(())
    }

    /// Reassigns the category, stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCategory`] when the value is blank.
    pub fn set_category(&mut self, category: &str) -> Result<(), ValidationError> {
        self.category = Self::validate_category(category)?;
        Ok(())
    }

    /// Reassigns the price. Infallible: any [`Price`] is valid by
    /// construction.
    pub fn set_price(&mut self, price: Price) {
        self.price = price;
    }

    /// Reassigns the stock quantity.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidQuantity`] when the value is
    /// negative or out of range.
    pub fn set_quantity(&mut self, quantity: i64) -> Result<(), ValidationError> {
        self.quantity = Self::validate_quantity(quantity)?;
        Ok(())
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the unit price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the stock quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    fn validate_name(value: &str) -> Result<String, ValidationError> {
        constrained::create_trimmed(|name| name, ValidationError::InvalidName, value)
    }

    fn validate_category(value: &str) -> Result<String, ValidationError> {
        constrained::create_trimmed(|category| category, ValidationError::InvalidCategory, value)
    }

    fn validate_quantity(value: i64) -> Result<u32, ValidationError> {
        constrained::create_non_negative(|quantity| quantity, ValidationError::InvalidQuantity, value)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Product(id={}, name='{}', category='{}', price={}, quantity={})",
            self.id, self.name, self.category, self.price, self.quantity
        )
    }
}
