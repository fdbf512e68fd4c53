//! Leaf value objects for the sales domain
//!
//! Each type follows the smart-constructor pattern: a fallible `create`
//! validates the input, and every setter re-runs the same validation before
//! committing, so invalid values are unrepresentable.
//!
//! # Type categories
//!
//! - **Location**: [`Address`] (validated city plus federative-unit code)
//! - **Contact**: [`Email`] (allow-list-restricted address)
//! - **Money**: [`Price`] (strictly positive decimal)
//!
//! # Usage
//!
//! ```
//! use sales_records::values::{Address, Email, Price};
//!
//! let address = Address::create("Rio de Janeiro", "rj").unwrap();
//! assert_eq!(address.state(), "RJ");
//!
//! let email = Email::create("ana.souza@gmail.com").unwrap();
//! assert_eq!(email.username(), "ana.souza");
//!
//! let price = Price::create("19.99").unwrap();
//! assert_eq!(price.to_string(), "19.99");
//! ```

pub(crate) mod constrained;
mod address;
mod email;
mod error;
mod price;

pub use address::{Address, BRAZILIAN_STATES};
pub use email::Email;
pub use error::ValidationError;
pub use price::Price;
