//! Composite records for the sales domain
//!
//! [`Client`] and [`Product`] compose the leaf value objects from
//! [`crate::values`]. Text fields are validated here; email, address, and
//! price arrive as already-validated types, so those assignments cannot
//! fail. Identifiers are strictly positive integers carried as nominal
//! newtypes ([`ClientId`], [`ProductId`]) whose external form is the
//! prefix-formatted tag (`"C7"`, `"P7"`).

mod client;
mod product;

pub use client::{Client, ClientId};
pub use product::{Product, ProductId};
