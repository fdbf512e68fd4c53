//! Client record
//!
//! Defines [`ClientId`] and [`Client`].

use std::fmt;

use crate::values::constrained;
use crate::values::{Address, Email, ValidationError};

/// A client identifier.
///
/// Strictly positive; the raw integer is available through
/// [`ClientId::value`], while `Display` renders the external
/// prefix-formatted form.
///
/// # Examples
///
/// ```
/// use sales_records::records::ClientId;
///
/// let id = ClientId::create(7).unwrap();
/// assert_eq!(id.value(), 7);
/// assert_eq!(id.to_string(), "C7");
///
/// assert!(ClientId::create(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(u32);

impl ClientId {
    /// Creates a `ClientId` from an integer.
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

impl fmt::Display for ClientId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "C{}", self.0)
    }
}

/// A sales client: identifier, personal names, email, and address.
///
/// All five fields are independently reassignable; every setter re-runs the
/// construction-time validation for its field. Name fields are stored
/// trimmed. The email and address are owned by value and are valid by
/// construction of their own types.
///
/// # Examples
///
/// ```
/// use sales_records::records::Client;
/// use sales_records::values::{Address, Email};
///
/// let client = Client::create(
///     1,
///     "John",
///     "Doe",
///     Email::create("john.doe@gmail.com").unwrap(),
///     Address::create("Rio de Janeiro", "RJ").unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(client.id().to_string(), "C1");
/// assert_eq!(client.id().value(), 1);
/// assert_eq!(client.name(), "John");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Client {
    id: ClientId,
    name: String,
    surname: String,
    email: Email,
    address: Address,
}

impl Client {
    /// Creates a `Client`, validating the identifier and both name fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] for a non-positive identifier
    /// and [`ValidationError::InvalidName`] for a blank name or surname.
    pub fn create(
        id: i64,
        name: &str,
        surname: &str,
        email: Email,
        address: Address,
    ) -> Result<Self, ValidationError> {
        let id = ClientId::create(id)?;
        let name = Self::validate_name(name)?;
        let surname = Self::validate_name(surname)?;
        Ok(Self {
            id,
            name,
            surname,
            email,
            address,
        })
    }

    /// Reassigns the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] when the value is not a
    /// positive integer in range.
    pub fn set_id(&mut self, id: i64) -> Result<(), ValidationError> {
        self.id = ClientId::create(id)?;
        Ok(())
    }

    /// Reassigns the first name, stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidName`] when the value is blank.
    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = Self::validate_name(name)?;
        Ok(())
    }

    /// Reassigns the surname, stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidName`] when the value is blank.
    pub fn set_surname(&mut self, surname: &str) -> Result<(), ValidationError> {
        self.surname = Self::validate_name(surname)?;
        Ok(())
    }

    /// Reassigns the email. Infallible: any [`Email`] is valid by
    /// construction.
    pub fn set_email(&mut self, email: Email) {
        self.email = email;
    }

    /// Reassigns the address. Infallible: any [`Address`] is valid by
    /// construction.
    pub fn set_address(&mut self, address: Address) {
        self.address = address;
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> ClientId {
        self.id
    }

    /// Returns the first name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the surname.
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Returns a reference to the email.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Returns a reference to the address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    fn validate_name(value: &str) -> Result<String, ValidationError> {
        constrained::create_trimmed(|name| name, ValidationError::InvalidName, value)
    }
}

impl fmt::Display for Client {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Client(id={}, name='{}', surname='{}', email={}, address={})",
            self.id, self.name, self.surname, self.email, self.address
        )
    }
}
