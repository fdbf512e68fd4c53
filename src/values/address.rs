//! Address value object
//!
//! Defines [`Address`] and the fixed table of Brazilian federative units.

use std::fmt;

use super::constrained;
use super::error::ValidationError;

/// The 27 Brazilian federative units: two-letter code and full name.
///
/// Static configuration data, not runtime state. Membership is checked
/// case-insensitively; stored codes are always uppercase.
pub const BRAZILIAN_STATES: [(&str, &str); 27] = [
    ("AC", "Acre"),
    ("AL", "Alagoas"),
    ("AP", "Amapá"),
    ("AM", "Amazonas"),
    ("BA", "Bahia"),
    ("CE", "Ceará"),
    ("DF", "Distrito Federal"),
    ("ES", "Espírito Santo"),
    ("GO", "Goiás"),
    ("MA", "Maranhão"),
    ("MT", "Mato Grosso"),
    ("MS", "Mato Grosso do Sul"),
    ("MG", "Minas Gerais"),
    ("PA", "Pará"),
    ("PB", "Paraíba"),
    ("PR", "Paraná"),
    ("PE", "Pernambuco"),
    ("PI", "Piauí"),
    ("RJ", "Rio de Janeiro"),
    ("RN", "Rio Grande do Norte"),
    ("RS", "Rio Grande do Sul"),
    ("RO", "Rondônia"),
    ("RR", "Roraima"),
    ("SC", "Santa Catarina"),
    ("SP", "São Paulo"),
    ("SE", "Sergipe"),
    ("TO", "Tocantins"),
];

/// A validated city and federative-unit pair.
///
/// The city keeps its exact spelling; the state is normalized to its
/// uppercase two-letter code. Both fields can be reassigned individually and
/// each assignment re-runs the construction-time validation.
///
/// # Examples
///
/// ```
/// use sales_records::values::Address;
///
/// let mut address = Address::create("Rio de Janeiro", "rj").unwrap();
/// assert_eq!(address.city(), "Rio de Janeiro");
/// assert_eq!(address.state(), "RJ");
/// assert_eq!(address.state_name(), "Rio de Janeiro");
///
/// address.set_state("SP").unwrap();
/// assert_eq!(address.state_name(), "São Paulo");
///
/// // An unknown code is rejected
/// assert!(Address::create("Rio de Janeiro", "XX").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    city: String,
    state: String,
}

impl Address {
    /// Creates an `Address` from a city name and a federative-unit code.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCity`] when the city is blank, and
    /// [`ValidationError::InvalidState`] when the state is blank or not one
    /// of the 27 codes in [`BRAZILIAN_STATES`].
    pub fn create(city: &str, state: &str) -> Result<Self, ValidationError> {
        let city = Self::validate_city(city)?;
        let state = Self::validate_state(state)?;
        Ok(Self { city, state })
    }

    /// Reassigns the city, re-running the construction-time validation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCity`] when the city is blank.
    pub fn set_city(&mut self, city: &str) -> Result<(), ValidationError> {
        self.city = Self::validate_city(city)?;
        Ok(())
    }

    /// Reassigns the state, re-running the construction-time validation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidState`] when the state is blank or
    /// not a known federative-unit code.
    pub fn set_state(&mut self, state: &str) -> Result<(), ValidationError> {
        self.state = Self::validate_state(state)?;
        Ok(())
    }

    /// Returns the city name.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the uppercase two-letter federative-unit code.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the full name of the federative unit.
    #[must_use]
    pub fn state_name(&self) -> &'static str {
        // The stored code is always a table entry.
        BRAZILIAN_STATES
            .iter()
            .find(|(code, _)| *code == self.state)
            .map_or("", |(_, name)| name)
    }

    fn validate_city(city: &str) -> Result<String, ValidationError> {
        constrained::create_exact(|value| value, ValidationError::InvalidCity, city)
    }

    fn validate_state(state: &str) -> Result<String, ValidationError> {
        if state.trim().is_empty() {
            return Err(ValidationError::InvalidState(
                "must be a non-empty string".to_string(),
            ));
        }
        let code = state.to_uppercase();
        if BRAZILIAN_STATES.iter().any(|(known, _)| *known == code) {
            Ok(code)
        } else {
            Err(ValidationError::InvalidState(format!(
                "`{state}` is not a Brazilian federative-unit code"
            )))
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}, {}", self.city, self.state)
    }
}
