//! Email value object
//!
//! Defines [`Email`], an address wrapper restricted to an allow-list of
//! domains fixed at construction.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;

use super::error::ValidationError;

/// Domains accepted when no custom allow-list is supplied.
const DEFAULT_DOMAINS: [&str; 3] = ["gmail.com", "outlook.com", "hotmail.com"];

/// Character class for the part before the `@`.
const LOCAL_PART: &str = "[A-Za-z0-9._%+-]+";

/// Pre-compiled pattern for the default allow-list.
static DEFAULT_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile_pattern(&DEFAULT_DOMAINS));

/// Builds the full-match pattern `^<local>@(<domain>|...)$` from escaped
/// domain literals. Escaping makes the alternation a valid pattern for any
/// input, so compilation cannot fail.
fn compile_pattern<S: AsRef<str>>(domains: &[S]) -> Regex {
    let alternation = domains
        .iter()
        .map(|domain| regex::escape(domain.as_ref()))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!("^{LOCAL_PART}@(?:{alternation})$");
    Regex::new(&pattern).expect("escaped domain alternation is a valid pattern")
}

/// A validated, domain-restricted email address.
///
/// The allow-list is fixed at construction; the address itself can be
/// reassigned through [`Email::set_email`], which re-runs the same
/// validation. The domain must equal an allow-listed entry exactly, so a
/// list of `["customdomain.com"]` accepts addresses at that domain only,
/// never at look-alike or sub domains.
///
/// Equality and hashing consider the stored address only, which allows
/// comparison against raw strings and use as a map or set key.
///
/// # Examples
///
/// ```
/// use sales_records::values::Email;
///
/// let email = Email::create("joao.silva@gmail.com").unwrap();
/// assert_eq!(email.username(), "joao.silva");
/// assert_eq!(email.domain(), "gmail.com");
/// assert!(email == "joao.silva@gmail.com");
///
/// // The default allow-list rejects other domains
/// assert!(Email::create("joao.silva@example.com").is_err());
///
/// // A custom allow-list is an exact match, not a suffix match
/// let custom = Email::create_with_domains("sales@acme.com", &["acme.com"]);
/// assert!(custom.is_ok());
/// assert!(Email::create_with_domains("sales@not-acme.com", &["acme.com"]).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Email {
    email: String,
    domains: Vec<String>,
    pattern: Regex,
}

impl Email {
    /// Creates an `Email` validated against the default allow-list
    /// (`gmail.com`, `outlook.com`, `hotmail.com`).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEmail`] when the input is blank or
    /// does not fully match `<local>@<allow-listed domain>`.
    pub fn create(email: &str) -> Result<Self, ValidationError> {
        let pattern = DEFAULT_PATTERN.clone();
        Self::validate(email, &pattern)?;
        Ok(Self {
            email: email.to_string(),
            domains: DEFAULT_DOMAINS.iter().map(ToString::to_string).collect(),
            pattern,
        })
    }

    /// Creates an `Email` validated against a caller-supplied allow-list.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEmail`] when the allow-list is
    /// empty, or when the input is blank or does not fully match
    /// `<local>@<allow-listed domain>`.
    pub fn create_with_domains(email: &str, domains: &[&str]) -> Result<Self, ValidationError> {
        if domains.is_empty() {
            return Err(ValidationError::InvalidEmail(
                "domain allow-list must not be empty".to_string(),
            ));
        }
        let pattern = compile_pattern(domains);
        Self::validate(email, &pattern)?;
        Ok(Self {
            email: email.to_string(),
            domains: domains.iter().map(ToString::to_string).collect(),
            pattern,
        })
    }

    /// Reassigns the address, re-validating against the allow-list fixed at
    /// construction.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEmail`] when the input is blank or
    /// does not fully match `<local>@<allow-listed domain>`.
    pub fn set_email(&mut self, email: &str) -> Result<(), ValidationError> {
        Self::validate(email, &self.pattern)?;
        self.email = email.to_string();
        Ok(())
    }

    /// Returns the validated address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the part before the `@`.
    #[must_use]
    pub fn username(&self) -> &str {
        self.email
            .split_once('@')
            .map_or(self.email.as_str(), |(local, _)| local)
    }

    /// Returns the part after the `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.email.split_once('@').map_or("", |(_, domain)| domain)
    }

    /// Returns the allow-listed domains this address was validated against.
    #[must_use]
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    fn validate(email: &str, pattern: &Regex) -> Result<(), ValidationError> {
        if email.trim().is_empty() {
            return Err(ValidationError::InvalidEmail(
                "must be a non-empty string".to_string(),
            ));
        }
        if pattern.is_match(email) {
            Ok(())
        } else {
            Err(ValidationError::InvalidEmail(format!(
                "`{email}` is not an allow-listed address"
            )))
        }
    }
}

impl fmt::Display for Email {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.email)
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.email.hash(state);
    }
}

impl PartialEq<str> for Email {
    fn eq(&self, other: &str) -> bool {
        self.email == other
    }
}

impl PartialEq<&str> for Email {
    fn eq(&self, other: &&str) -> bool {
        self.email == *other
    }
}

impl PartialEq<String> for Email {
    fn eq(&self, other: &String) -> bool {
        self.email == *other
    }
}

impl PartialEq<Email> for str {
    fn eq(&self, other: &Email) -> bool {
        self == other.email
    }
}

impl PartialEq<Email> for &str {
    fn eq(&self, other: &Email) -> bool {
        *self == other.email
    }
}
