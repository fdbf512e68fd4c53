//! Cross-cutting tests for the values module
//!
//! Boundary grids, edge cases, and Hash/Eq consistency checks that
//! complement the unit tests next to each type.

use std::collections::{HashMap, HashSet};
use std::hash::{DefaultHasher, Hash, Hasher};

use rstest::rstest;
use sales_records::values::{Address, BRAZILIAN_STATES, Email, Price, ValidationError};

// =============================================================================
// Helpers
// =============================================================================

/// Computes the hash of a value with the default hasher.
fn calculate_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Address state coverage
// =============================================================================

mod address_state_coverage {
    use super::*;

    #[rstest]
    fn test_every_state_code_roundtrips() {
        for (code, _) in BRAZILIAN_STATES {
            let address = Address::create("Centro", code).unwrap();

            assert_eq!(address.state(), code, "failed for state code: {code}");
        }
    }

    #[rstest]
    fn test_every_state_code_accepted_lowercase() {
        for (code, _) in BRAZILIAN_STATES {
            let address = Address::create("Centro", &code.to_lowercase()).unwrap();

            assert_eq!(address.state(), code);
        }
    }

    #[rstest]
    fn test_state_names_are_distinct() {
        let names: HashSet<&str> = BRAZILIAN_STATES.iter().map(|(_, name)| *name).collect();

        assert_eq!(names.len(), BRAZILIAN_STATES.len());
    }

    #[rstest]
    #[case("RJI")]
    #[case("R")]
    #[case("ZZ")]
    #[case("12")]
    #[case("rj i")]
    fn test_unknown_codes_rejected(#[case] code: &str) {
        let result = Address::create("Centro", code);

        assert!(matches!(
            result.unwrap_err(),
            ValidationError::InvalidState(_)
        ));
    }
}

// =============================================================================
// Email edge cases
// =============================================================================

mod email_edge_cases {
    use super::*;

    #[rstest]
    fn test_email_rejects_second_at_symbol() {
        // The local part cannot contain `@`, so only one separator is possible.
        let result = Email::create("a@b@gmail.com");

        assert!(result.is_err());
    }

    #[rstest]
    fn test_email_rejects_subdomain_of_allowed_domain() {
        let result = Email::create("user@mail.gmail.com");

        assert!(result.is_err());
    }

    #[rstest]
    fn test_email_rejects_local_part_outside_charset() {
        let result = Email::create("user!name@gmail.com");

        assert!(result.is_err());
    }

    #[rstest]
    fn test_email_hash_consistent_with_eq() {
        let email1 = Email::create("user@gmail.com").unwrap();
        let email2 = Email::create_with_domains("user@gmail.com", &["gmail.com"]).unwrap();

        assert_eq!(email1, email2);
        assert_eq!(calculate_hash(&email1), calculate_hash(&email2));
    }

    #[rstest]
    fn test_email_usable_as_map_key() {
        let mut owners: HashMap<Email, &str> = HashMap::new();
        owners.insert(Email::create("john.doe@gmail.com").unwrap(), "John");
        owners.insert(Email::create("jane.smith@outlook.com").unwrap(), "Jane");

        let key = Email::create("john.doe@gmail.com").unwrap();
        assert_eq!(owners.get(&key), Some(&"John"));
        assert_eq!(owners.len(), 2);
    }
}

// =============================================================================
// Price properties
// =============================================================================

mod price_properties {
    use super::*;

    #[rstest]
    fn test_price_add_then_subtract_restores_value() {
        let base = Price::create("19.99").unwrap();
        let delta = Price::create("5.01").unwrap();

        let restored = (base + delta).subtract(delta).unwrap();

        assert_eq!(restored, base);
    }

    #[rstest]
    fn test_price_display_and_string_equality_use_different_forms() {
        // Display always renders two decimal places; the string-equality
        // path compares the canonical decimal form, which keeps the scale
        // of the original literal.
        let price = Price::create("50").unwrap();

        assert_eq!(price.to_string(), "50.00");
        assert!(price == "50");
        assert!(price != "50.00");
    }

    #[rstest]
    fn test_price_ordering_follows_numeric_value() {
        let cheap = Price::create("0.01").unwrap();
        let middle = Price::create("19.99").unwrap();
        let dear = Price::create("1000000.99").unwrap();

        assert!(cheap < middle && middle < dear);
        assert!(cheap < dear);
    }

    #[rstest]
    fn test_price_hash_consistent_across_scales() {
        let price1 = Price::create("8.0").unwrap();
        let price2 = Price::create("8.00").unwrap();

        assert_eq!(price1, price2);
        assert_eq!(calculate_hash(&price1), calculate_hash(&price2));
    }
}

// =============================================================================
// Error taxonomy
// =============================================================================

mod error_taxonomy {
    use super::*;

    #[rstest]
    fn test_each_leaf_reports_its_own_error_kind() {
        assert!(matches!(
            Address::create("", "SP").unwrap_err(),
            ValidationError::InvalidCity(_)
        ));
        assert!(matches!(
            Address::create("Campinas", "XX").unwrap_err(),
            ValidationError::InvalidState(_)
        ));
        assert!(matches!(
            Email::create("nope").unwrap_err(),
            ValidationError::InvalidEmail(_)
        ));
        assert!(matches!(
            Price::create("0").unwrap_err(),
            ValidationError::InvalidPrice(_)
        ));
    }
}
