//! Cross-cutting tests for the records module
//!
//! Equality matrices, setter revalidation, and the end-to-end construction
//! scenario over fully composed records.

use rstest::rstest;
use sales_records::records::{Client, ClientId, Product, ProductId};
use sales_records::values::{Address, Email, Price, ValidationError};

// =============================================================================
// Fixtures
// =============================================================================

fn john() -> Client {
    Client::create(
        1,
        "John",
        "Doe",
        Email::create("john.doe@gmail.com").unwrap(),
        Address::create("Rio de Janeiro", "RJ").unwrap(),
    )
    .unwrap()
}

fn notebook() -> Product {
    Product::create(
        1,
        "Notebook",
        "Electronics",
        Price::create("3499.90").unwrap(),
        12,
    )
    .unwrap()
}

// =============================================================================
// End-to-end construction
// =============================================================================

mod end_to_end {
    use super::*;

    #[rstest]
    fn test_client_composes_validated_leaves() {
        let client = Client::create(
            1,
            "John",
            "Doe",
            Email::create("a@gmail.com").unwrap(),
            Address::create("Rio de Janeiro", "RJ").unwrap(),
        )
        .unwrap();

        assert_eq!(client.id().to_string(), "C1");
        assert_eq!(client.id().value(), 1);
        assert_eq!(client.email().username(), "a");
        assert_eq!(client.address().state_name(), "Rio de Janeiro");
    }

    #[rstest]
    fn test_invalid_leaf_fails_before_the_record_exists() {
        // The email is rejected by its own type, so no Client is ever built
        // from an invalid address string.
        let email = Email::create("not-an-email");

        assert!(matches!(
            email.unwrap_err(),
            ValidationError::InvalidEmail(_)
        ));
    }

    #[rstest]
    fn test_prefixes_distinguish_client_and_product_ids() {
        let client_id = ClientId::create(7).unwrap();
        let product_id = ProductId::create(7).unwrap();

        assert_eq!(client_id.to_string(), "C7");
        assert_eq!(product_id.to_string(), "P7");
        assert_eq!(client_id.value(), product_id.value());
    }
}

// =============================================================================
// Equality matrices
// =============================================================================

mod client_equality {
    use super::*;

    #[rstest]
    fn test_identical_clients_are_equal() {
        assert_eq!(john(), john());
    }

    #[rstest]
    fn test_differing_id_breaks_equality() {
        let mut other = john();
        other.set_id(2).unwrap();

        assert_ne!(john(), other);
    }

    #[rstest]
    fn test_differing_name_breaks_equality() {
        let mut other = john();
        other.set_name("Johnny").unwrap();

        assert_ne!(john(), other);
    }

    #[rstest]
    fn test_differing_surname_breaks_equality() {
        let mut other = john();
        other.set_surname("Smith").unwrap();

        assert_ne!(john(), other);
    }

    #[rstest]
    fn test_differing_email_breaks_equality() {
        let mut other = john();
        other.set_email(Email::create("other@gmail.com").unwrap());

        assert_ne!(john(), other);
    }

    #[rstest]
    fn test_differing_address_breaks_equality() {
        let mut other = john();
        other.set_address(Address::create("Campinas", "SP").unwrap());

        assert_ne!(john(), other);
    }
}

mod product_equality {
    use super::*;

    #[rstest]
    fn test_identical_products_are_equal() {
        assert_eq!(notebook(), notebook());
    }

    #[rstest]
    fn test_differing_price_breaks_equality() {
        let mut other = notebook();
        other.set_price(Price::create("2999.90").unwrap());

        assert_ne!(notebook(), other);
    }

    #[rstest]
    fn test_differing_quantity_breaks_equality() {
        let mut other = notebook();
        other.set_quantity(11).unwrap();

        assert_ne!(notebook(), other);
    }

    #[rstest]
    fn test_differing_category_breaks_equality() {
        let mut other = notebook();
        other.set_category("Office").unwrap();

        assert_ne!(notebook(), other);
    }
}

// =============================================================================
// Setter revalidation
// =============================================================================

mod setter_revalidation {
    use super::*;

    #[rstest]
    fn test_rejected_assignment_never_corrupts_the_record() {
        let mut client = john();

        assert!(client.set_id(-1).is_err());
        assert!(client.set_name("").is_err());
        assert!(client.set_surname("   ").is_err());

        assert_eq!(client, john());
    }

    #[rstest]
    fn test_product_quantity_boundary() {
        let mut product = notebook();

        assert!(product.set_quantity(0).is_ok());
        assert!(matches!(
            product.set_quantity(-1).unwrap_err(),
            ValidationError::InvalidQuantity(_)
        ));
        assert_eq!(product.quantity(), 0);
    }

    #[rstest]
    fn test_email_replacement_goes_through_email_validation() {
        let mut client = john();
        // A new address must be built as an Email first; its own validation
        // runs there.
        let replacement = Email::create("jane.doe@outlook.com").unwrap();

        client.set_email(replacement);

        assert_eq!(client.email().domain(), "outlook.com");
    }
}
