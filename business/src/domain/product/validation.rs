use super::model::NewProduct;

pub const NAME_MAX_LENGTH: usize = 255;
/// Largest value a `NUMERIC(10, 2)` column holds.
pub const PRICE_MAX: f64 = 99_999_999.99;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the offending field.
    pub property_path: String,
    /// Code-style identifier, e.g. `product.name_blank`.
    pub message: String,
}

impl Violation {
    fn new(property_path: &str, message: &str) -> Self {
        Self {
            property_path: property_path.to_string(),
            message: message.to_string(),
        }
    }
}

/// Product fields exactly as received, before any rule is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl ProductDraft {
    /// Checks every field and returns either the validated product or all
    /// violations found, `name` first.
    ///
    /// Rules:
    /// - `name` present, non-blank, at most 255 characters (trimmed)
    /// - `price` present, finite, between zero and [`PRICE_MAX`]
    pub fn validate(self) -> Result<NewProduct, Vec<Violation>> {
        let mut violations = Vec::new();

        let name = match self.name.as_deref().map(str::trim) {
            None | Some("") => {
                violations.push(Violation::new("name", "product.name_blank"));
                None
            }
            Some(name) if name.chars().count() > NAME_MAX_LENGTH => {
                violations.push(Violation::new("name", "product.name_too_long"));
                None
            }
            Some(name) => Some(name.to_string()),
        };

        let price = match self.price {
            None => {
                violations.push(Violation::new("price", "product.price_missing"));
                None
            }
            Some(price) if !price.is_finite() => {
                violations.push(Violation::new("price", "product.price_not_finite"));
                None
            }
            Some(price) if price < 0.0 => {
                violations.push(Violation::new("price", "product.price_negative"));
                None
            }
            Some(price) if price > PRICE_MAX => {
                violations.push(Violation::new("price", "product.price_too_large"));
                None
            }
            Some(price) => Some(price),
        };

        match (name, price) {
            (Some(name), Some(price)) => Ok(NewProduct::new(name, price)),
            _ => Err(violations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn draft(name: Option<&str>, price: Option<f64>) -> ProductDraft {
        ProductDraft {
            name: name.map(str::to_string),
            price,
        }
    }

    #[test]
    fn should_accept_well_formed_draft() {
        let product = draft(Some("Espresso beans"), Some(12.5)).validate().unwrap();
        assert_eq!(product.name(), "Espresso beans");
        assert_eq!(product.price(), 12.5);
    }

    #[test]
    fn should_trim_name() {
        let product = draft(Some("  Tea  "), Some(3.0)).validate().unwrap();
        assert_eq!(product.name(), "Tea");
    }

    #[test]
    fn should_accept_zero_price() {
        assert!(draft(Some("Sample"), Some(0.0)).validate().is_ok());
    }

    #[test]
    fn should_report_both_missing_fields_in_order() {
        let violations = draft(None, None).validate().unwrap_err();
        assert_eq!(
            violations,
            vec![
                Violation::new("name", "product.name_blank"),
                Violation::new("price", "product.price_missing"),
            ]
        );
    }

    #[test]
    fn should_reject_blank_name() {
        let violations = draft(Some("   "), Some(1.0)).validate().unwrap_err();
        assert_eq!(violations, vec![Violation::new("name", "product.name_blank")]);
    }

    #[test]
    fn should_reject_name_longer_than_limit() {
        let long_name = "a".repeat(NAME_MAX_LENGTH + 1);
        let violations = draft(Some(&long_name), Some(1.0)).validate().unwrap_err();
        assert_eq!(
            violations,
            vec![Violation::new("name", "product.name_too_long")]
        );
    }

    #[test]
    fn should_reject_negative_price() {
        let violations = draft(Some("Milk"), Some(-0.01)).validate().unwrap_err();
        assert_eq!(
            violations,
            vec![Violation::new("price", "product.price_negative")]
        );
    }

    #[test]
    fn should_reject_price_above_column_limit() {
        let violations = draft(Some("Yacht"), Some(PRICE_MAX + 1.0))
            .validate()
            .unwrap_err();
        assert_eq!(
            violations,
            vec![Violation::new("price", "product.price_too_large")]
        );
    }

    #[test]
    fn should_reject_non_finite_price() {
        let violations = draft(Some("Milk"), Some(f64::NAN)).validate().unwrap_err();
        assert_eq!(
            violations,
            vec![Violation::new("price", "product.price_not_finite")]
        );
    }

    proptest! {
        #[test]
        fn well_formed_drafts_keep_their_values(
            name in "[a-zA-Z0-9][a-zA-Z0-9 ]{0,40}[a-zA-Z0-9]",
            price in 0.0f64..1_000_000.0,
        ) {
            let product = draft(Some(&name), Some(price)).validate().unwrap();
            prop_assert_eq!(product.name(), name.as_str());
            prop_assert_eq!(product.price(), price);
        }

        #[test]
        fn drafts_without_name_are_rejected(price in proptest::option::of(0.0f64..1_000.0)) {
            let violations = draft(None, price).validate().unwrap_err();
            prop_assert!(violations.iter().any(|v| v.property_path == "name"));
        }

        #[test]
        fn drafts_without_price_are_rejected(name in proptest::option::of("[a-z]{1,20}")) {
            let violations = ProductDraft { name, price: None }.validate().unwrap_err();
            prop_assert!(violations.iter().any(|v| v.property_path == "price"));
        }
    }
}
