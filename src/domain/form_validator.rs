//! Submit-time validation of a complete form snapshot.
//!
//! Validation failures are data, not errors: every rule runs independently
//! and contributes at most one message for its own field, so the caller can
//! surface all problems at once instead of stopping at the first.

use crate::domain::models::form::{FormSnapshot, PaymentField, ValidationErrors};

/// Validate a snapshot and return the full per-field error mapping.
///
/// The mapping is rebuilt from scratch; a field that passes contributes no
/// entry, and the form is valid iff the result is empty.
pub fn validate(snapshot: &FormSnapshot) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    // Cardholder name
    let name = snapshot.cardholder_name.trim();
    if name.is_empty() {
        errors.set(PaymentField::CardholderName, "Name on card is required");
    } else if name.chars().count() < 2 {
        errors.set(PaymentField::CardholderName, "Name must be at least 2 characters");
    }

    // Card number: loose length range only, no Luhn or brand detection
    let card_digits: String = snapshot
        .card_number
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if card_digits.is_empty() {
        errors.set(PaymentField::CardNumber, "Card number is required");
    } else if card_digits.len() < 13 || card_digits.len() > 19 {
        errors.set(PaymentField::CardNumber, "Invalid card number");
    }

    // Expiry date: shape then month range. The year segment is never
    // checked against the calendar, so already-expired dates pass.
    if snapshot.expiry_date.is_empty() {
        errors.set(PaymentField::ExpiryDate, "Expiry date is required");
    } else {
        let parts: Vec<&str> = snapshot.expiry_date.split('/').collect();
        if parts.len() != 2 || parts[0].len() != 2 || parts[1].len() != 2 {
            errors.set(PaymentField::ExpiryDate, "Invalid expiry date (MM/YY)");
        } else {
            match parts[0].parse::<u32>() {
                Ok(month) if (1..=12).contains(&month) => {}
                _ => errors.set(PaymentField::ExpiryDate, "Invalid month"),
            }
        }
    }

    // CVV
    if snapshot.cvv.is_empty() {
        errors.set(PaymentField::Cvv, "CVV is required");
    } else if snapshot.cvv.len() < 3 || snapshot.cvv.len() > 4 {
        errors.set(PaymentField::Cvv, "CVV must be 3-4 digits");
    }

    // Amount: the required check looks at the raw text, the range check at
    // the parsed value. Non-numeric and non-positive input surface the same
    // message through different branches.
    if snapshot.amount.is_empty() {
        errors.set(PaymentField::Amount, "Amount is required");
    } else {
        match snapshot.amount.parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount > 0.0 => {}
            _ => errors.set(PaymentField::Amount, "Amount must be greater than 0"),
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_snapshot() -> FormSnapshot {
        FormSnapshot {
            cardholder_name: "Jo".to_string(),
            card_number: "4111111111111111".to_string(),
            expiry_date: "12/29".to_string(),
            cvv: "123".to_string(),
            amount: "10.00".to_string(),
        }
    }

    #[test]
    fn test_valid_snapshot_has_no_errors() {
        let errors = validate(&valid_snapshot());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_snapshot_fails_every_field() {
        let errors = validate(&FormSnapshot::default());
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(PaymentField::CardholderName), Some("Name on card is required"));
        assert_eq!(errors.get(PaymentField::CardNumber), Some("Card number is required"));
        assert_eq!(errors.get(PaymentField::ExpiryDate), Some("Expiry date is required"));
        assert_eq!(errors.get(PaymentField::Cvv), Some("CVV is required"));
        assert_eq!(errors.get(PaymentField::Amount), Some("Amount is required"));
    }

    #[test]
    fn test_cardholder_name_minimum_length() {
        let mut snapshot = valid_snapshot();
        snapshot.cardholder_name = "J".to_string();
        let errors = validate(&snapshot);
        assert_eq!(
            errors.get(PaymentField::CardholderName),
            Some("Name must be at least 2 characters")
        );

        snapshot.cardholder_name = "   ".to_string();
        let errors = validate(&snapshot);
        assert_eq!(errors.get(PaymentField::CardholderName), Some("Name on card is required"));
    }

    #[test]
    fn test_card_number_length_range() {
        let mut snapshot = valid_snapshot();

        snapshot.card_number = "411111111111".to_string(); // 12 digits
        assert_eq!(validate(&snapshot).get(PaymentField::CardNumber), Some("Invalid card number"));

        snapshot.card_number = "41111111111112222222".to_string(); // 20 digits
        assert_eq!(validate(&snapshot).get(PaymentField::CardNumber), Some("Invalid card number"));

        snapshot.card_number = "4111111111111".to_string(); // 13 digits
        assert_eq!(validate(&snapshot).get(PaymentField::CardNumber), None);
    }

    #[test]
    fn test_card_number_accepts_space_grouping() {
        let mut snapshot = valid_snapshot();
        snapshot.card_number = "4111 1111 1111 1111".to_string();
        assert!(validate(&snapshot).is_empty());
    }

    #[test]
    fn test_expiry_date_shape() {
        let mut snapshot = valid_snapshot();
        for bad in ["1/23", "12/3", "12-34", "1234", "12/34/56"] {
            snapshot.expiry_date = bad.to_string();
            assert_eq!(
                validate(&snapshot).get(PaymentField::ExpiryDate),
                Some("Invalid expiry date (MM/YY)"),
                "expected shape error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_expiry_date_month_range() {
        let mut snapshot = valid_snapshot();

        snapshot.expiry_date = "13/29".to_string();
        assert_eq!(validate(&snapshot).get(PaymentField::ExpiryDate), Some("Invalid month"));

        snapshot.expiry_date = "00/29".to_string();
        assert_eq!(validate(&snapshot).get(PaymentField::ExpiryDate), Some("Invalid month"));

        snapshot.expiry_date = "01/29".to_string();
        assert_eq!(validate(&snapshot).get(PaymentField::ExpiryDate), None);
    }

    #[test]
    fn test_expiry_date_in_the_past_still_passes() {
        // Documented gap: the year segment is never checked.
        let mut snapshot = valid_snapshot();
        snapshot.expiry_date = "12/20".to_string();
        assert!(validate(&snapshot).is_empty());
    }

    #[test]
    fn test_cvv_length() {
        let mut snapshot = valid_snapshot();

        snapshot.cvv = "12".to_string();
        assert_eq!(validate(&snapshot).get(PaymentField::Cvv), Some("CVV must be 3-4 digits"));

        snapshot.cvv = "1234".to_string();
        assert_eq!(validate(&snapshot).get(PaymentField::Cvv), None);
    }

    #[test]
    fn test_amount_zero_and_non_numeric_fail_identically() {
        let mut snapshot = valid_snapshot();

        snapshot.amount = "0".to_string();
        assert_eq!(validate(&snapshot).get(PaymentField::Amount), Some("Amount must be greater than 0"));

        snapshot.amount = "abc".to_string();
        assert_eq!(validate(&snapshot).get(PaymentField::Amount), Some("Amount must be greater than 0"));

        snapshot.amount = "-5".to_string();
        assert_eq!(validate(&snapshot).get(PaymentField::Amount), Some("Amount must be greater than 0"));
    }

    #[test]
    fn test_amount_rejects_multiple_decimal_points() {
        // The formatter lets "1.2.3" through; the strict numeric parse
        // rejects it here.
        let mut snapshot = valid_snapshot();
        snapshot.amount = "1.2.3".to_string();
        assert_eq!(validate(&snapshot).get(PaymentField::Amount), Some("Amount must be greater than 0"));
    }

    #[test]
    fn test_amount_rejects_non_finite_values() {
        let mut snapshot = valid_snapshot();
        for bad in ["inf", "NaN"] {
            snapshot.amount = bad.to_string();
            assert_eq!(
                validate(&snapshot).get(PaymentField::Amount),
                Some("Amount must be greater than 0"),
                "expected amount error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_rules_do_not_short_circuit_each_other() {
        let snapshot = FormSnapshot {
            cardholder_name: "J".to_string(),
            card_number: "1234".to_string(),
            expiry_date: "99/99".to_string(),
            cvv: "12".to_string(),
            amount: "0".to_string(),
        };
        let errors = validate(&snapshot);
        assert_eq!(errors.len(), 5);
    }
}
