//! Domain models for the in-progress checkout form.
use serde::{Deserialize, Serialize};

/// The five input fields of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentField {
    CardholderName,
    CardNumber,
    ExpiryDate,
    Cvv,
    Amount,
}

impl PaymentField {
    /// All fields, in form order.
    pub const ALL: [PaymentField; 5] = [
        PaymentField::CardholderName,
        PaymentField::CardNumber,
        PaymentField::ExpiryDate,
        PaymentField::Cvv,
        PaymentField::Amount,
    ];
}

/// Mutable snapshot of everything the user has typed so far.
///
/// All values are display-formatted text; parsing happens at validation and
/// transaction-creation time, never here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub cardholder_name: String,
    /// Space-grouped digits, at most 19 characters.
    pub card_number: String,
    /// MM/YY display form.
    pub expiry_date: String,
    /// Digits only, at most 4.
    pub cvv: String,
    /// Decimal text; precision is unconstrained until submit.
    pub amount: String,
}

impl FormSnapshot {
    /// Current display value of a field.
    pub fn get(&self, field: PaymentField) -> &str {
        match field {
            PaymentField::CardholderName => &self.cardholder_name,
            PaymentField::CardNumber => &self.card_number,
            PaymentField::ExpiryDate => &self.expiry_date,
            PaymentField::Cvv => &self.cvv,
            PaymentField::Amount => &self.amount,
        }
    }

    /// Replace the display value of a field.
    pub fn set(&mut self, field: PaymentField, value: String) {
        match field {
            PaymentField::CardholderName => self.cardholder_name = value,
            PaymentField::CardNumber => self.card_number = value,
            PaymentField::ExpiryDate => self.expiry_date = value,
            PaymentField::Cvv => self.cvv = value,
            PaymentField::Amount => self.amount = value,
        }
    }
}

/// Per-field validation messages.
///
/// A field with no entry is currently valid; the whole form is valid when
/// the mapping is empty. The mapping is rebuilt from scratch on every
/// validation pass rather than merged incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub cardholder_name: Option<String>,
    pub card_number: Option<String>,
    pub expiry_date: Option<String>,
    pub cvv: Option<String>,
    pub amount: Option<String>,
}

impl ValidationErrors {
    /// Message for a field, if it currently fails validation.
    pub fn get(&self, field: PaymentField) -> Option<&str> {
        let slot = match field {
            PaymentField::CardholderName => &self.cardholder_name,
            PaymentField::CardNumber => &self.card_number,
            PaymentField::ExpiryDate => &self.expiry_date,
            PaymentField::Cvv => &self.cvv,
            PaymentField::Amount => &self.amount,
        };
        slot.as_deref()
    }

    /// Record a failure message for a field.
    pub fn set(&mut self, field: PaymentField, message: impl Into<String>) {
        let message = Some(message.into());
        match field {
            PaymentField::CardholderName => self.cardholder_name = message,
            PaymentField::CardNumber => self.card_number = message,
            PaymentField::ExpiryDate => self.expiry_date = message,
            PaymentField::Cvv => self.cvv = message,
            PaymentField::Amount => self.amount = message,
        }
    }

    /// Drop any message for a field.
    pub fn clear(&mut self, field: PaymentField) {
        match field {
            PaymentField::CardholderName => self.cardholder_name = None,
            PaymentField::CardNumber => self.card_number = None,
            PaymentField::ExpiryDate => self.expiry_date = None,
            PaymentField::Cvv => self.cvv = None,
            PaymentField::Amount => self.amount = None,
        }
    }

    /// Number of fields currently failing.
    pub fn len(&self) -> usize {
        PaymentField::ALL
            .iter()
            .filter(|field| self.get(**field).is_some())
            .count()
    }

    /// True when no field is failing, i.e. the form is valid.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_field_access() {
        let mut snapshot = FormSnapshot::default();
        snapshot.set(PaymentField::CardNumber, "4111 1111".to_string());
        snapshot.set(PaymentField::Amount, "10.00".to_string());

        assert_eq!(snapshot.get(PaymentField::CardNumber), "4111 1111");
        assert_eq!(snapshot.get(PaymentField::Amount), "10.00");
        assert_eq!(snapshot.get(PaymentField::Cvv), "");
    }

    #[test]
    fn test_errors_set_clear_and_count() {
        let mut errors = ValidationErrors::default();
        assert!(errors.is_empty());

        errors.set(PaymentField::Cvv, "CVV is required");
        errors.set(PaymentField::Amount, "Amount is required");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(PaymentField::Cvv), Some("CVV is required"));

        errors.clear(PaymentField::Cvv);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(PaymentField::Cvv), None);
        assert!(!errors.is_empty());
    }
}
