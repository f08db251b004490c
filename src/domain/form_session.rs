//! Form session state machine.
//!
//! Keystrokes and submit attempts are modeled as explicit events applied to
//! a session. A field change re-formats the value and optimistically clears
//! that field's error so stale messages disappear while the user types; a
//! submit attempt rebuilds the full error mapping from scratch.

use crate::domain::field_formatter;
use crate::domain::form_validator;
use crate::domain::models::form::{FormSnapshot, PaymentField, ValidationErrors};

/// A discrete event in the life of a form session.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// The user typed into a field; `raw` is the latest raw input.
    FieldChanged { field: PaymentField, raw: String },
    /// The user hit submit; triggers full revalidation.
    SubmitAttempted,
}

/// State of one checkout form session: the accumulating snapshot, the
/// current error mapping, and whether a submission is in flight.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    snapshot: FormSnapshot,
    errors: ValidationErrors,
    submitting: bool,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated form snapshot.
    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    /// The error mapping as of the last event.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// True while a submission is in flight. The presentation layer uses
    /// this to disable the submit affordance; it is not a lock.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    /// True when the last validation pass produced no errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Apply an event to the session.
    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::FieldChanged { field, raw } => {
                let formatted = match field {
                    PaymentField::CardNumber => field_formatter::format_card_number(&raw),
                    PaymentField::ExpiryDate => field_formatter::format_expiry_date(&raw),
                    PaymentField::Cvv => field_formatter::format_cvv(&raw),
                    PaymentField::Amount => field_formatter::format_amount(&raw),
                    // Free-text field, stored as typed.
                    PaymentField::CardholderName => raw,
                };
                self.snapshot.set(field, formatted);
                // Optimistic clearing: the field's stale error disappears
                // until the next full validation pass.
                self.errors.clear(field);
            }
            FormEvent::SubmitAttempted => {
                self.errors = form_validator::validate(&self.snapshot);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_changed_formats_value() {
        let mut session = FormSession::new();
        session.apply(FormEvent::FieldChanged {
            field: PaymentField::CardNumber,
            raw: "4111111111111111".to_string(),
        });
        assert_eq!(session.snapshot().card_number, "4111 1111 1111 1111");

        session.apply(FormEvent::FieldChanged {
            field: PaymentField::ExpiryDate,
            raw: "1229".to_string(),
        });
        assert_eq!(session.snapshot().expiry_date, "12/29");
    }

    #[test]
    fn test_cardholder_name_is_not_formatted() {
        let mut session = FormSession::new();
        session.apply(FormEvent::FieldChanged {
            field: PaymentField::CardholderName,
            raw: "  Jo Smith 3rd  ".to_string(),
        });
        assert_eq!(session.snapshot().cardholder_name, "  Jo Smith 3rd  ");
    }

    #[test]
    fn test_submit_attempted_rebuilds_errors() {
        let mut session = FormSession::new();
        session.apply(FormEvent::SubmitAttempted);
        assert_eq!(session.errors().len(), 5);
        assert!(!session.is_valid());
    }

    #[test]
    fn test_typing_clears_that_fields_error_only() {
        let mut session = FormSession::new();
        session.apply(FormEvent::SubmitAttempted);
        assert_eq!(session.errors().len(), 5);

        session.apply(FormEvent::FieldChanged {
            field: PaymentField::Cvv,
            raw: "1".to_string(),
        });

        // CVV's error is gone even though "1" would not pass validation;
        // the other four are untouched.
        assert_eq!(session.errors().get(PaymentField::Cvv), None);
        assert_eq!(session.errors().len(), 4);
    }

    #[test]
    fn test_full_session_reaches_valid_state() {
        let mut session = FormSession::new();
        let inputs = [
            (PaymentField::CardholderName, "Jo"),
            (PaymentField::CardNumber, "4111111111111111"),
            (PaymentField::ExpiryDate, "1229"),
            (PaymentField::Cvv, "123"),
            (PaymentField::Amount, "10.00"),
        ];
        for (field, raw) in inputs {
            session.apply(FormEvent::FieldChanged { field, raw: raw.to_string() });
        }
        session.apply(FormEvent::SubmitAttempted);
        assert!(session.is_valid());
    }
}
