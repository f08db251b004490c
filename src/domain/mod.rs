//! Domain layer: form state, validation, and transaction creation.
//!
//! Everything here is presentation-agnostic. The presentation layer feeds
//! raw keystrokes and submit events in and renders the snapshot, error
//! mapping, and transaction records that come back out.

pub mod checkout_service;
pub mod field_formatter;
pub mod form_session;
pub mod form_validator;
pub mod models;

pub use checkout_service::{CheckoutConfig, CheckoutService};
pub use form_session::{FormEvent, FormSession};
pub use models::{FormSnapshot, PaymentField, TransactionRecord, TransactionStatus, ValidationErrors};
