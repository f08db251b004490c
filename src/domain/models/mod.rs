//! Domain data model for the checkout flow.

pub mod form;
pub mod transaction;

pub use form::{FormSnapshot, PaymentField, ValidationErrors};
pub use transaction::{TransactionRecord, TransactionStatus};
