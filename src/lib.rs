//! # Payment Checkout Core
//!
//! Core engine for a simulated card-payment checkout flow: per-keystroke
//! input normalization, submit-time form validation, synthetic transaction
//! creation, and a single-record transaction store with a durable mirror
//! that survives a reload of the presentation layer.
//!
//! The presentation layer (markup, navigation, styling) is an external
//! collaborator: it feeds `(field, raw value)` events and a submit signal
//! in, and renders the formatted values, error mapping, and transaction
//! records that come back out. Nothing here talks to a real payment
//! network, and the full card number is never persisted.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use domain::{
    CheckoutConfig, CheckoutService, FormEvent, FormSession, FormSnapshot, PaymentField,
    TransactionRecord, TransactionStatus, ValidationErrors,
};
pub use storage::{JsonTransactionMirror, SessionConnection, TransactionMirror, TransactionStore};

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The snapshot validated cleanly; the record was created and persisted.
    Completed(TransactionRecord),
    /// Validation failed; nothing was created or persisted.
    Rejected(ValidationErrors),
}

/// One checkout session: form state, processing service, and the
/// transaction store, wired together.
///
/// Constructed once per session; the store is owned here and passed
/// nowhere else, so there is no hidden global state.
pub struct Checkout {
    pub session: FormSession,
    pub service: CheckoutService,
    pub store: TransactionStore,
}

impl Checkout {
    /// Create a checkout session with a file-backed mirror rooted at the
    /// given data directory.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let connection = SessionConnection::new(data_dir)?;
        let mirror = Arc::new(JsonTransactionMirror::new(connection));
        Ok(Self::with_mirror(mirror))
    }

    /// Create a checkout session over an arbitrary mirror implementation.
    pub fn with_mirror(mirror: Arc<dyn TransactionMirror>) -> Self {
        Self {
            session: FormSession::new(),
            service: CheckoutService::new(),
            store: TransactionStore::new(mirror),
        }
    }

    /// Handle one keystroke: format the raw value, store it, clear the
    /// field's stale error, and return the new display value.
    pub fn input(&mut self, field: PaymentField, raw: &str) -> &str {
        self.session.apply(FormEvent::FieldChanged {
            field,
            raw: raw.to_string(),
        });
        self.session.snapshot().get(field)
    }

    /// Run the submit flow end to end: validate, wait out the simulated
    /// processing delay, create the record, and persist it.
    ///
    /// Once processing starts it cannot be aborted; callers suppress double
    /// submission by checking `session.is_submitting()` while awaiting.
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.session.apply(FormEvent::SubmitAttempted);
        if !self.session.is_valid() {
            return SubmitOutcome::Rejected(self.session.errors().clone());
        }

        self.session.set_submitting(true);
        let record = self.service.process_payment(self.session.snapshot()).await;
        self.store.save(record.clone());
        self.session.set_submitting(false);

        SubmitOutcome::Completed(record)
    }
}
