//! Checkout processing: turns a validated form snapshot into an immutable
//! transaction record after a simulated processing delay.

use log::info;
use std::time::Duration;

use crate::domain::models::form::FormSnapshot;
use crate::domain::models::transaction::{TransactionRecord, TransactionStatus};

/// Configuration for checkout processing behavior.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// How long the simulated payment processor takes to answer.
    pub processing_delay: Duration,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            processing_delay: Duration::from_millis(1500),
        }
    }
}

/// Service that manufactures transaction records from validated snapshots.
#[derive(Debug, Clone, Default)]
pub struct CheckoutService {
    config: CheckoutConfig,
}

impl CheckoutService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CheckoutConfig) -> Self {
        Self { config }
    }

    /// Build the immutable transaction record for a snapshot.
    ///
    /// Precondition: the snapshot already passed validation with zero
    /// errors. No re-validation happens here.
    ///
    /// The amount is re-rendered with exactly two decimal places using
    /// Rust's default float formatting, which rounds ties to even on the
    /// binary value (`0.125` renders as `"0.12"`). The status is always
    /// `Success`; no simulated failure path exists yet.
    pub fn create_transaction(&self, snapshot: &FormSnapshot) -> TransactionRecord {
        TransactionRecord {
            cardholder_name: snapshot.cardholder_name.trim().to_string(),
            masked_card_number: TransactionRecord::mask_card_number(&snapshot.card_number),
            expiry_date: snapshot.expiry_date.clone(),
            amount: format!("{:.2}", snapshot.amount.parse::<f64>().unwrap_or(0.0)),
            status: TransactionStatus::Success,
            transaction_id: TransactionRecord::generate_id(),
        }
    }

    /// Process a submission: wait out the simulated processing delay, then
    /// create the record.
    ///
    /// The delay is not cancellable; once a submission starts the caller
    /// can only await the result. Persistence is a separate call.
    pub async fn process_payment(&self, snapshot: &FormSnapshot) -> TransactionRecord {
        info!(
            "Processing simulated payment of {} for {}",
            snapshot.amount,
            TransactionRecord::mask_card_number(&snapshot.card_number)
        );

        tokio::time::sleep(self.config.processing_delay).await;

        let record = self.create_transaction(snapshot);
        info!("Payment processed: {}", record.transaction_id);
        record
    }
}
