//! # Storage Traits
//!
//! This module defines the storage abstraction for the durable transaction
//! mirror, allowing different persistence media to back the transaction
//! store interchangeably.

use anyhow::Result;

use crate::domain::models::transaction::TransactionRecord;

/// Durable session-scoped copy of the current transaction record.
///
/// The mirror exists so a completed transaction survives a full reload of
/// the presentation layer; it is not a general-purpose database.
/// Implementations hold at most one record under a single fixed key.
pub trait TransactionMirror: Send + Sync {
    /// Persist the record, replacing whatever was stored before.
    fn store(&self, record: &TransactionRecord) -> Result<()>;

    /// Load the stored record, if any. Malformed stored content reads as
    /// `None` rather than an error.
    fn load(&self) -> Result<Option<TransactionRecord>>;

    /// Remove the stored record. Clearing an empty mirror is a no-op.
    fn clear(&self) -> Result<()>;
}
