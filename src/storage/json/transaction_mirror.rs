//! # JSON Transaction Mirror
//!
//! File-backed implementation of the durable transaction mirror. The
//! current transaction is stored as a single JSON document under a fixed
//! key in the session directory:
//!
//! ```text
//! session_data/
//! └── transaction_result.json    ← This module manages this file
//! ```
//!
//! The document shape matches the record's serialized form exactly:
//! `{cardholderName, maskedCardNumber, expiryDate, amount, status, transactionId}`.
//! Writes go through a temp file and rename so an interrupted write never
//! leaves a torn document behind.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::PathBuf;

use super::connection::SessionConnection;
use crate::domain::models::transaction::TransactionRecord;
use crate::storage::traits::TransactionMirror;

/// Fixed key under which the current transaction is mirrored.
pub const TRANSACTION_KEY: &str = "transaction_result";

/// JSON-file-backed transaction mirror.
#[derive(Debug, Clone)]
pub struct JsonTransactionMirror {
    connection: SessionConnection,
}

impl JsonTransactionMirror {
    pub fn new(connection: SessionConnection) -> Self {
        Self { connection }
    }

    fn file_path(&self) -> PathBuf {
        self.connection.key_file_path(TRANSACTION_KEY)
    }
}

impl TransactionMirror for JsonTransactionMirror {
    fn store(&self, record: &TransactionRecord) -> Result<()> {
        let path = self.file_path();
        let json = serde_json::to_string_pretty(record)
            .context("Failed to serialize transaction record")?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &path)
            .with_context(|| format!("Failed to move mirror file into place at {}", path.display()))?;

        debug!("Mirrored transaction {} to {}", record.transaction_id, path.display());
        Ok(())
    }

    fn load(&self) -> Result<Option<TransactionRecord>> {
        let path = self.file_path();
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        match serde_json::from_str(&contents) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                // Malformed mirror content reads as "nothing stored"; the
                // store treats this as its empty state, never a crash.
                warn!("Ignoring malformed mirror content at {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }

    fn clear(&self) -> Result<()> {
        let path = self.file_path();
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Ok(())
    }
}
