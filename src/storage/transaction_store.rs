//! In-memory transaction slot with a read-through durable mirror.

use log::{debug, warn};
use std::sync::Arc;

use crate::domain::models::transaction::TransactionRecord;
use crate::storage::traits::TransactionMirror;

/// Holder of the single current transaction record.
///
/// The store has two states: empty, or holding one record. `save`
/// overwrites without warning; there is no merge and no history. The
/// mirror write is best-effort: a degraded mirror must never fail a
/// submission, so the in-memory slot always wins and mirror failures
/// downgrade to memory-only behavior.
///
/// The store is constructed once per session and injected wherever it is
/// needed; there is no process-wide instance.
pub struct TransactionStore {
    memory: Option<TransactionRecord>,
    mirror: Arc<dyn TransactionMirror>,
}

impl TransactionStore {
    pub fn new(mirror: Arc<dyn TransactionMirror>) -> Self {
        Self { memory: None, mirror }
    }

    /// Store a record, replacing any prior one.
    ///
    /// A save followed by a get within the same session always observes
    /// the saved record, regardless of mirror health.
    pub fn save(&mut self, record: TransactionRecord) {
        if let Err(e) = self.mirror.store(&record) {
            warn!("Durable mirror write failed, continuing memory-only: {:#}", e);
        }
        self.memory = Some(record);
    }

    /// Current record, if any.
    ///
    /// An empty in-memory slot is hydrated lazily from the mirror; after a
    /// successful hydration subsequent reads are served from memory without
    /// touching the mirror again. An empty or unreadable mirror is the
    /// empty state, not an error.
    pub fn get(&mut self) -> Option<TransactionRecord> {
        if let Some(record) = &self.memory {
            return Some(record.clone());
        }

        match self.mirror.load() {
            Ok(Some(record)) => {
                debug!("Hydrated transaction {} from durable mirror", record.transaction_id);
                self.memory = Some(record.clone());
                Some(record)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Durable mirror read failed, treating store as empty: {:#}", e);
                None
            }
        }
    }

    /// Empty the store. Clearing an already-empty store is a no-op.
    pub fn clear(&mut self) {
        self.memory = None;
        if let Err(e) = self.mirror.clear() {
            warn!("Durable mirror clear failed: {:#}", e);
        }
    }
}
