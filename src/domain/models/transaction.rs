//! Domain model for a completed checkout transaction.
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Outcome of a simulated payment attempt.
///
/// The current processing flow only ever produces `Success`; `Failed` is
/// reserved for a future simulated-decline path and no code path creates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Success,
    Failed,
}

/// Immutable record of a completed checkout, as rendered on the receipt.
///
/// This struct doubles as the wire format written to the durable mirror, so
/// fields serialize in camelCase to match the stored JSON document:
/// `{cardholderName, maskedCardNumber, expiryDate, amount, status, transactionId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub cardholder_name: String,
    /// Always `**** **** **** XXXX`; the rest of the card number is
    /// irrecoverable from the record.
    pub masked_card_number: String,
    /// MM/YY display form, carried over from the form unchanged.
    pub expiry_date: String,
    /// Fixed two-decimal-place rendering of the charged amount.
    pub amount: String,
    pub status: TransactionStatus,
    pub transaction_id: String,
}

const MASK_PREFIX: &str = "**** **** **** ";
const ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

impl TransactionRecord {
    /// Generate a transaction ID in the format: TXN-<timestamp>-<random>
    /// where both segments are upper-case base36 (epoch millis plus a
    /// 6-character random suffix).
    ///
    /// Uniqueness is overwhelmingly likely within a session but not
    /// cryptographically guaranteed, which is acceptable for a simulation.
    pub fn generate_id() -> String {
        let timestamp = encode_base36(Utc::now().timestamp_millis() as u64);
        let mut rng = rand::thread_rng();
        let random: String = (0..6)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        format!("TXN-{}-{}", timestamp, random)
    }

    /// Mask a card number down to its last four digits.
    ///
    /// Whitespace is stripped first, so the space-grouped display form and
    /// the plain digit form mask identically.
    pub fn mask_card_number(card_number: &str) -> String {
        let cleaned: Vec<char> = card_number.chars().filter(|c| !c.is_whitespace()).collect();
        let skip = cleaned.len().saturating_sub(4);
        let last_four: String = cleaned[skip..].iter().collect();
        format!("{}{}", MASK_PREFIX, last_four)
    }
}

/// Encode a value as upper-case base36.
fn encode_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ID_ALPHABET[(value % 36) as usize] as char);
        value /= 36;
    }
    digits.iter().rev().collect()
}
