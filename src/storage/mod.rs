//! Storage layer: the transaction store and its durable mirror backends.

pub mod json;
pub mod traits;
pub mod transaction_store;

pub use json::{JsonTransactionMirror, SessionConnection};
pub use traits::TransactionMirror;
pub use transaction_store::TransactionStore;
