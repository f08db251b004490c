//! # JSON Storage Module
//!
//! File-based implementation of the durable transaction mirror. A single
//! JSON document under a fixed key stands in for session-scoped key-value
//! storage, which is all the checkout flow needs to survive a reload.

pub mod connection;
pub mod transaction_mirror;

#[cfg(test)]
pub mod test_utils;

pub use connection::SessionConnection;
pub use transaction_mirror::{JsonTransactionMirror, TRANSACTION_KEY};
