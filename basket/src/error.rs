//! Error types for the cart core.
//!
//! ERROR HANDLING
//! ==============
//! These errors stay inside the crate's seams. [`crate::store::CartStore::load`]
//! degrades read failures to the empty cart and [`crate::service::Basket`]
//! logs write failures, so page code never has to match on them.

/// Failure talking to the backing key-value storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No storage is reachable (server render, privacy mode, disabled storage).
    #[error("key-value storage is unavailable")]
    Unavailable,
    /// The storage refused a read.
    #[error("failed to read key {key:?}: {reason}")]
    Read { key: String, reason: String },
    /// The storage refused a write, typically a quota error.
    #[error("failed to write key {key:?}: {reason}")]
    Write { key: String, reason: String },
    /// The cart could not be serialized.
    #[error("failed to encode cart: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A `data-action` token that is not one of `increase`, `decrease`, `remove`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown line action: {0:?}")]
pub struct ParseActionError(pub String);
