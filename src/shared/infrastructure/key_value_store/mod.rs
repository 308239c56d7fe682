// Durable key-value persistence port.
//
// Purpose
// - Describe the local storage capability the cart store and ticket ledger
//   save their collections through, without naming a backend.
//
// Responsibilities
// - Expose string get/set under caller-chosen keys.
//
// Boundaries
// - No serialization policy here; callers persist JSON strings of their own
//   shapes. Each key is exclusively owned by a single store.
//
// Testing guidance
// - Use the in-memory implementation; it can be toggled offline to exercise
//   the logged-failure paths.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub mod in_memory;
