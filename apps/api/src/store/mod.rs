//! Persistence seams for the API.
//!
//! Handlers never see a concrete backend: `AppState` carries
//! `Arc<dyn CounterStore>` and `Arc<dyn ContactStore>`, chosen at startup.
//! `PgStore` is used when a database URL is configured, `MemoryStore` otherwise.

pub mod memory;
pub mod postgres;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::analytics::{CounterField, ResumeStats};
use crate::models::contact::ContactMessageRow;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store timed out after {0:?}")]
    Timeout(Duration),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Unavailable(e.to_string())
    }
}

/// Durable view/download tallies keyed by subject.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Adds one to `field`, creating the record at zero first if needed.
    /// Concurrent increments must never be lost.
    async fn increment(&self, subject: &str, field: CounterField) -> Result<(), StoreError>;

    /// Current tallies, zero when the record does not exist. Never creates it.
    async fn read(&self, subject: &str) -> Result<ResumeStats, StoreError>;
}

#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert(&self, message: &ContactMessageRow) -> Result<(), StoreError>;

    /// Newest first, at most `limit` rows.
    async fn list_recent(&self, limit: usize) -> Result<Vec<ContactMessageRow>, StoreError>;
}

/// Runs a store operation with an upper bound on how long it may take.
pub async fn bounded<T, F>(limit: Duration, op: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    tokio::time::timeout(limit, op)
        .await
        .map_err(|_| StoreError::Timeout(limit))?
}
