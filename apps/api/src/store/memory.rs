use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ContactStore, CounterStore, StoreError};
use crate::models::analytics::{CounterField, ResumeStats};
use crate::models::contact::ContactMessageRow;

/// Process-local store used when no database is configured.
/// State lives for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    counters: RwLock<HashMap<String, ResumeStats>>,
    contacts: RwLock<Vec<ContactMessageRow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn has_record(&self, subject: &str) -> bool {
        self.counters.read().await.contains_key(subject)
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn increment(&self, subject: &str, field: CounterField) -> Result<(), StoreError> {
        let mut counters = self.counters.write().await;
        counters
            .entry(subject.to_string())
            .or_default()
            .bump(field);
        Ok(())
    }

    async fn read(&self, subject: &str) -> Result<ResumeStats, StoreError> {
        Ok(self
            .counters
            .read()
            .await
            .get(subject)
            .copied()
            .unwrap_or_default())
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn insert(&self, message: &ContactMessageRow) -> Result<(), StoreError> {
        self.contacts.write().await.push(message.clone());
        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<ContactMessageRow>, StoreError> {
        let contacts = self.contacts.read().await;
        let mut recent: Vec<_> = contacts.iter().rev().cloned().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(limit);
        Ok(recent)
    }
}
