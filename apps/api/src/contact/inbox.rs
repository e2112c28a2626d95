use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use uuid::Uuid;

use crate::contact::validation::{describe, validate_contact, ContactRequest};
use crate::errors::AppError;
use crate::models::contact::ContactMessageRow;
use crate::store::{bounded, ContactStore};

/// Cap on the admin listing.
pub const LIST_LIMIT: usize = 100;

#[derive(Clone)]
pub struct ContactInbox {
    store: Arc<dyn ContactStore>,
    timeout: Duration,
}

impl ContactInbox {
    pub fn new(store: Arc<dyn ContactStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub async fn submit(&self, req: &ContactRequest) -> Result<Uuid, AppError> {
        let new_message =
            validate_contact(req).map_err(|errors| AppError::Validation(describe(&errors)))?;
        let row = new_message.into_row();
        bounded(self.timeout, self.store.insert(&row)).await?;
        info!(
            id = %row.id,
            "New contact message from {}: {}",
            row.email, row.subject
        );
        Ok(row.id)
    }

    pub async fn list_recent(&self) -> Result<Vec<ContactMessageRow>, AppError> {
        Ok(bounded(self.timeout, self.store.list_recent(LIST_LIMIT)).await?)
    }
}
