use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const STATUS_NEW: &str = "new";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ContactMessageRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// A validated submission, ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl NewContactMessage {
    pub fn into_row(self) -> ContactMessageRow {
        ContactMessageRow {
            id: Uuid::new_v4(),
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            status: STATUS_NEW.to_string(),
            created_at: Utc::now(),
        }
    }
}
