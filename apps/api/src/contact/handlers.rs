use axum::{extract::State, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::contact::validation::ContactRequest;
use crate::errors::AppError;
use crate::models::contact::ContactMessageRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ContactListResponse {
    pub success: bool,
    pub data: Vec<ContactMessageRow>,
}

/// POST /api/contact
pub async fn handle_submit_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let id = state.contacts.submit(&req).await?;
    Ok(Json(ContactResponse {
        success: true,
        message: "Thank you for your message! I'll get back to you within 24 hours.".to_string(),
        id,
    }))
}

/// GET /api/contact-messages
pub async fn handle_list_contacts(
    State(state): State<AppState>,
) -> Result<Json<ContactListResponse>, AppError> {
    let data = state.contacts.list_recent().await?;
    Ok(Json(ContactListResponse {
        success: true,
        data,
    }))
}
