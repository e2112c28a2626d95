pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analytics::handlers as analytics;
use crate::contact::handlers as contact;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/", get(health::root_handler))
        // Resume analytics
        .route("/api/resume-analytics", post(analytics::handle_track_action))
        .route("/api/resume-stats", get(analytics::handle_get_stats))
        // Contact inbox
        .route("/api/contact", post(contact::handle_submit_contact))
        .route("/api/contact-messages", get(contact::handle_list_contacts))
        .with_state(state)
}
