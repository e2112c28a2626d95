use std::sync::Arc;

use crate::analytics::service::AnalyticsService;
use crate::config::Config;
use crate::contact::inbox::ContactInbox;
use crate::store::{ContactStore, CounterStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub analytics: AnalyticsService,
    pub contacts: ContactInbox,
    pub config: Config,
}

impl AppState {
    pub fn new(
        config: Config,
        counters: Arc<dyn CounterStore>,
        contacts: Arc<dyn ContactStore>,
    ) -> Self {
        AppState {
            analytics: AnalyticsService::new(
                counters,
                config.analytics_subject.clone(),
                config.store_timeout,
            ),
            contacts: ContactInbox::new(contacts, config.store_timeout),
            config,
        }
    }
}
