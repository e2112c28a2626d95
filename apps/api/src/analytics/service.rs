//! Resume analytics: validates tracked actions and routes them to the counter store.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::analytics::{CounterField, ResumeStats};
use crate::store::{bounded, CounterStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeAction {
    View,
    Download,
}

impl ResumeAction {
    pub fn field(self) -> CounterField {
        match self {
            ResumeAction::View => CounterField::Views,
            ResumeAction::Download => CounterField::Downloads,
        }
    }
}

impl FromStr for ResumeAction {
    type Err = AppError;

    /// Exact, case-sensitive match on the two tracked actions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(ResumeAction::View),
            "download" => Ok(ResumeAction::Download),
            other => Err(AppError::InvalidAction(other.to_string())),
        }
    }
}

#[derive(Clone)]
pub struct AnalyticsService {
    store: Arc<dyn CounterStore>,
    subject: String,
    timeout: Duration,
}

impl AnalyticsService {
    pub fn new(store: Arc<dyn CounterStore>, subject: impl Into<String>, timeout: Duration) -> Self {
        Self {
            store,
            subject: subject.into(),
            timeout,
        }
    }

    /// Records one action. Unknown actions are rejected before the store is touched.
    pub async fn record_action(&self, action: &str) -> Result<ResumeAction, AppError> {
        let action: ResumeAction = action.parse()?;
        let field = action.field();
        bounded(self.timeout, self.store.increment(&self.subject, field)).await?;
        info!(
            subject = %self.subject,
            counter = field.column(),
            "Tracked resume action {action:?}"
        );
        Ok(action)
    }

    pub async fn get_stats(&self) -> Result<ResumeStats, AppError> {
        let stats = bounded(self.timeout, self.store.read(&self.subject)).await?;
        debug!(subject = %self.subject, ?stats, "Read resume stats");
        Ok(stats)
    }
}
