use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One of the two tallies kept per subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterField {
    Views,
    Downloads,
}

impl CounterField {
    pub fn column(self) -> &'static str {
        match self {
            CounterField::Views => "views",
            CounterField::Downloads => "downloads",
        }
    }
}

/// Aggregate counts for a subject. Field order matches the wire format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeStats {
    pub downloads: u64,
    pub views: u64,
}

impl ResumeStats {
    /// Adds one to `field`. Counters saturate instead of wrapping.
    pub fn bump(&mut self, field: CounterField) {
        let slot = match field {
            CounterField::Views => &mut self.views,
            CounterField::Downloads => &mut self.downloads,
        };
        *slot = slot.saturating_add(1);
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ResumeStatsRow {
    pub subject: String,
    pub views: i64,
    pub downloads: i64,
    pub updated_at: DateTime<Utc>,
}

impl From<ResumeStatsRow> for ResumeStats {
    fn from(row: ResumeStatsRow) -> Self {
        // CHECK constraints keep both columns non-negative
        ResumeStats {
            downloads: u64::try_from(row.downloads).unwrap_or(0),
            views: u64::try_from(row.views).unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_touches_only_named_field() {
        let mut stats = ResumeStats::default();
        stats.bump(CounterField::Downloads);
        stats.bump(CounterField::Downloads);
        assert_eq!(stats, ResumeStats { downloads: 2, views: 0 });

        stats.bump(CounterField::Views);
        assert_eq!(stats, ResumeStats { downloads: 2, views: 1 });
    }

    #[test]
    fn test_bump_saturates() {
        let mut stats = ResumeStats {
            downloads: 0,
            views: u64::MAX,
        };
        stats.bump(CounterField::Views);
        assert_eq!(stats.views, u64::MAX);
    }

    #[test]
    fn test_row_conversion() {
        let row = ResumeStatsRow {
            subject: "resume".to_string(),
            views: 12,
            downloads: 4,
            updated_at: Utc::now(),
        };
        assert_eq!(ResumeStats::from(row), ResumeStats { downloads: 4, views: 12 });
    }

    #[test]
    fn test_stats_wire_format() {
        let json = serde_json::to_value(ResumeStats { downloads: 2, views: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({ "downloads": 2, "views": 3 }));
    }
}
