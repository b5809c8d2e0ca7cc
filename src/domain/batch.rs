use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::Identifiable;
use crate::ids::{self, IdPrefix};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BatchKind {
    FeeRun,
}

/// Aggregated from the real per-entry outcomes of the run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Completed,
    Partial,
    Failed,
}

/// Summary record for one bulk operation. A batch reports the count and sum
/// of the transactions it caused; it does not own them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Batch {
    pub id: String,
    pub kind: BatchKind,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    pub total_amount: Decimal,
    pub entry_count: usize,
    #[serde(default)]
    pub failed_count: usize,
    pub status: BatchStatus,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Batch {
    /// A fee-run batch seeded with the selection preview. Totals and status
    /// are reconciled once every entry has completed or been accounted a
    /// failure.
    pub fn fee_run(
        period: impl Into<String>,
        preview_total: Decimal,
        preview_count: usize,
        created_by: impl Into<String>,
    ) -> Self {
        let period = period.into();
        Self {
            id: ids::new_id(IdPrefix::Batch),
            kind: BatchKind::FeeRun,
            description: format!("Course fee run for {}", period),
            period: Some(period),
            total_amount: preview_total,
            entry_count: preview_count,
            failed_count: 0,
            status: BatchStatus::Completed,
            created_by: created_by.into(),
            created_at: Utc::now(),
        }
    }
}

impl Identifiable for Batch {
    fn id(&self) -> &str {
        &self.id
    }
}
