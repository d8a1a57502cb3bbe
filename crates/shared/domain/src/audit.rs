//! Ownership and audit metadata shared by all persisted entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Creation and update bookkeeping embedded in every entity.
///
/// Timestamps are stamped by the storage layer on insert and update. The
/// actor references point at the account that performed the write and stay
/// `None` for unattributed writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditMeta {
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<Uuid>,
}

impl AuditMeta {
    /// Metadata for a record authored by `actor`, not yet persisted.
    pub fn by(actor: Option<Uuid>) -> Self {
        Self {
            created_by: actor,
            updated_by: actor,
            ..Self::default()
        }
    }
}
