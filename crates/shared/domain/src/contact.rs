//! Mobile number and email contact entities.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audit::AuditMeta;

/// A mobile number belonging to a user account on a carrier network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mobile {
    /// None until the record is first persisted
    pub id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub network_id: Option<Uuid>,
    pub number: i64,
    pub is_verified: bool,
    /// Intended to mark the user's primary mobile; exclusivity is not enforced
    pub is_main: bool,
    #[serde(flatten)]
    pub audit: AuditMeta,
}

/// An email address belonging to a user account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// None until the record is first persisted
    pub id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub network_id: Option<Uuid>,
    pub email: String,
    pub is_verified: bool,
    /// Intended to mark the user's primary email; exclusivity is not enforced
    pub is_main: bool,
    #[serde(flatten)]
    pub audit: AuditMeta,
}
