//! User account entity, roles, and the soft-delete lifecycle.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audit::AuditMeta;
use crate::constants::{ROLE_STAFF_ADMIN, ROLE_SUPERUSER_ADMIN, ROLE_USER};
use crate::image::ImageAttachment;

/// User roles enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperuserAdmin,
    StaffAdmin,
    #[default]
    User,
}

impl Role {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::SuperuserAdmin | Role::StaffAdmin)
    }

    /// Numeric code used by the storage schema
    pub fn code(&self) -> i16 {
        match self {
            Role::SuperuserAdmin => ROLE_SUPERUSER_ADMIN,
            Role::StaffAdmin => ROLE_STAFF_ADMIN,
            Role::User => ROLE_USER,
        }
    }

    /// Resolve a storage code back to a role
    pub fn from_code(code: i16) -> Option<Role> {
        match code {
            ROLE_SUPERUSER_ADMIN => Some(Role::SuperuserAdmin),
            ROLE_STAFF_ADMIN => Some(Role::StaffAdmin),
            ROLE_USER => Some(Role::User),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::SuperuserAdmin => write!(f, "Superuser Admin"),
            Role::StaffAdmin => write!(f, "Staff Admin"),
            Role::User => write!(f, "User"),
        }
    }
}

/// User account entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    /// None until the record is first persisted
    pub id: Option<Uuid>,
    pub username: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<Uuid>,
    /// Primary mobile record, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_id: Option<Uuid>,
    /// Primary email record, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_id: Option<Uuid>,
    /// Profile image; replaced with the normalized form on persist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAttachment>,
    pub is_active: bool,
    /// Soft delete flag; deleted accounts stay in storage
    pub is_deleted: bool,
    #[serde(flatten)]
    pub audit: AuditMeta,
}

impl UserAccount {
    /// Mark the account as soft deleted
    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
    }

    /// Bring a soft-deleted account back
    pub fn restore(&mut self) {
        self.is_deleted = false;
    }
}

impl fmt::Display for UserAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_active { "Active" } else { "Inactive" };
        write!(f, "User account {} ({}) - {}", self.username, self.role, status)?;
        match self.audit.updated_at {
            Some(at) => write!(f, ", updated {}", at.format("%Y-%m-%d")),
            None => write!(f, ", just created"),
        }
    }
}
