//! Mobile network (carrier) entity and its validation rules.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audit::AuditMeta;
use crate::constants::MAX_CODE_LENGTH;
use crate::error::FieldErrors;
use crate::validate::Validate;

/// Mobile carrier entity (Vodafone, Etisalat, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// None until the record is first persisted
    pub id: Option<Uuid>,
    /// Owning country; a network belongs to exactly one
    pub country_id: Option<Uuid>,
    pub name: String,
    /// Prefix used in mobile numbers (010, 011, ...); digits only
    pub code: String,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditMeta,
}

impl Validate for Network {
    fn validate(&self, population: &[Self]) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        // Name and code collisions only matter inside one country; two
        // countries may both have a "Vodafone".
        let rivals: Vec<&Network> = match self.country_id {
            Some(country_id) => population
                .iter()
                .filter(|n| self.id.is_none() || n.id != self.id)
                .filter(|n| n.country_id == Some(country_id))
                .collect(),
            None => {
                errors.insert("country", "Country selection is required.");
                Vec::new()
            }
        };

        if self.name.is_empty() {
            errors.insert("name", "Network name is required.");
        } else {
            let name = self.name.to_lowercase();
            if rivals.iter().any(|n| n.name.to_lowercase() == name) {
                errors.insert("name", format!("Name '{}' already exists.", self.name));
            }
        }

        if self.code.is_empty() || self.code.chars().count() > MAX_CODE_LENGTH {
            errors.insert("code", "Network code must be 5 characters or less.");
        } else if !self.code.bytes().all(|b| b.is_ascii_digit()) {
            errors.insert("code", "Network code cannot contain letters or symbols.");
        } else if rivals.iter().any(|n| n.code == self.code) {
            errors.insert("code", format!("Code '{}' already exists.", self.code));
        }

        errors.into_result()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_active { "Active" } else { "Inactive" };
        write!(f, "Network {} ({}) - {}", self.name, self.code, status)?;
        match self.audit.updated_at {
            Some(at) => write!(f, ", updated {}", at.format("%Y-%m-%d")),
            None => write!(f, ", just created"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vodafone(country_id: Uuid) -> Network {
        Network {
            country_id: Some(country_id),
            name: "Vodafone".to_string(),
            code: "010".to_string(),
            ..Network::default()
        }
    }

    fn saved(mut network: Network) -> Network {
        network.id = Some(Uuid::new_v4());
        network
    }

    #[test]
    fn test_leading_zero_code_passes() {
        let network = vodafone(Uuid::new_v4());
        assert!(network.validate(&[]).is_ok());
    }

    #[test]
    fn test_code_with_letter_rejected() {
        let mut network = vodafone(Uuid::new_v4());
        network.code = "10a".to_string();

        let errors = network.validate(&[]).unwrap_err();
        assert_eq!(
            errors.get("code"),
            Some("Network code cannot contain letters or symbols.")
        );
    }

    #[test]
    fn test_code_with_sign_rejected() {
        let mut network = vodafone(Uuid::new_v4());
        network.code = "+10".to_string();

        let errors = network.validate(&[]).unwrap_err();
        assert_eq!(
            errors.get("code"),
            Some("Network code cannot contain letters or symbols.")
        );
    }

    #[test]
    fn test_missing_country_and_name_reported_together() {
        let network = Network {
            code: "011".to_string(),
            ..Network::default()
        };

        let errors = network.validate(&[]).unwrap_err();
        assert_eq!(errors.get("country"), Some("Country selection is required."));
        assert_eq!(errors.get("name"), Some("Network name is required."));
    }

    #[test]
    fn test_same_country_duplicate_name_rejected() {
        let country_id = Uuid::new_v4();
        let existing = saved(vodafone(country_id));
        let mut candidate = vodafone(country_id);
        candidate.name = "VODAFONE".to_string();
        candidate.code = "011".to_string();

        let errors = candidate.validate(&[existing]).unwrap_err();
        assert_eq!(errors.get("name"), Some("Name 'VODAFONE' already exists."));
    }

    #[test]
    fn test_other_country_duplicate_tolerated() {
        let existing = saved(vodafone(Uuid::new_v4()));
        let candidate = vodafone(Uuid::new_v4());

        assert!(candidate.validate(&[existing]).is_ok());
    }

    #[test]
    fn test_same_country_duplicate_code_rejected() {
        let country_id = Uuid::new_v4();
        let existing = saved(vodafone(country_id));
        let mut candidate = vodafone(country_id);
        candidate.name = "Etisalat".to_string();

        let errors = candidate.validate(&[existing]).unwrap_err();
        assert_eq!(errors.get("code"), Some("Code '010' already exists."));
    }

    #[test]
    fn test_updating_own_record_excludes_self() {
        let existing = saved(vodafone(Uuid::new_v4()));
        let mut update = existing.clone();
        update.is_active = true;

        assert!(update.validate(std::slice::from_ref(&existing)).is_ok());
    }

    #[test]
    fn test_code_longer_than_five_rejected() {
        let mut network = vodafone(Uuid::new_v4());
        network.code = "010101".to_string();

        let errors = network.validate(&[]).unwrap_err();
        assert_eq!(
            errors.get("code"),
            Some("Network code must be 5 characters or less.")
        );
    }
}
