//! Country entity and its validation rules.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audit::AuditMeta;
use crate::constants::{
    MAX_CODE_LENGTH, MAX_LATITUDE, MAX_LONGITUDE, MAX_NUMBER_LENGTH, MIN_LATITUDE, MIN_LONGITUDE,
    MIN_NUMBER_LENGTH,
};
use crate::error::FieldErrors;
use crate::image::ImageAttachment;
use crate::validate::Validate;

/// Country entity (Egypt, Saudi Arabia, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// None until the record is first persisted
    pub id: Option<Uuid>,
    pub name: String,
    /// Country code (EG, SA)
    pub code: String,
    /// Phone prefix (+20, +966)
    pub phone_prefix: String,
    /// Expected phone number length
    pub number_length: i16,
    /// Currency code (EGP, SAR); uniqueness is enforced by the storage schema
    pub currency: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Timezone string (Africa/Cairo)
    pub timezone: String,
    /// Flag or similar; replaced with the normalized form on persist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAttachment>,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditMeta,
}

impl Country {
    /// The comparison population: every country except this record itself.
    fn others<'a>(&'a self, population: &'a [Country]) -> impl Iterator<Item = &'a Country> {
        population
            .iter()
            .filter(move |other| self.id.is_none() || other.id != self.id)
    }
}

impl Validate for Country {
    fn validate(&self, population: &[Self]) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.is_empty() {
            errors.insert("name", "Country name is required.");
        } else {
            let name = self.name.to_lowercase();
            if self.others(population).any(|c| c.name.to_lowercase() == name) {
                errors.insert("name", format!("Name '{}' already exists.", self.name));
            }
        }

        if self.code.is_empty() || self.code.chars().count() > MAX_CODE_LENGTH {
            errors.insert("code", "Country code must be 5 characters or less.");
        } else {
            let code = self.code.to_lowercase();
            if self.others(population).any(|c| c.code.to_lowercase() == code) {
                errors.insert("code", format!("Code '{}' already exists.", self.code));
            }
        }

        if !self.phone_prefix.starts_with('+') {
            errors.insert("phone_prefix", "Phone prefix must start with '+'.");
        } else {
            let prefix = self.phone_prefix.to_lowercase();
            if self
                .others(population)
                .any(|c| c.phone_prefix.to_lowercase() == prefix)
            {
                errors.insert(
                    "phone_prefix",
                    format!("Phone prefix '{}' already exists.", self.phone_prefix),
                );
            }
        }

        if !(MIN_NUMBER_LENGTH..=MAX_NUMBER_LENGTH).contains(&self.number_length) {
            errors.insert(
                "number_length",
                "Phone number length must be between 3 and 15.",
            );
        }

        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude) {
            errors.insert("latitude", "Latitude must be between -90 and 90.");
        }

        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude) {
            errors.insert("longitude", "Longitude must be between -180 and 180.");
        }

        errors.into_result()
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_active { "Active" } else { "Inactive" };
        write!(f, "Country {} ({}) - {}", self.name, self.code, status)?;
        match self.audit.updated_at {
            Some(at) => write!(f, ", updated {}", at.format("%Y-%m-%d")),
            None => write!(f, ", just created"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn egypt() -> Country {
        Country {
            name: "Egypt".to_string(),
            code: "EG".to_string(),
            phone_prefix: "+20".to_string(),
            number_length: 10,
            currency: "EGP".to_string(),
            latitude: 30.0,
            longitude: 31.0,
            timezone: "Africa/Cairo".to_string(),
            ..Country::default()
        }
    }

    fn saved(mut country: Country) -> Country {
        country.id = Some(Uuid::new_v4());
        country
    }

    #[test]
    fn test_valid_country_passes() {
        assert!(egypt().validate(&[]).is_ok());
    }

    #[test]
    fn test_prefix_without_plus_rejected() {
        let mut country = egypt();
        country.phone_prefix = "20".to_string();

        let errors = country.validate(&[]).unwrap_err();
        assert_eq!(
            errors.get("phone_prefix"),
            Some("Phone prefix must start with '+'.")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_all_violations_reported_in_one_pass() {
        let mut country = egypt();
        country.name = String::new();
        country.latitude = 200.0;

        let errors = country.validate(&[]).unwrap_err();
        assert_eq!(errors.get("name"), Some("Country name is required."));
        assert_eq!(
            errors.get("latitude"),
            Some("Latitude must be between -90 and 90.")
        );
    }

    #[test]
    fn test_code_uniqueness_is_case_insensitive() {
        let existing = saved(egypt());
        let mut candidate = egypt();
        candidate.name = "Equatorial Guinea".to_string();
        candidate.phone_prefix = "+240".to_string();
        candidate.code = "eg".to_string();

        let errors = candidate.validate(&[existing]).unwrap_err();
        assert_eq!(errors.get("code"), Some("Code 'eg' already exists."));
    }

    #[test]
    fn test_updating_own_record_excludes_self() {
        let existing = saved(egypt());
        let mut update = existing.clone();
        update.timezone = "Africa/Cairo".to_string();

        assert!(update.validate(std::slice::from_ref(&existing)).is_ok());
    }

    #[test]
    fn test_duplicate_name_and_prefix_both_reported() {
        let existing = saved(egypt());
        let mut candidate = egypt();
        candidate.code = "EGY".to_string();

        let errors = candidate.validate(&[existing]).unwrap_err();
        assert_eq!(errors.get("name"), Some("Name 'Egypt' already exists."));
        assert_eq!(
            errors.get("phone_prefix"),
            Some("Phone prefix '+20' already exists.")
        );
        assert!(!errors.contains("code"));
    }

    #[test]
    fn test_number_length_bounds() {
        for bad in [2, 16, 0, -1] {
            let mut country = egypt();
            country.number_length = bad;
            let errors = country.validate(&[]).unwrap_err();
            assert!(errors.contains("number_length"));
        }
        for good in [3, 10, 15] {
            let mut country = egypt();
            country.number_length = good;
            assert!(country.validate(&[]).is_ok());
        }
    }

    #[test]
    fn test_code_longer_than_five_rejected() {
        let mut country = egypt();
        country.code = "EGYPTX".to_string();
        let errors = country.validate(&[]).unwrap_err();
        assert_eq!(
            errors.get("code"),
            Some("Country code must be 5 characters or less.")
        );
    }
}
