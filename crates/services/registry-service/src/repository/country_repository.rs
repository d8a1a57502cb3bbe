//! Country repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::Country;

use super::entities::country::{self, ActiveModel, Entity as CountryEntity};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Country repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Find country by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Country>>;

    /// Read the full population, newest update first
    async fn list_all(&self) -> AppResult<Vec<Country>>;

    /// Insert when the id is unset, update the existing row otherwise
    async fn save(&self, country: Country) -> AppResult<Country>;
}

/// Concrete implementation of CountryRepository over SeaORM
pub struct CountryStore {
    db: DatabaseConnection,
}

impl CountryStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn split_image(country: &Country) -> (Option<String>, Option<Vec<u8>>) {
    match &country.image {
        Some(image) => (Some(image.filename.clone()), Some(image.bytes.clone())),
        None => (None, None),
    }
}

#[async_trait]
impl CountryRepository for CountryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Country>> {
        let result = CountryEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Country::from))
    }

    async fn list_all(&self) -> AppResult<Vec<Country>> {
        let models = CountryEntity::find()
            .order_by_desc(country::Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Country::from).collect())
    }

    async fn save(&self, country: Country) -> AppResult<Country> {
        let now = Utc::now();
        let (image_name, image_data) = split_image(&country);

        let model = match country.id {
            None => {
                let active = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    name: Set(country.name),
                    code: Set(country.code),
                    phone_prefix: Set(country.phone_prefix),
                    number_length: Set(country.number_length),
                    currency: Set(country.currency),
                    latitude: Set(country.latitude),
                    longitude: Set(country.longitude),
                    timezone: Set(country.timezone),
                    image_name: Set(image_name),
                    image_data: Set(image_data),
                    is_active: Set(country.is_active),
                    created_at: Set(Some(now)),
                    created_by: Set(country.audit.created_by),
                    updated_at: Set(Some(now)),
                    updated_by: Set(country.audit.updated_by),
                };

                active.insert(&self.db).await.map_err(AppError::from)?
            }
            Some(id) => {
                let existing = CountryEntity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or(AppError::NotFound)?;

                let mut active: ActiveModel = existing.into();
                active.name = Set(country.name);
                active.code = Set(country.code);
                active.phone_prefix = Set(country.phone_prefix);
                active.number_length = Set(country.number_length);
                active.currency = Set(country.currency);
                active.latitude = Set(country.latitude);
                active.longitude = Set(country.longitude);
                active.timezone = Set(country.timezone);
                active.image_name = Set(image_name);
                active.image_data = Set(image_data);
                active.is_active = Set(country.is_active);
                active.updated_at = Set(Some(now));
                active.updated_by = Set(country.audit.updated_by);

                active.update(&self.db).await.map_err(AppError::from)?
            }
        };

        Ok(Country::from(model))
    }
}
