//! Mobile and email repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Email, Mobile};

use super::entities::email::{self, Entity as EmailEntity};
use super::entities::mobile::{self, Entity as MobileEntity};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Mobile repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MobileRepository: Send + Sync {
    /// Find mobile by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Mobile>>;

    /// List the mobiles of one account, newest update first
    async fn list_for_account(&self, user_id: Uuid) -> AppResult<Vec<Mobile>>;

    /// Insert when the id is unset, update the existing row otherwise
    async fn save(&self, mobile: Mobile) -> AppResult<Mobile>;
}

/// Email repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmailRepository: Send + Sync {
    /// Find email by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Email>>;

    /// List the emails of one account, newest update first
    async fn list_for_account(&self, user_id: Uuid) -> AppResult<Vec<Email>>;

    /// Insert when the id is unset, update the existing row otherwise
    async fn save(&self, email: Email) -> AppResult<Email>;
}

/// Concrete implementation of MobileRepository over SeaORM
pub struct MobileStore {
    db: DatabaseConnection,
}

impl MobileStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MobileRepository for MobileStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Mobile>> {
        let result = MobileEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Mobile::from))
    }

    async fn list_for_account(&self, user_id: Uuid) -> AppResult<Vec<Mobile>> {
        let models = MobileEntity::find()
            .filter(mobile::Column::UserId.eq(user_id))
            .order_by_desc(mobile::Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Mobile::from).collect())
    }

    async fn save(&self, record: Mobile) -> AppResult<Mobile> {
        let now = Utc::now();

        let model = match record.id {
            None => {
                let active = mobile::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(record.user_id),
                    network_id: Set(record.network_id),
                    number: Set(record.number),
                    is_verified: Set(record.is_verified),
                    is_main: Set(record.is_main),
                    created_at: Set(Some(now)),
                    created_by: Set(record.audit.created_by),
                    updated_at: Set(Some(now)),
                    updated_by: Set(record.audit.updated_by),
                };

                active.insert(&self.db).await.map_err(AppError::from)?
            }
            Some(id) => {
                let existing = MobileEntity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or(AppError::NotFound)?;

                let mut active: mobile::ActiveModel = existing.into();
                active.user_id = Set(record.user_id);
                active.network_id = Set(record.network_id);
                active.number = Set(record.number);
                active.is_verified = Set(record.is_verified);
                active.is_main = Set(record.is_main);
                active.updated_at = Set(Some(now));
                active.updated_by = Set(record.audit.updated_by);

                active.update(&self.db).await.map_err(AppError::from)?
            }
        };

        Ok(Mobile::from(model))
    }
}

/// Concrete implementation of EmailRepository over SeaORM
pub struct EmailStore {
    db: DatabaseConnection,
}

impl EmailStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmailRepository for EmailStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Email>> {
        let result = EmailEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Email::from))
    }

    async fn list_for_account(&self, user_id: Uuid) -> AppResult<Vec<Email>> {
        let models = EmailEntity::find()
            .filter(email::Column::UserId.eq(user_id))
            .order_by_desc(email::Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Email::from).collect())
    }

    async fn save(&self, record: Email) -> AppResult<Email> {
        let now = Utc::now();

        let model = match record.id {
            None => {
                let active = email::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(record.user_id),
                    network_id: Set(record.network_id),
                    email: Set(record.email),
                    is_verified: Set(record.is_verified),
                    is_main: Set(record.is_main),
                    created_at: Set(Some(now)),
                    created_by: Set(record.audit.created_by),
                    updated_at: Set(Some(now)),
                    updated_by: Set(record.audit.updated_by),
                };

                active.insert(&self.db).await.map_err(AppError::from)?
            }
            Some(id) => {
                let existing = EmailEntity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or(AppError::NotFound)?;

                let mut active: email::ActiveModel = existing.into();
                active.user_id = Set(record.user_id);
                active.network_id = Set(record.network_id);
                active.email = Set(record.email);
                active.is_verified = Set(record.is_verified);
                active.is_main = Set(record.is_main);
                active.updated_at = Set(Some(now));
                active.updated_by = Set(record.audit.updated_by);

                active.update(&self.db).await.map_err(AppError::from)?
            }
        };

        Ok(Email::from(model))
    }
}
