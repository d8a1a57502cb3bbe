//! User account repository implementation with soft delete support.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::UserAccount;

use super::entities::account::{self, ActiveModel, Entity as AccountEntity};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
///
/// By default, query methods exclude soft-deleted records.
/// Use `*_with_deleted` variants to include them.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find active account by ID (excludes soft-deleted)
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserAccount>>;

    /// Find account by ID including soft-deleted
    async fn find_by_id_with_deleted(&self, id: Uuid) -> AppResult<Option<UserAccount>>;

    /// Find active account by username (excludes soft-deleted)
    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserAccount>>;

    /// List all active accounts, newest update first (excludes soft-deleted)
    async fn list(&self) -> AppResult<Vec<UserAccount>>;

    /// List only soft-deleted accounts
    async fn list_deleted(&self) -> AppResult<Vec<UserAccount>>;

    /// Insert when the id is unset, update the existing row otherwise
    async fn save(&self, account: UserAccount) -> AppResult<UserAccount>;

    /// Soft delete account by ID (sets the deleted flag)
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Restore a soft-deleted account
    async fn restore(&self, id: Uuid) -> AppResult<UserAccount>;
}

/// Concrete implementation of AccountRepository with soft delete
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn split_image(account: &UserAccount) -> (Option<String>, Option<Vec<u8>>) {
    match &account.image {
        Some(image) => (Some(image.filename.clone()), Some(image.bytes.clone())),
        None => (None, None),
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserAccount>> {
        let result = AccountEntity::find_by_id(id)
            .filter(account::Column::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(UserAccount::from))
    }

    async fn find_by_id_with_deleted(&self, id: Uuid) -> AppResult<Option<UserAccount>> {
        let result = AccountEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(UserAccount::from))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserAccount>> {
        let result = AccountEntity::find()
            .filter(account::Column::Username.eq(username))
            .filter(account::Column::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(UserAccount::from))
    }

    async fn list(&self) -> AppResult<Vec<UserAccount>> {
        let models = AccountEntity::find()
            .filter(account::Column::IsDeleted.eq(false))
            .order_by_desc(account::Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(UserAccount::from).collect())
    }

    async fn list_deleted(&self) -> AppResult<Vec<UserAccount>> {
        let models = AccountEntity::find()
            .filter(account::Column::IsDeleted.eq(true))
            .order_by_desc(account::Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(UserAccount::from).collect())
    }

    async fn save(&self, account: UserAccount) -> AppResult<UserAccount> {
        let now = Utc::now();
        let (image_name, image_data) = split_image(&account);

        let model = match account.id {
            None => {
                let active = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    username: Set(account.username),
                    role: Set(account.role.code()),
                    country_id: Set(account.country_id),
                    mobile_id: Set(account.mobile_id),
                    email_id: Set(account.email_id),
                    image_name: Set(image_name),
                    image_data: Set(image_data),
                    is_active: Set(account.is_active),
                    is_deleted: Set(account.is_deleted),
                    created_at: Set(Some(now)),
                    created_by: Set(account.audit.created_by),
                    updated_at: Set(Some(now)),
                    updated_by: Set(account.audit.updated_by),
                };

                active.insert(&self.db).await.map_err(AppError::from)?
            }
            Some(id) => {
                // Only active (non-deleted) accounts are updatable
                let existing = AccountEntity::find_by_id(id)
                    .filter(account::Column::IsDeleted.eq(false))
                    .one(&self.db)
                    .await?
                    .ok_or(AppError::NotFound)?;

                let mut active: ActiveModel = existing.into();
                active.username = Set(account.username);
                active.role = Set(account.role.code());
                active.country_id = Set(account.country_id);
                active.mobile_id = Set(account.mobile_id);
                active.email_id = Set(account.email_id);
                active.image_name = Set(image_name);
                active.image_data = Set(image_data);
                active.is_active = Set(account.is_active);
                active.updated_at = Set(Some(now));
                active.updated_by = Set(account.audit.updated_by);

                active.update(&self.db).await.map_err(AppError::from)?
            }
        };

        Ok(UserAccount::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let account = AccountEntity::find_by_id(id)
            .filter(account::Column::IsDeleted.eq(false))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = account.into();
        active.is_deleted = Set(true);
        active.updated_at = Set(Some(Utc::now()));

        active.update(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn restore(&self, id: Uuid) -> AppResult<UserAccount> {
        let account = AccountEntity::find_by_id(id)
            .filter(account::Column::IsDeleted.eq(true))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = account.into();
        active.is_deleted = Set(false);
        active.updated_at = Set(Some(Utc::now()));

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(UserAccount::from(model))
    }
}
