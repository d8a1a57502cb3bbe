//! Account service - persist pipeline and soft-delete lifecycle for user
//! accounts.
//!
//! Accounts carry no field validation rules; persisting one only normalizes
//! the attached profile image before the write.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::UserAccount;

use crate::media::ImageNormalizer;
use crate::repository::AccountRepository;

/// Account service trait for dependency injection.
///
/// By default, operations exclude soft-deleted accounts.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Get active account by ID (excludes soft-deleted)
    async fn get_account(&self, id: Uuid) -> AppResult<UserAccount>;

    /// Get account by ID including soft-deleted
    async fn get_account_with_deleted(&self, id: Uuid) -> AppResult<UserAccount>;

    /// Get active account by username
    async fn get_account_by_username(&self, username: &str) -> AppResult<UserAccount>;

    /// List all active accounts (excludes soft-deleted)
    async fn list_accounts(&self) -> AppResult<Vec<UserAccount>>;

    /// List only soft-deleted accounts
    async fn list_deleted_accounts(&self) -> AppResult<Vec<UserAccount>>;

    /// Normalize the attached image and store
    async fn save_account(&self, account: UserAccount) -> AppResult<UserAccount>;

    /// Soft delete account (sets the deleted flag)
    async fn delete_account(&self, id: Uuid) -> AppResult<()>;

    /// Restore a soft-deleted account
    async fn restore_account(&self, id: Uuid) -> AppResult<UserAccount>;
}

/// Concrete implementation of AccountService using repository.
pub struct AccountManager {
    repo: Arc<dyn AccountRepository>,
    normalizer: ImageNormalizer,
}

impl AccountManager {
    /// Create new account service instance with repository
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self {
            repo,
            normalizer: ImageNormalizer::default(),
        }
    }

    /// Create with a specific normalizer configuration
    pub fn with_normalizer(repo: Arc<dyn AccountRepository>, normalizer: ImageNormalizer) -> Self {
        Self { repo, normalizer }
    }
}

#[async_trait]
impl AccountService for AccountManager {
    async fn get_account(&self, id: Uuid) -> AppResult<UserAccount> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn get_account_with_deleted(&self, id: Uuid) -> AppResult<UserAccount> {
        self.repo
            .find_by_id_with_deleted(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn get_account_by_username(&self, username: &str) -> AppResult<UserAccount> {
        self.repo
            .find_by_username(username)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_accounts(&self) -> AppResult<Vec<UserAccount>> {
        self.repo.list().await
    }

    async fn list_deleted_accounts(&self) -> AppResult<Vec<UserAccount>> {
        self.repo.list_deleted().await
    }

    async fn save_account(&self, mut account: UserAccount) -> AppResult<UserAccount> {
        if let Some(upload) = account.image.take() {
            account.image = Some(self.normalizer.normalize(&upload)?);
        }

        let saved = self.repo.save(account).await?;
        tracing::info!(account = %saved, "account persisted");
        Ok(saved)
    }

    async fn delete_account(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await
    }

    async fn restore_account(&self, id: Uuid) -> AppResult<UserAccount> {
        self.repo.restore(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockAccountRepository;
    use domain::ImageAttachment;
    use std::io::Cursor;

    fn account() -> UserAccount {
        UserAccount {
            username: "ahmad".to_string(),
            ..UserAccount::default()
        }
    }

    fn saved(mut account: UserAccount) -> UserAccount {
        account.id = Some(Uuid::new_v4());
        account
    }

    fn png_upload() -> ImageAttachment {
        let img = image::RgbImage::from_pixel(2, 2, image::Rgb([9, 9, 9]));
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        ImageAttachment::new("me.png", "image/png", buf.into_inner())
    }

    #[tokio::test]
    async fn test_save_account_normalizes_image() {
        let mut repo = MockAccountRepository::new();
        repo.expect_save()
            .withf(|account| {
                account.image.as_ref().is_some_and(|image| {
                    image.filename == "me.jpg" && image.content_type == "image/jpeg"
                })
            })
            .returning(|account| Ok(saved(account)));

        let mut candidate = account();
        candidate.image = Some(png_upload());

        let service = AccountManager::new(Arc::new(repo));
        let result = service.save_account(candidate).await.unwrap();

        assert!(result.id.is_some());
    }

    #[tokio::test]
    async fn test_save_account_without_image_is_untouched() {
        let mut repo = MockAccountRepository::new();
        repo.expect_save()
            .withf(|account| account.image.is_none())
            .returning(|account| Ok(saved(account)));

        let service = AccountManager::new(Arc::new(repo));
        let result = service.save_account(account()).await.unwrap();

        assert!(result.image.is_none());
    }

    #[tokio::test]
    async fn test_delete_account() {
        let mut repo = MockAccountRepository::new();
        repo.expect_delete().returning(|_| Ok(()));

        let service = AccountManager::new(Arc::new(repo));
        assert!(service.delete_account(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn test_restore_account() {
        let mut repo = MockAccountRepository::new();
        repo.expect_restore().returning(|id| {
            let mut restored = account();
            restored.id = Some(id);
            Ok(restored)
        });

        let service = AccountManager::new(Arc::new(repo));
        let id = Uuid::new_v4();
        let result = service.restore_account(id).await.unwrap();

        assert_eq!(result.id, Some(id));
    }

    #[tokio::test]
    async fn test_get_account_not_found() {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = AccountManager::new(Arc::new(repo));
        let result = service.get_account(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }
}
