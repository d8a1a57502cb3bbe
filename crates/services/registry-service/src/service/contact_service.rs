//! Contact service - persist operations for mobiles and emails.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Email, Mobile};

use crate::repository::{EmailRepository, MobileRepository};

/// Contact service trait for dependency injection.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Get mobile by ID
    async fn get_mobile(&self, id: Uuid) -> AppResult<Mobile>;

    /// Get email by ID
    async fn get_email(&self, id: Uuid) -> AppResult<Email>;

    /// List the mobiles of one account
    async fn list_mobiles(&self, user_id: Uuid) -> AppResult<Vec<Mobile>>;

    /// List the emails of one account
    async fn list_emails(&self, user_id: Uuid) -> AppResult<Vec<Email>>;

    /// Store a mobile record
    async fn save_mobile(&self, mobile: Mobile) -> AppResult<Mobile>;

    /// Store an email record
    async fn save_email(&self, email: Email) -> AppResult<Email>;
}

/// Concrete implementation of ContactService using repositories.
pub struct ContactManager {
    mobiles: Arc<dyn MobileRepository>,
    emails: Arc<dyn EmailRepository>,
}

impl ContactManager {
    /// Create new contact service instance with repositories
    pub fn new(mobiles: Arc<dyn MobileRepository>, emails: Arc<dyn EmailRepository>) -> Self {
        Self { mobiles, emails }
    }
}

#[async_trait]
impl ContactService for ContactManager {
    async fn get_mobile(&self, id: Uuid) -> AppResult<Mobile> {
        self.mobiles.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn get_email(&self, id: Uuid) -> AppResult<Email> {
        self.emails.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn list_mobiles(&self, user_id: Uuid) -> AppResult<Vec<Mobile>> {
        self.mobiles.list_for_account(user_id).await
    }

    async fn list_emails(&self, user_id: Uuid) -> AppResult<Vec<Email>> {
        self.emails.list_for_account(user_id).await
    }

    async fn save_mobile(&self, mobile: Mobile) -> AppResult<Mobile> {
        self.mobiles.save(mobile).await
    }

    async fn save_email(&self, email: Email) -> AppResult<Email> {
        self.emails.save(email).await
    }
}
