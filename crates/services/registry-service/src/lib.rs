//! Registry Service Library
//!
//! Persistence core for the registry data model: repository-backed stores,
//! the validate -> normalize -> store persist pipeline, and the image
//! normalizer. Any outer transport (HTTP, gRPC, admin tooling) embeds this
//! crate; none is provided here.

pub mod config;
pub mod infra;
pub mod media;
pub mod repository;
pub mod service;

use std::sync::Arc;

use common::AppResult;

use crate::config::RegistryConfig;
use crate::infra::Database;
use crate::media::ImageNormalizer;
use crate::repository::{AccountStore, CountryStore, EmailStore, MobileStore, NetworkStore};
use crate::service::{
    AccountManager, AccountService, ContactManager, ContactService, CountryManager,
    CountryService, NetworkManager, NetworkService,
};

/// Composition root wiring stores into the persist services over one
/// database connection.
pub struct Registry {
    pub countries: Arc<dyn CountryService>,
    pub networks: Arc<dyn NetworkService>,
    pub accounts: Arc<dyn AccountService>,
    pub contacts: Arc<dyn ContactService>,
}

impl Registry {
    /// Connect to storage and wire up the persist services.
    pub async fn connect(config: &RegistryConfig) -> AppResult<Self> {
        let db = Database::connect(&config.database_url).await?;
        let conn = db.get_connection();

        let countries = Arc::new(CountryManager::with_normalizer(
            Arc::new(CountryStore::new(conn.clone())),
            ImageNormalizer::new(config.media.jpeg_quality),
        ));
        let networks = Arc::new(NetworkManager::new(Arc::new(NetworkStore::new(
            conn.clone(),
        ))));
        let accounts = Arc::new(AccountManager::with_normalizer(
            Arc::new(AccountStore::new(conn.clone())),
            ImageNormalizer::new(config.media.jpeg_quality),
        ));
        let contacts = Arc::new(ContactManager::new(
            Arc::new(MobileStore::new(conn.clone())),
            Arc::new(EmailStore::new(conn)),
        ));

        Ok(Self {
            countries,
            networks,
            accounts,
            contacts,
        })
    }
}
