//! Network service - the persist pipeline for carrier networks.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Network, Validate};

use crate::repository::NetworkRepository;

/// Network service trait for dependency injection.
#[async_trait]
pub trait NetworkService: Send + Sync {
    /// Get network by ID
    async fn get_network(&self, id: Uuid) -> AppResult<Network>;

    /// List all networks, newest update first
    async fn list_networks(&self) -> AppResult<Vec<Network>>;

    /// List the networks of one country
    async fn list_networks_for_country(&self, country_id: Uuid) -> AppResult<Vec<Network>>;

    /// Validate against the stored population and store
    async fn save_network(&self, network: Network) -> AppResult<Network>;
}

/// Concrete implementation of NetworkService using repository.
pub struct NetworkManager {
    repo: Arc<dyn NetworkRepository>,
}

impl NetworkManager {
    /// Create new network service instance with repository
    pub fn new(repo: Arc<dyn NetworkRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl NetworkService for NetworkManager {
    async fn get_network(&self, id: Uuid) -> AppResult<Network> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn list_networks(&self) -> AppResult<Vec<Network>> {
        self.repo.list_all().await
    }

    async fn list_networks_for_country(&self, country_id: Uuid) -> AppResult<Vec<Network>> {
        self.repo.list_for_country(country_id).await
    }

    async fn save_network(&self, network: Network) -> AppResult<Network> {
        let population = self.repo.list_all().await?;
        network.validate(&population)?;

        let saved = self.repo.save(network).await?;
        tracing::info!(network = %saved, "network persisted");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockNetworkRepository;

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

    #[tokio::test]
    async fn test_save_valid_network() {
        let mut repo = MockNetworkRepository::new();
        repo.expect_list_all().returning(|| Ok(vec![]));
        repo.expect_save().returning(|network| Ok(saved(network)));

        let service = NetworkManager::new(Arc::new(repo));
        let result = service.save_network(vodafone(Uuid::new_v4())).await.unwrap();

        assert!(result.id.is_some());
    }

    #[tokio::test]
    async fn test_alphanumeric_code_aborts_before_write() {
        let mut repo = MockNetworkRepository::new();
        repo.expect_list_all().returning(|| Ok(vec![]));
        // no expect_save: a write would panic the mock

        let mut network = vodafone(Uuid::new_v4());
        network.code = "10a".to_string();

        let service = NetworkManager::new(Arc::new(repo));
        let err = service.save_network(network).await.unwrap_err();

        match err {
            AppError::Validation(errors) => {
                assert_eq!(
                    errors.get("code"),
                    Some("Network code cannot contain letters or symbols.")
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_same_country_duplicate_rejected() {
        let country_id = Uuid::new_v4();
        let existing = saved(vodafone(country_id));

        let mut repo = MockNetworkRepository::new();
        repo.expect_list_all()
            .returning(move || Ok(vec![existing.clone()]));

        let service = NetworkManager::new(Arc::new(repo));
        let err = service
            .save_network(vodafone(country_id))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }
}
