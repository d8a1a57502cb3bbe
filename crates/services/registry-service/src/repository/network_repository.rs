//! Network repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::Network;

use super::entities::network::{self, ActiveModel, Entity as NetworkEntity};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Network repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait NetworkRepository: Send + Sync {
    /// Find network by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Network>>;

    /// Read the full population, newest update first
    async fn list_all(&self) -> AppResult<Vec<Network>>;

    /// List the networks of one country
    async fn list_for_country(&self, country_id: Uuid) -> AppResult<Vec<Network>>;

    /// Insert when the id is unset, update the existing row otherwise
    async fn save(&self, network: Network) -> AppResult<Network>;
}

/// Concrete implementation of NetworkRepository over SeaORM
pub struct NetworkStore {
    db: DatabaseConnection,
}

impl NetworkStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NetworkRepository for NetworkStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Network>> {
        let result = NetworkEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Network::from))
    }

    async fn list_all(&self) -> AppResult<Vec<Network>> {
        let models = NetworkEntity::find()
            .order_by_desc(network::Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Network::from).collect())
    }

    async fn list_for_country(&self, country_id: Uuid) -> AppResult<Vec<Network>> {
        let models = NetworkEntity::find()
            .filter(network::Column::CountryId.eq(country_id))
            .order_by_desc(network::Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Network::from).collect())
    }

    async fn save(&self, network: Network) -> AppResult<Network> {
        let now = Utc::now();

        let model = match network.id {
            None => {
                let active = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    country_id: Set(network.country_id),
                    name: Set(network.name),
                    code: Set(network.code),
                    is_active: Set(network.is_active),
                    created_at: Set(Some(now)),
                    created_by: Set(network.audit.created_by),
                    updated_at: Set(Some(now)),
                    updated_by: Set(network.audit.updated_by),
                };

                active.insert(&self.db).await.map_err(AppError::from)?
            }
            Some(id) => {
                let existing = NetworkEntity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or(AppError::NotFound)?;

                let mut active: ActiveModel = existing.into();
                active.country_id = Set(network.country_id);
                active.name = Set(network.name);
                active.code = Set(network.code);
                active.is_active = Set(network.is_active);
                active.updated_at = Set(Some(now));
                active.updated_by = Set(network.audit.updated_by);

                active.update(&self.db).await.map_err(AppError::from)?
            }
        };

        Ok(Network::from(model))
    }
}
