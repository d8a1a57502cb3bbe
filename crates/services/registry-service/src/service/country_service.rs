//! Country service - the persist pipeline for countries.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Country, Validate};

use crate::media::ImageNormalizer;
use crate::repository::CountryRepository;

/// Country service trait for dependency injection.
#[async_trait]
pub trait CountryService: Send + Sync {
    /// Get country by ID
    async fn get_country(&self, id: Uuid) -> AppResult<Country>;

    /// List all countries, newest update first
    async fn list_countries(&self) -> AppResult<Vec<Country>>;

    /// Validate against the stored population, normalize the attached
    /// image, and store
    async fn save_country(&self, country: Country) -> AppResult<Country>;
}

/// Concrete implementation of CountryService using repository.
pub struct CountryManager {
    repo: Arc<dyn CountryRepository>,
    normalizer: ImageNormalizer,
}

impl CountryManager {
    /// Create new country service instance with repository
    pub fn new(repo: Arc<dyn CountryRepository>) -> Self {
        Self {
            repo,
            normalizer: ImageNormalizer::default(),
        }
    }

    /// Create with a specific normalizer configuration
    pub fn with_normalizer(repo: Arc<dyn CountryRepository>, normalizer: ImageNormalizer) -> Self {
        Self { repo, normalizer }
    }
}

#[async_trait]
impl CountryService for CountryManager {
    async fn get_country(&self, id: Uuid) -> AppResult<Country> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn list_countries(&self) -> AppResult<Vec<Country>> {
        self.repo.list_all().await
    }

    async fn save_country(&self, mut country: Country) -> AppResult<Country> {
        let population = self.repo.list_all().await?;
        country.validate(&population)?;

        if let Some(upload) = country.image.take() {
            country.image = Some(self.normalizer.normalize(&upload)?);
        }

        let saved = self.repo.save(country).await?;
        tracing::info!(country = %saved, "country persisted");
        Ok(saved)
    }
}
