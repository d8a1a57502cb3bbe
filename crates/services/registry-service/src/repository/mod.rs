//! Storage layer: repository traits and their SeaORM implementations.

pub mod entities;

mod account_repository;
mod contact_repository;
mod country_repository;
mod network_repository;

pub use account_repository::{AccountRepository, AccountStore};
pub use contact_repository::{EmailRepository, EmailStore, MobileRepository, MobileStore};
pub use country_repository::{CountryRepository, CountryStore};
pub use network_repository::{NetworkRepository, NetworkStore};

#[cfg(any(test, feature = "test-utils"))]
pub use account_repository::MockAccountRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use contact_repository::{MockEmailRepository, MockMobileRepository};
#[cfg(any(test, feature = "test-utils"))]
pub use country_repository::MockCountryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use network_repository::MockNetworkRepository;
