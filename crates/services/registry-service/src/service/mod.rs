//! Service layer: the persist pipeline per entity kind.

mod account_service;
mod contact_service;
mod country_service;
mod network_service;

pub use account_service::{AccountManager, AccountService};
pub use contact_service::{ContactManager, ContactService};
pub use country_service::{CountryManager, CountryService};
pub use network_service::{NetworkManager, NetworkService};
