//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the registry entities (countries, networks, accounts, contacts), their
//! validation rules, and the image attachment value objects shared by the
//! persistence services.

pub mod account;
pub mod audit;
pub mod constants;
pub mod contact;
pub mod country;
pub mod error;
pub mod image;
pub mod network;
pub mod validate;

pub use account::{Role, UserAccount};
pub use audit::AuditMeta;
pub use constants::*;
pub use contact::{Email, Mobile};
pub use country::Country;
pub use error::{DomainError, DomainResult, FieldErrors};
pub use image::{country_image_path, user_image_path, ImageAttachment};
pub use network::Network;
pub use validate::Validate;
