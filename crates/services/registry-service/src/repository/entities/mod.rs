//! SeaORM entity definitions for the registry schema.

pub mod account;
pub mod country;
pub mod email;
pub mod mobile;
pub mod network;
