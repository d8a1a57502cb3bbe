//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Storage code for the superuser administrator role
pub const ROLE_SUPERUSER_ADMIN: i16 = 1;

/// Storage code for the staff administrator role
pub const ROLE_STAFF_ADMIN: i16 = 2;

/// Storage code for regular users
pub const ROLE_USER: i16 = 101;

// =============================================================================
// Validation
// =============================================================================

/// Maximum length of country and network codes
pub const MAX_CODE_LENGTH: usize = 5;

/// Minimum expected phone number length for a country
pub const MIN_NUMBER_LENGTH: i16 = 3;

/// Maximum expected phone number length for a country
pub const MAX_NUMBER_LENGTH: i16 = 15;

/// Southernmost valid latitude
pub const MIN_LATITUDE: f64 = -90.0;

/// Northernmost valid latitude
pub const MAX_LATITUDE: f64 = 90.0;

/// Westernmost valid longitude
pub const MIN_LONGITUDE: f64 = -180.0;

/// Easternmost valid longitude
pub const MAX_LONGITUDE: f64 = 180.0;

// =============================================================================
// Media
// =============================================================================

/// JPEG quality applied when normalizing uploaded images
pub const JPEG_QUALITY: u8 = 75;

/// Content type of normalized images
pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// File extension of normalized images
pub const IMAGE_EXTENSION: &str = "jpg";
