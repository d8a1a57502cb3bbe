//! Image attachment value object and canonical storage paths.

use serde::{Deserialize, Serialize};
use slug::slugify;

use crate::account::UserAccount;
use crate::constants::IMAGE_EXTENSION;
use crate::country::Country;

/// An uploaded or normalized image carried by an entity.
///
/// Uploads arrive with whatever filename and content type the client sent;
/// after normalization the bytes are JPEG, the extension is forced to `.jpg`,
/// and the content type is `image/jpeg`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttachment {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Filename portion before the first `.`
    pub fn stem(&self) -> &str {
        self.filename.split('.').next().unwrap_or("")
    }
}

/// Storage path for a user account image.
pub fn user_image_path(account: &UserAccount) -> String {
    format!(
        "user/image/{}.{}",
        slugify(account.to_string()),
        IMAGE_EXTENSION
    )
}

/// Storage path for a country image.
pub fn country_image_path(country: &Country) -> String {
    format!(
        "country/image/{}.{}",
        slugify(country.to_string()),
        IMAGE_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_takes_everything_before_first_dot() {
        let upload = ImageAttachment::new("photo.tar.heic", "image/heic", vec![]);
        assert_eq!(upload.stem(), "photo");
    }

    #[test]
    fn test_country_image_path_is_slugged() {
        let country = Country {
            name: "Saudi Arabia".to_string(),
            code: "SA".to_string(),
            ..Country::default()
        };

        let path = country_image_path(&country);
        assert!(path.starts_with("country/image/"));
        assert!(path.ends_with(".jpg"));
        assert!(path
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "/-.".contains(c)));
    }

    #[test]
    fn test_user_image_path_is_slugged() {
        let account = UserAccount {
            username: "Ahmad Ibrahim".to_string(),
            ..UserAccount::default()
        };

        let path = user_image_path(&account);
        assert!(path.starts_with("user/image/"));
        assert!(path.ends_with(".jpg"));
        assert!(path.contains("ahmad-ibrahim"));
    }
}
