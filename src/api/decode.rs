//! Turning raw HTTP responses into menu data.
//!
//! Decoders report failure as [`FetchError`] and never substitute sample
//! data; choosing a fallback is the event handler's job.

use crate::domain::{Category, FetchError, SiteSettings};
use serde::de::DeserializeOwned;

/// Decodes a `/api/menu` response.
///
/// # Errors
///
/// [`FetchError::Status`] for non-2xx responses, [`FetchError::Decode`] when
/// the body is not a JSON array of categories.
pub fn decode_menu(status: u16, body: &[u8]) -> Result<Vec<Category>, FetchError> {
    let categories: Vec<Category> = decode(status, body)?;
    tracing::debug!(category_count = categories.len(), "menu decoded");
    Ok(categories)
}

/// Decodes a `/api/settings` response.
///
/// # Errors
///
/// Same rules as [`decode_menu`].
pub fn decode_settings(status: u16, body: &[u8]) -> Result<SiteSettings, FetchError> {
    decode(status, body)
}

fn decode<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_successful_menu() {
        let body = br#"[{"id": 1, "name": "Drinks", "products": [{"id": 1, "name": "Tea", "price": 4}]}]"#;
        let menu = decode_menu(200, body).unwrap();
        assert_eq!(menu[0].products[0].name, "Tea");
    }

    #[test]
    fn decodes_menu_with_image_objects() {
        let body = br#"[{"id": 1, "name": "Grill", "products": [
            {"id": 1, "name": "Kebab", "price": 30, "images": [{"image_path": "kebab.png"}]}
        ]}]"#;
        let menu = decode_menu(200, body).unwrap();
        assert_eq!(menu[0].products[0].primary_image(), Some("kebab.png"));
    }

    #[test]
    fn non_success_status_is_an_error() {
        assert_eq!(decode_menu(500, b"[]"), Err(FetchError::Status(500)));
        assert_eq!(
            decode_settings(404, b"{}").unwrap_err(),
            FetchError::Status(404)
        );
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(matches!(
            decode_menu(200, b"<html>oops</html>"),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn empty_settings_object_uses_defaults() {
        assert_eq!(decode_settings(200, b"{}"), Ok(SiteSettings::default()));
    }
}
