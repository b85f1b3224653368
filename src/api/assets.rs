//! Resolution of image and logo paths against the backend origin.

/// Directory on the backend that serves uploaded files.
pub const UPLOADS_DIR: &str = "/uploads/";

/// Resolves an image or logo reference to a fetchable URL.
///
/// - empty → `None`
/// - starts with `http` → used verbatim
/// - starts with `/uploads/` → `origin` + path
/// - anything else is a bare filename → `origin` + `/uploads/` + path
///
/// # Example
///
/// ```rust
/// use menuboard::api::resolve_asset_url;
///
/// let origin = "http://localhost:5000";
/// assert_eq!(
///     resolve_asset_url("dish.jpg", origin).as_deref(),
///     Some("http://localhost:5000/uploads/dish.jpg")
/// );
/// ```
#[must_use]
pub fn resolve_asset_url(path: &str, origin: &str) -> Option<String> {
    if path.is_empty() {
        None
    } else if path.starts_with("http") {
        Some(path.to_string())
    } else if path.starts_with(UPLOADS_DIR) {
        Some(format!("{origin}{path}"))
    } else {
        Some(format!("{origin}{UPLOADS_DIR}{path}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://localhost:5000";

    #[test]
    fn absolute_urls_are_kept() {
        assert_eq!(
            resolve_asset_url("https://cdn.example.com/a.png", ORIGIN).as_deref(),
            Some("https://cdn.example.com/a.png")
        );
    }

    #[test]
    fn uploads_paths_get_the_origin() {
        assert_eq!(
            resolve_asset_url("/uploads/logo.png", ORIGIN).as_deref(),
            Some("http://localhost:5000/uploads/logo.png")
        );
    }

    #[test]
    fn bare_filenames_land_in_uploads() {
        assert_eq!(
            resolve_asset_url("kebab.jpg", ORIGIN).as_deref(),
            Some("http://localhost:5000/uploads/kebab.jpg")
        );
        assert_eq!(resolve_asset_url("", ORIGIN), None);
    }
}
