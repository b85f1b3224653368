//! Site-wide settings served by the backend's `/api/settings` endpoint.

use serde::{Deserialize, Serialize};

/// Branding and color settings for the restaurant.
///
/// Field names follow the backend's camelCase wire format. Any field the
/// backend omits or sends as `null` takes its value from
/// [`SiteSettings::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "WireSettings")]
pub struct SiteSettings {
    pub site_name: String,
    pub description: Option<String>,
    /// Logo path or URL; resolved against the backend origin before display.
    pub logo: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
}

/// `/api/settings` as sent, before defaults are filled in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSettings {
    #[serde(default)]
    site_name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "logo_url")]
    logo: Option<String>,
    #[serde(default)]
    primary_color: Option<String>,
    #[serde(default)]
    secondary_color: Option<String>,
    #[serde(default)]
    background_color: Option<String>,
}

impl From<WireSettings> for SiteSettings {
    fn from(wire: WireSettings) -> Self {
        let defaults = Self::default();
        Self {
            site_name: wire.site_name.unwrap_or(defaults.site_name),
            description: wire.description,
            logo: wire.logo,
            primary_color: wire.primary_color.unwrap_or(defaults.primary_color),
            secondary_color: wire.secondary_color.unwrap_or(defaults.secondary_color),
            background_color: wire.background_color.unwrap_or(defaults.background_color),
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "مطعمنا الرائع".to_string(),
            description: None,
            logo: None,
            primary_color: "#3b82f6".to_string(),
            secondary_color: "#1e40af".to_string(),
            background_color: "#f8fafc".to_string(),
        }
    }
}
