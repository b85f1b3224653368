//! Menuboard: a Zellij plugin for browsing a restaurant's menu.
//!
//! Menuboard fetches the menu and site settings from the restaurant backend
//! and shows them in a floating pane:
//! - Live search across dish names with match highlighting
//! - Category filter bar
//! - Image lightbox that pages through the dishes of one category
//! - Per-dish image carousel
//! - Built-in sample menu and default branding when the backend is unreachable

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← web_request, timers, keys
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling and fetch fallback                │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI (ui/)      │   │ Catalog       │   │ Gallery       │
//! │ - Rendering   │   │ (catalog/)    │   │ (gallery/)    │
//! │ - Theming     │   │ - Filtering   │   │ - Lightbox    │
//! │ - Components  │   │ - Highlighting│   │ - Carousel    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  API (api/) and Domain (domain/)                    │
//! │  - Endpoints, response decoding, asset URLs         │
//! │  - Menu and settings types, sample menu, errors     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/menuboard.wasm" {
//!         backend_origin "https://menu.example.com"
//!         request_timeout "10"
//!         currency "ر.س"
//!         theme "catppuccin-mocha"
//!         site_colors "true"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use menuboard::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! for event in [Event::Reload, Event::KeyDown, Event::SearchMode, Event::Char('t')] {
//!     let (_should_render, _actions) = handle_event(&mut state, &event)?;
//!     // Execute actions...
//! }
//! # Ok::<(), menuboard::MenuboardError>(())
//! ```

pub mod api;
pub mod app;
pub mod catalog;
pub mod domain;
pub mod gallery;
pub mod infrastructure;
pub mod ui;

pub mod observability;

pub use app::{
    handle_event, Action, AppState, DataSource, DisplayOptions, Event, InputMode, SearchFocus,
};
pub use domain::{MenuboardError, Result};
pub use ui::Theme;

use infrastructure::expand_tilde;
use std::collections::BTreeMap;

const DEFAULT_BACKEND_ORIGIN: &str = "http://localhost:5000";
const DEFAULT_REQUEST_TIMEOUT_SECS: f64 = 10.0;
const DEFAULT_CURRENCY: &str = "ر.س";

/// Plugin configuration parsed from Zellij's plugin block.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Scheme and host of the backend, without the `/api` suffix.
    pub backend_origin: String,

    /// Seconds to wait for the backend before falling back.
    pub request_timeout_secs: f64,

    pub currency: String,

    /// Built-in theme name. Ignored when `theme_file` is set.
    pub theme_name: Option<String>,

    /// Custom TOML theme, `~` already expanded to `/host`.
    pub theme_file: Option<String>,

    /// Whether the site's colors override the theme accents.
    pub site_colors: bool,

    /// `EnvFilter` directive for tracing output.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_origin: DEFAULT_BACKEND_ORIGIN.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            currency: DEFAULT_CURRENCY.to_string(),
            theme_name: None,
            theme_file: None,
            site_colors: true,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the plugin configuration map.
    ///
    /// Missing keys take their defaults. Invalid values are logged and also
    /// replaced by the default, so a typo never stops the plugin from loading.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let backend_origin = config
            .get("backend_origin")
            .map(|value| parse_origin(value))
            .map_or(defaults.backend_origin, |parsed| {
                or_default(parsed, DEFAULT_BACKEND_ORIGIN.to_string())
            });

        let request_timeout_secs = config
            .get("request_timeout")
            .map(|value| parse_timeout(value))
            .map_or(defaults.request_timeout_secs, |parsed| {
                or_default(parsed, DEFAULT_REQUEST_TIMEOUT_SECS)
            });

        let site_colors = config
            .get("site_colors")
            .map(|value| parse_bool("site_colors", value))
            .map_or(defaults.site_colors, |parsed| or_default(parsed, true));

        Self {
            backend_origin,
            request_timeout_secs,
            currency: config
                .get("currency")
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .unwrap_or(defaults.currency),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").map(|path| expand_tilde(path)),
            site_colors,
            trace_level: config.get("trace_level").cloned(),
        }
    }

    fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            backend_origin: self.backend_origin.clone(),
            currency: self.currency.clone(),
            site_colors: self.site_colors,
        }
    }
}

fn or_default<T>(parsed: Result<T>, default: T) -> T {
    parsed.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid configuration value, using default");
        default
    })
}

fn parse_origin(value: &str) -> Result<String> {
    let origin = value.trim().trim_end_matches('/');
    if origin.starts_with("http://") || origin.starts_with("https://") {
        Ok(origin.to_string())
    } else {
        Err(MenuboardError::Config(format!(
            "backend_origin must start with http:// or https://, got {value:?}"
        )))
    }
}

fn parse_timeout(value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs > 0.0)
        .ok_or_else(|| {
            MenuboardError::Config(format!(
                "request_timeout must be a positive number of seconds, got {value:?}"
            ))
        })
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(MenuboardError::Config(format!(
            "{key} must be true or false, got {value:?}"
        ))),
    }
}

/// Builds the initial application state: theme resolved, no data yet.
///
/// A `theme_file` that fails to load falls back to the named theme, and an
/// unknown theme name to the default.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(backend_origin = %config.backend_origin, "initializing menuboard plugin");

    let named_theme = || {
        config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    };

    let theme = config.theme_file.as_ref().map_or_else(named_theme, |theme_file| {
        Theme::from_file(theme_file).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file");
            named_theme()
        })
    });

    AppState::new(theme, config.display_options())
}
