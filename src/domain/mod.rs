//! Domain layer for the Menuboard plugin.
//!
//! Core types independent of Zellij APIs: the menu model, site settings, the
//! built-in sample data, and the error types.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`menu`]: Categories and products
//! - [`settings`]: Site branding and colors
//! - [`sample`]: Fallback menu used when the backend is unreachable

pub mod error;
pub mod menu;
pub mod sample;
pub mod settings;

pub use error::{FetchError, MenuboardError, Result};
pub use menu::{Category, CategoryId, Product, ProductId};
pub use sample::sample_menu;
pub use settings::SiteSettings;
