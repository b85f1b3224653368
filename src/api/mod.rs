//! Backend access layer.
//!
//! The plugin runtime performs the actual HTTP calls; this module knows the
//! endpoints, how to decode their responses, and how to turn stored asset
//! paths into URLs.
//!
//! - [`endpoints`]: URLs, headers and request context for each endpoint
//! - [`decode`]: Response status/body to typed data or [`FetchError`](crate::domain::FetchError)
//! - [`assets`]: Image and logo URL resolution

pub mod assets;
pub mod decode;
pub mod endpoints;

pub use assets::resolve_asset_url;
pub use decode::{decode_menu, decode_settings};
pub use endpoints::Endpoint;
