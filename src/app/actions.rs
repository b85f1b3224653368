//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler stays pure: it mutates [`AppState`](crate::app::AppState)
//! and returns a list of actions. `main.rs` turns those into Zellij host calls.
//!
//! # Example
//!
//! ```rust
//! use menuboard::app::Action;
//! use menuboard::api::Endpoint;
//!
//! let actions = vec![
//!     Action::Fetch(Endpoint::Menu),
//!     Action::Fetch(Endpoint::Settings),
//!     Action::StartRequestTimer,
//! ];
//! ```

use crate::api::Endpoint;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues an HTTP GET for the endpoint via `web_request`.
    ///
    /// The response comes back later as a `WebRequestResult` event.
    Fetch(Endpoint),

    /// Arms the host timer that bounds how long pending requests may take.
    StartRequestTimer,
}
