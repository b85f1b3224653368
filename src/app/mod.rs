//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the catalog, gallery and api
//! layers.
//!
//! ```text
//! Keys / HTTP results / Timers → Events → Event Handler → State Mutations → Actions
//!                                              ↑                               ↓
//!                                              └──── web_request, set_timeout ─┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and fetch fallback decisions
//! - [`modes`]: Input mode and data source types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{DataSource, InputMode, SearchFocus};
pub use state::{AppState, DisplayOptions};
