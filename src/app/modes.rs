//! Input mode and data-source state types.
//!
//! # State Machine
//!
//! The plugin is in one of two input modes:
//! - **Normal**: navigation, category switching, opening images
//! - **Search**: typing a query or moving through the matching dishes
//!
//! The lightbox is tracked separately (see [`crate::gallery::Lightbox`]); while
//! it is open it captures navigation keys regardless of the input mode.

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keystrokes edit the query.
    Typing,
    /// Keystrokes move through the filtered dishes; `/` returns to typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search(SearchFocus),
}

/// Where the currently displayed data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// No response yet.
    Loading,
    /// Decoded from a backend response.
    Live,
    /// Built-in defaults used because the fetch failed.
    Fallback,
}
