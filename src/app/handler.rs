//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (keys, HTTP results, timers)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `NextCategory`, `PreviousCategory`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `Char`, `Backspace`, `Escape`
//! - **Images**: `OpenImage`, `LightboxNext`, `SelectThumbnail`, `NextProductImage`, ...
//! - **Data**: `Reload`, `Response`, `FetchFailed`, `RequestTimeout`, `PermissionsResult`
//!
//! A failed fetch never surfaces as an error: the menu falls back to the
//! built-in sample and the settings to their defaults.
//!
//! # Example
//!
//! ```rust
//! use menuboard::app::{handle_event, AppState, Event};
//! use menuboard::app::state::DisplayOptions;
//! use menuboard::ui::theme::Theme;
//!
//! let mut state = AppState::new(Theme::default(), DisplayOptions::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Reload)?;
//! assert!(should_render);
//! assert_eq!(actions.len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::{DataSource, InputMode, SearchFocus};
use crate::api::{decode_menu, decode_settings, Endpoint};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{sample_menu, FetchError, SiteSettings};

/// Events triggered by user input or the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection down by one dish (wraps to top).
    KeyDown,
    /// Moves selection up by one dish (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Selects the next chip of the category bar.
    NextCategory,
    PreviousCategory,

    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the filtered dishes (from typing mode).
    FocusResults,
    /// Leaves search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears the query and the category selection, back to normal mode.
    Escape,

    /// Opens the lightbox on the selected dish's image.
    OpenImage,
    LightboxNext,
    LightboxPrevious,
    CloseImage,
    /// Jumps to a zero-based thumbnail of the lightbox.
    SelectThumbnail(usize),
    /// Pages the selected dish's own images forward.
    NextProductImage,
    PreviousProductImage,
    /// Jumps to a zero-based image of the selected dish.
    SelectProductImage(usize),

    /// Fetches menu and settings again.
    Reload,

    /// Outcome of the web access permission request.
    ///
    /// Without it no request can succeed, so pending fetches fall back at once.
    PermissionsResult { granted: bool },

    /// An HTTP response for one of the endpoints.
    Response {
        endpoint: Endpoint,
        status: u16,
        body: Vec<u8>,
    },

    /// A request that failed before producing a response.
    FetchFailed {
        endpoint: Endpoint,
        error: FetchError,
    },

    /// The request timer fired; anything still pending has timed out.
    RequestTimeout,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI should re-render along with the actions to run in
/// order.
///
/// # Errors
///
/// Currently every event is handled infallibly; the `Result` keeps the
/// runtime's error path uniform.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::NextCategory | Event::PreviousCategory => {
            let forward = matches!(event, Event::NextCategory);
            state.filter.cycle_category(&state.categories, forward);
            tracing::debug!(
                selected_category = ?state.filter.selected_category,
                "category changed"
            );
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.filter.query.is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.filter.query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.filter.clear_query();
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }
            state.filter.push_char(*c);
            tracing::trace!(query = %state.filter.query, char = %c, "search query updated");
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }
            state.filter.pop_char();
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::Escape => {
            if state.lightbox.is_open() {
                state.close_lightbox();
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Normal;
            state.filter = crate::catalog::FilterState::default();
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::OpenImage => Ok((state.open_lightbox(), vec![])),
        Event::LightboxNext => {
            state.lightbox_next();
            Ok((state.lightbox.is_open(), vec![]))
        }
        Event::LightboxPrevious => {
            state.lightbox_previous();
            Ok((state.lightbox.is_open(), vec![]))
        }
        Event::CloseImage => {
            let was_open = state.lightbox.is_open();
            state.close_lightbox();
            Ok((was_open, vec![]))
        }
        Event::SelectThumbnail(index) => Ok((state.select_thumbnail(*index), vec![])),
        Event::NextProductImage => {
            state.carousel_next();
            Ok((true, vec![]))
        }
        Event::PreviousProductImage => {
            state.carousel_previous();
            Ok((true, vec![]))
        }
        Event::SelectProductImage(index) => Ok((state.select_product_image(*index), vec![])),
        Event::Reload => {
            let actions = reload(state);
            Ok((!actions.is_empty(), actions))
        }
        Event::PermissionsResult { granted: true } => {
            tracing::debug!("web access granted");
            let actions = reload(state);
            Ok((!actions.is_empty(), actions))
        }
        Event::PermissionsResult { granted: false } => {
            tracing::warn!("web access denied, using built-in menu");
            state.pending.clear();
            if state.menu_source == DataSource::Loading {
                fallback(state, Endpoint::Menu, &FetchError::PermissionDenied);
            }
            if state.settings_source == DataSource::Loading {
                fallback(state, Endpoint::Settings, &FetchError::PermissionDenied);
            }
            Ok((true, vec![]))
        }
        Event::Response {
            endpoint,
            status,
            body,
        } => {
            if !state.pending.remove(endpoint) {
                tracing::debug!(%endpoint, status, "ignoring late response");
                return Ok((false, vec![]));
            }

            match endpoint {
                Endpoint::Menu => match decode_menu(*status, body) {
                    Ok(categories) => state.install_menu(categories, DataSource::Live),
                    Err(error) => fallback(state, *endpoint, &error),
                },
                Endpoint::Settings => match decode_settings(*status, body) {
                    Ok(settings) => state.install_settings(settings, DataSource::Live),
                    Err(error) => fallback(state, *endpoint, &error),
                },
            }
            Ok((true, vec![]))
        }
        Event::FetchFailed { endpoint, error } => Ok((fail(state, *endpoint, error), vec![])),
        Event::RequestTimeout => {
            let timed_out: Vec<Endpoint> = state.pending.iter().copied().collect();
            for endpoint in &timed_out {
                fail(state, *endpoint, &FetchError::Timeout);
            }
            Ok((!timed_out.is_empty(), vec![]))
        }
    }
}

/// Marks every idle endpoint pending and returns the fetches plus the timer.
///
/// Endpoints that are already in flight are skipped; when nothing is left to
/// fetch no actions are returned.
fn reload(state: &mut AppState) -> Vec<Action> {
    let mut actions: Vec<Action> = Endpoint::ALL
        .iter()
        .filter(|endpoint| state.pending.insert(**endpoint))
        .map(|endpoint| Action::Fetch(*endpoint))
        .collect();

    if actions.is_empty() {
        tracing::debug!("reload ignored, requests already in flight");
        return actions;
    }

    tracing::info!(endpoints = actions.len(), "fetching menu data");
    actions.push(Action::StartRequestTimer);
    actions
}

/// Fails a pending request. Returns `false` when it was not pending.
fn fail(state: &mut AppState, endpoint: Endpoint, error: &FetchError) -> bool {
    if !state.pending.remove(&endpoint) {
        return false;
    }
    fallback(state, endpoint, error);
    true
}

fn fallback(state: &mut AppState, endpoint: Endpoint, error: &FetchError) {
    tracing::warn!(%endpoint, error = %error, "fetch failed, using fallback data");
    match endpoint {
        Endpoint::Menu => state.install_menu(sample_menu(), DataSource::Fallback),
        Endpoint::Settings => state.install_settings(SiteSettings::default(), DataSource::Fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::DisplayOptions;
    use crate::ui::theme::Theme;

    const MENU: &[u8] = br#"[
        {"id": 1, "name": "Grill", "products": [
            {"id": 1, "name": "Chicken Tikka", "price": 30, "images": ["tikka.png"]},
            {"id": 2, "name": "Lamb Chops", "price": 45, "images": []}
        ]},
        {"id": 2, "name": "Drinks", "products": [
            {"id": 3, "name": "Mint Tea", "price": 8, "images": ["tea.png"]}
        ]}
    ]"#;

    fn new_state() -> AppState {
        AppState::new(Theme::default(), DisplayOptions::default())
    }

    fn loaded_state() -> AppState {
        let mut state = new_state();
        handle_event(&mut state, &Event::Reload).unwrap();
        handle_event(
            &mut state,
            &Event::Response {
                endpoint: Endpoint::Menu,
                status: 200,
                body: MENU.to_vec(),
            },
        )
        .unwrap();
        state
    }

    fn type_query(state: &mut AppState, query: &str) {
        handle_event(state, &Event::SearchMode).unwrap();
        for c in query.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn reload_fetches_both_endpoints_and_arms_timer() {
        let mut state = new_state();
        let (render, actions) = handle_event(&mut state, &Event::Reload).unwrap();

        assert!(render);
        assert_eq!(
            actions,
            vec![
                Action::Fetch(Endpoint::Menu),
                Action::Fetch(Endpoint::Settings),
                Action::StartRequestTimer,
            ]
        );
        assert_eq!(state.pending.len(), 2);

        let (render, actions) = handle_event(&mut state, &Event::Reload).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn successful_menu_response_installs_live_data() {
        let state = loaded_state();
        assert_eq!(state.menu_source, DataSource::Live);
        assert_eq!(state.categories.len(), 2);
        assert!(!state.pending.contains(&Endpoint::Menu));
    }

    #[test]
    fn server_error_falls_back_to_sample_menu() {
        let mut state = new_state();
        handle_event(&mut state, &Event::Reload).unwrap();
        handle_event(
            &mut state,
            &Event::Response {
                endpoint: Endpoint::Menu,
                status: 503,
                body: b"unavailable".to_vec(),
            },
        )
        .unwrap();

        assert_eq!(state.menu_source, DataSource::Fallback);
        assert_eq!(state.categories, sample_menu());
    }

    #[test]
    fn malformed_settings_fall_back_to_defaults() {
        let mut state = new_state();
        handle_event(&mut state, &Event::Reload).unwrap();
        handle_event(
            &mut state,
            &Event::Response {
                endpoint: Endpoint::Settings,
                status: 200,
                body: b"not json".to_vec(),
            },
        )
        .unwrap();

        assert_eq!(state.settings_source, DataSource::Fallback);
        assert_eq!(state.settings, SiteSettings::default());
    }

    #[test]
    fn timeout_fails_only_pending_requests() {
        let mut state = loaded_state();
        let (render, _) = handle_event(&mut state, &Event::RequestTimeout).unwrap();

        assert!(render);
        assert_eq!(state.menu_source, DataSource::Live);
        assert_eq!(state.settings_source, DataSource::Fallback);
        assert!(state.pending.is_empty());

        let (render, _) = handle_event(&mut state, &Event::RequestTimeout).unwrap();
        assert!(!render);
    }

    #[test]
    fn late_response_after_timeout_is_ignored() {
        let mut state = new_state();
        handle_event(&mut state, &Event::Reload).unwrap();
        handle_event(&mut state, &Event::RequestTimeout).unwrap();

        let (render, _) = handle_event(
            &mut state,
            &Event::Response {
                endpoint: Endpoint::Menu,
                status: 200,
                body: MENU.to_vec(),
            },
        )
        .unwrap();

        assert!(!render);
        assert_eq!(state.menu_source, DataSource::Fallback);
    }

    #[test]
    fn denied_permission_falls_back_immediately() {
        let mut state = new_state();
        handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();

        assert_eq!(state.menu_source, DataSource::Fallback);
        assert_eq!(state.settings_source, DataSource::Fallback);
        assert!(state.pending.is_empty());
    }

    #[test]
    fn denied_permission_keeps_already_loaded_menu() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();

        assert_eq!(state.menu_source, DataSource::Live);
        assert_eq!(state.settings_source, DataSource::Fallback);
    }

    #[test]
    fn granted_permission_starts_the_first_fetch() {
        let mut state = new_state();
        let (render, actions) =
            handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();

        assert!(render);
        assert_eq!(actions.len(), 3);
        assert_eq!(state.pending.len(), 2);
    }

    #[test]
    fn typing_filters_and_escape_restores_everything() {
        let mut state = loaded_state();
        type_query(&mut state, "TEA");
        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.filtered[0].products[0].name, "Mint Tea");

        handle_event(&mut state, &Event::NextCategory).unwrap();
        handle_event(&mut state, &Event::Escape).unwrap();

        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(!state.filter.is_active());
        assert_eq!(state.filtered, state.categories);
    }

    #[test]
    fn characters_are_ignored_outside_search_typing() {
        let mut state = loaded_state();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(state.filter.query.is_empty());
    }

    #[test]
    fn focus_results_with_empty_query_returns_to_normal() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);

        type_query(&mut state, "lamb");
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
    }

    #[test]
    fn category_cycling_narrows_the_menu() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::NextCategory).unwrap();
        assert_eq!(state.filter.selected_category, Some(1));
        assert_eq!(state.filtered.len(), 1);

        handle_event(&mut state, &Event::PreviousCategory).unwrap();
        assert_eq!(state.filter.selected_category, None);
        assert_eq!(state.filtered.len(), 2);
    }

    #[test]
    fn escape_closes_lightbox_before_clearing_search() {
        let mut state = loaded_state();
        type_query(&mut state, "chicken");
        handle_event(&mut state, &Event::OpenImage).unwrap();
        assert!(state.lightbox.is_open());

        handle_event(&mut state, &Event::Escape).unwrap();
        assert!(!state.lightbox.is_open());
        assert_eq!(state.filter.query, "chicken");
    }

    #[test]
    fn thumbnail_selection_is_bounds_checked() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::OpenImage).unwrap();

        let (render, _) = handle_event(&mut state, &Event::SelectThumbnail(3)).unwrap();
        assert!(!render);
        assert_eq!(state.lightbox.cursor(), Some(0));
    }

    #[test]
    fn open_image_without_picture_does_nothing() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::KeyDown).unwrap();
        let (render, _) = handle_event(&mut state, &Event::OpenImage).unwrap();
        assert!(!render);
        assert!(!state.lightbox.is_open());
    }

    #[test]
    fn transport_failure_falls_back_once() {
        let mut state = new_state();
        handle_event(&mut state, &Event::Reload).unwrap();

        let failed = Event::FetchFailed {
            endpoint: Endpoint::Menu,
            error: FetchError::Transport("connection refused".to_string()),
        };
        let (render, _) = handle_event(&mut state, &failed).unwrap();
        assert!(render);
        assert_eq!(state.menu_source, DataSource::Fallback);

        let (render, _) = handle_event(&mut state, &failed).unwrap();
        assert!(!render);
    }

    #[test]
    fn close_focus_hides_plugin() {
        let mut state = new_state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
