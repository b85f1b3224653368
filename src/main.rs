//! Zellij plugin wrapper and entry point.
//!
//! The thin layer between the menuboard library and the Zellij host: it
//! translates host events into library [`Event`]s and library [`Action`]s into
//! host calls. Everything else lives in the library.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `WebRequestResult`, Timer and permission events
//! 3. **Permission granted**: First fetch of menu and settings, request timer armed
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `WebRequestResult` → `Event::Response` (or `Event::FetchFailed` when the
//!   request never reached the backend), routed by the `endpoint` context key
//! - `Timer` → `Event::RequestTimeout` once the last armed timer fires
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! Normal mode and search results:
//! - `j`/`Down`, `k`/`Up`: Move through dishes
//! - `Tab` / `Shift+Tab`: Next / previous category
//! - `Enter`: Open image viewer
//! - `[` / `]`: Previous / next photo of the selected dish, `1`-`9` to jump
//! - `/`: Search (or back to the query from the results)
//! - `r`: Reload
//! - `Esc`: Exit search, or clear the filter
//! - `q`: Close plugin
//!
//! Typing a query:
//! - Characters edit the query, `Backspace` deletes
//! - `Enter`: Move focus to the results
//! - `Esc`: Exit search
//!
//! Image viewer:
//! - `l`/`Right`, `h`/`Left`: Next / previous dish image
//! - `1`-`9`: Jump to thumbnail
//! - `Esc`/`q`: Close viewer

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use menuboard::api::Endpoint;
use menuboard::domain::FetchError;
use menuboard::{handle_event, Action, Config, Event, InputMode, SearchFocus};

register_plugin!(State);

struct State {
    app: menuboard::AppState,

    backend_origin: String,

    request_timeout_secs: f64,

    /// Timers armed by `StartRequestTimer` that have not fired yet.
    armed_timers: usize,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: menuboard::initialize(&default_config),
            backend_origin: default_config.backend_origin,
            request_timeout_secs: default_config.request_timeout_secs,
            armed_timers: 0,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        menuboard::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            backend_origin = %config.backend_origin,
            request_timeout_secs = config.request_timeout_secs,
            "parsed configuration"
        );
        self.app = menuboard::initialize(&config);
        self.backend_origin.clone_from(&config.backend_origin);
        self.request_timeout_secs = config.request_timeout_secs;

        request_permission(&[
            PermissionType::WebAccess,
            PermissionType::ReadApplicationState,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => match self.map_timer_event() {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Event::PermissionsResult {
                    granted: matches!(status, PermissionStatus::Granted),
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        menuboard::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        if self.app.lightbox.is_open() {
            return Self::map_lightbox_key(key);
        }

        if key.bare_key == BareKey::Tab {
            return Some(if key.has_modifiers(&[KeyModifier::Shift]) {
                Event::PreviousCategory
            } else {
                Event::NextCategory
            });
        }

        if self.app.input_mode == InputMode::Search(SearchFocus::Typing) {
            return Some(match key.bare_key {
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::FocusResults,
                BareKey::Backspace => Event::Backspace,
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            });
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::OpenImage,
            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => Event::ExitSearch,
                InputMode::Normal => Event::Escape,
            },
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
            },
            BareKey::Char(']') => Event::NextProductImage,
            BareKey::Char('[') => Event::PreviousProductImage,
            BareKey::Char('r') => Event::Reload,
            BareKey::Char('q') if self.app.input_mode == InputMode::Normal => Event::CloseFocus,
            BareKey::Char(c) => Event::SelectProductImage(digit_index(c)?),
            _ => return None,
        })
    }

    fn map_lightbox_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Right | BareKey::Char('l') => Event::LightboxNext,
            BareKey::Left | BareKey::Char('h') => Event::LightboxPrevious,
            BareKey::Esc | BareKey::Char('q') => Event::CloseImage,
            BareKey::Char(c) => Event::SelectThumbnail(digit_index(c)?),
            _ => return None,
        })
    }

    fn map_web_request_result(
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(endpoint) = Endpoint::from_context(context) else {
            tracing::debug!(status, "web request result without endpoint context");
            return None;
        };

        tracing::debug!(%endpoint, status, body_len = body.len(), "web request result");

        if (100..600).contains(&status) {
            Some(Event::Response {
                endpoint,
                status,
                body: body.to_vec(),
            })
        } else {
            Some(Event::FetchFailed {
                endpoint,
                error: FetchError::Transport(String::from_utf8_lossy(body).into_owned()),
            })
        }
    }

    /// Only the most recently armed timer counts; earlier ones belong to
    /// requests that already finished.
    fn map_timer_event(&mut self) -> Option<Event> {
        self.armed_timers = self.armed_timers.saturating_sub(1);
        (self.armed_timers == 0).then_some(Event::RequestTimeout)
    }

    #[tracing::instrument(skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch(endpoint) => {
                let url = endpoint.url(&self.backend_origin);
                tracing::debug!(%endpoint, url = %url, "issuing web request");
                web_request(
                    url,
                    endpoint.verb(),
                    Endpoint::headers(),
                    vec![],
                    endpoint.context(),
                );
            }
            Action::StartRequestTimer => {
                self.armed_timers += 1;
                set_timeout(self.request_timeout_secs);
            }
        }
    }
}

/// `'1'..='9'` as a zero-based index.
fn digit_index(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(d @ 1..=9) => usize::try_from(d - 1).ok(),
        _ => None,
    }
}
