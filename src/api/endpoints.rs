//! Backend endpoints and request routing.
//!
//! Requests go out through Zellij's `web_request` host call and come back as
//! separate events. Each request carries a context entry naming its endpoint
//! so the response can be matched up again.

use std::collections::BTreeMap;
use std::fmt;
use zellij_tile::prelude::HttpVerb;

/// Context key identifying which endpoint a response belongs to.
pub const CONTEXT_KEY: &str = "endpoint";

/// Path under the backend origin where the REST API lives.
const API_PREFIX: &str = "/api";

/// The two resources the plugin reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Endpoint {
    Menu,
    Settings,
}

impl Endpoint {
    pub const ALL: [Self; 2] = [Self::Menu, Self::Settings];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Menu => "/menu",
            Self::Settings => "/settings",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Settings => "settings",
        }
    }

    #[must_use]
    pub const fn verb(self) -> HttpVerb {
        HttpVerb::Get
    }

    /// Full request URL, e.g. `http://localhost:5000/api/menu`.
    #[must_use]
    pub fn url(self, origin: &str) -> String {
        format!("{}{API_PREFIX}{}", origin.trim_end_matches('/'), self.path())
    }

    #[must_use]
    pub fn headers() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Accept".to_string(), "application/json".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ])
    }

    /// Context map attached to the outgoing request.
    #[must_use]
    pub fn context(self) -> BTreeMap<String, String> {
        BTreeMap::from([(CONTEXT_KEY.to_string(), self.name().to_string())])
    }

    /// Recovers the endpoint from a response's context map.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        match context.get(CONTEXT_KEY).map(String::as_str) {
            Some("menu") => Some(Self::Menu),
            Some("settings") => Some(Self::Settings),
            _ => None,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_api_urls() {
        assert_eq!(
            Endpoint::Menu.url("http://localhost:5000"),
            "http://localhost:5000/api/menu"
        );
        assert_eq!(
            Endpoint::Settings.url("https://menu.example.com/"),
            "https://menu.example.com/api/settings"
        );
    }

    #[test]
    fn context_round_trips_every_endpoint() {
        for endpoint in Endpoint::ALL {
            assert_eq!(Endpoint::from_context(&endpoint.context()), Some(endpoint));
        }
        assert_eq!(Endpoint::from_context(&BTreeMap::new()), None);
    }
}
