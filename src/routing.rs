//! Deep-link routing from surface tap targets into the application.
//!
//! Only the private scheme is recognized. Anything else, and any unknown
//! host under the private scheme, falls through to the application's own
//! default route.

use serde::Serialize;

use crate::config::DeepLinkConfig;

const VOICE_ADD_HOST: &str = "quick_voice_add";
const DASHBOARD_HOST: &str = "open_dashboard";

/// Logical destination selected by a deep link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteTarget {
    VoiceAdd,
    Dashboard,
    /// Let the application pick its default route.
    Default,
}

impl RouteTarget {
    /// Application route path, `None` for [`RouteTarget::Default`].
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Self::VoiceAdd => Some("/voice-add"),
            Self::Dashboard => Some("/dashboard"),
            Self::Default => None,
        }
    }

    /// URI host that selects this target.
    pub fn host(&self) -> Option<&'static str> {
        match self {
            Self::VoiceAdd => Some(VOICE_ADD_HOST),
            Self::Dashboard => Some(DASHBOARD_HOST),
            Self::Default => None,
        }
    }
}

/// Scheme and host of a deep-link URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    pub scheme: String,
    pub host: String,
}

impl DeepLink {
    /// Splits `scheme://host[:port][/path][?query][#fragment]`.
    ///
    /// The scheme is lowercased. Returns `None` when there is no valid
    /// `scheme://` prefix.
    pub fn parse(uri: &str) -> Option<Self> {
        let (scheme, rest) = uri.trim().split_once("://")?;
        if !is_valid_scheme(scheme) {
            return None;
        }

        let authority = rest
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default();
        let authority = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
        let host = authority.split_once(':').map_or(authority, |(h, _)| h);

        Some(Self {
            scheme: scheme.to_ascii_lowercase(),
            host: host.to_string(),
        })
    }

    /// Tap-target URI for `target`, e.g. `homewidget://open_dashboard`.
    pub fn for_target(scheme: &str, target: RouteTarget) -> Option<String> {
        target.host().map(|host| format!("{scheme}://{host}"))
    }
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Maps deep links under one private scheme to route targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinkRouter {
    scheme: String,
}

impl DeepLinkRouter {
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into().to_ascii_lowercase(),
        }
    }

    pub fn from_config(config: &DeepLinkConfig) -> Self {
        Self::new(config.scheme.as_str())
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Resolves a scheme/host pair. Schemes compare case-insensitively.
    pub fn route(&self, scheme: &str, host: &str) -> RouteTarget {
        if !scheme.eq_ignore_ascii_case(&self.scheme) {
            return RouteTarget::Default;
        }

        match host {
            VOICE_ADD_HOST => RouteTarget::VoiceAdd,
            DASHBOARD_HOST => RouteTarget::Dashboard,
            _ => RouteTarget::Default,
        }
    }

    /// Resolves a full URI; unparsable URIs fall through to the default.
    pub fn route_uri(&self, uri: &str) -> RouteTarget {
        match DeepLink::parse(uri) {
            Some(link) => self.route(&link.scheme, &link.host),
            None => RouteTarget::Default,
        }
    }

    /// Route path the application should open for `uri`, or `fallback`.
    pub fn initial_route(&self, uri: Option<&str>, fallback: &str) -> String {
        let target = uri.map_or(RouteTarget::Default, |uri| self.route_uri(uri));
        tracing::debug!(?uri, ?target, "Resolved initial route");
        target.path().unwrap_or(fallback).to_string()
    }

    /// Tap-target URI for `target` under this router's scheme.
    pub fn link_for(&self, target: RouteTarget) -> Option<String> {
        DeepLink::for_target(&self.scheme, target)
    }
}

impl Default for DeepLinkRouter {
    fn default() -> Self {
        Self::from_config(&DeepLinkConfig::default())
    }
}
