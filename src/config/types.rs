use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub deep_link: DeepLinkConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
}

/// Where the surfaces read their snapshot from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON file holding the shared key/value blob written by the host app.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Formatting defaults for surface text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency code used when the store carries none (default: "USD").
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

/// Private deep-link scheme shared by tap targets and the router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeepLinkConfig {
    /// URI scheme recognized by the router (default: "homewidget").
    #[serde(default = "default_scheme")]
    pub scheme: String,
}

/// Parameters handed to the speech capability on every invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// Recognition language tag (default: "en-US").
    #[serde(default = "default_language")]
    pub language: String,
    /// Prompt shown by the capability while listening.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_scheme() -> String {
    "homewidget".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_prompt() -> String {
    "Say something like \"20 for groceries\"".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
        }
    }
}

impl Default for DeepLinkConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
        }
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            prompt: default_prompt(),
        }
    }
}
