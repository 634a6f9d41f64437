//! Configuration loading for surfaces, deep links and voice capture.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, DeepLinkConfig, DisplayConfig, StoreConfig, VoiceConfig};
