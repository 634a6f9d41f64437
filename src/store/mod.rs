//! Read side of the shared key/value blob written by the host application.
//!
//! The host app owns this data and writes it out of band. Surfaces only ever
//! read the three keys below; a missing key is the same as an absent value.

mod file;
mod memory;

pub use file::{FileStore, StoreError};
pub use memory::MemoryStore;

/// Keys the host application writes for the surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// Summary JSON document.
    Summary,
    /// Settings JSON document (visible stats).
    Settings,
    /// Currency code string.
    CurrencyCode,
}

impl StoreKey {
    /// Stable key under which the host writes the value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "widget_summary",
            Self::Settings => "widget_settings",
            Self::CurrencyCode => "currency_code",
        }
    }

    pub fn all() -> &'static [StoreKey] {
        &[Self::Summary, Self::Settings, Self::CurrencyCode]
    }
}

/// Read-only view of the shared blob.
pub trait SnapshotStore {
    fn read(&self, key: StoreKey) -> Option<String>;

    /// Currency code, falling back to `default` when missing or blank.
    fn currency_code(&self, default: &str) -> String {
        self.read(StoreKey::CurrencyCode)
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| default.to_string())
    }
}
