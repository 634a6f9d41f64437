//! Which summary stats the user chose to show on the primary surface.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::snapshot::parse_object;

/// Settings field holding the enabled stat keys.
pub const ENABLED_STATS_FIELD: &str = "enabledStats";

/// A stat the primary surface can show.
///
/// The `as_str()` value is what the host writes into the settings document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatKey {
    TotalThisMonth,
    TopStore,
    ReceiptsCount,
    AveragePerReceipt,
    DaysWithExpenses,
    TotalItems,
}

impl StatKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TotalThisMonth => "totalThisMonth",
            Self::TopStore => "topStore",
            Self::ReceiptsCount => "receiptsCount",
            Self::AveragePerReceipt => "averagePerReceipt",
            Self::DaysWithExpenses => "daysWithExpenses",
            Self::TotalItems => "totalItems",
        }
    }

    /// All variants, in display order.
    pub fn all() -> &'static [StatKey] {
        &[
            Self::TotalThisMonth,
            Self::TopStore,
            Self::ReceiptsCount,
            Self::AveragePerReceipt,
            Self::DaysWithExpenses,
            Self::TotalItems,
        ]
    }

    /// Unknown keys return `None` so newer hosts don't break older surfaces.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|key| key.as_str() == s)
    }
}

/// Set of stats enabled for display. Only membership matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleStats(BTreeSet<StatKey>);

impl VisibleStats {
    pub fn new(keys: impl IntoIterator<Item = StatKey>) -> Self {
        Self(keys.into_iter().collect())
    }

    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, key: StatKey) -> bool {
        self.0.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = StatKey> + '_ {
        self.0.iter().copied()
    }
}

impl Default for VisibleStats {
    /// Total and top store, used whenever the user never chose.
    fn default() -> Self {
        Self::new([StatKey::TotalThisMonth, StatKey::TopStore])
    }
}

/// Decodes the settings document into the enabled stats.
///
/// Absent or unreadable settings (or a missing array) give the default pair.
/// An array that is present is honored as-is after dropping unknown tokens,
/// so an explicitly empty array shows nothing.
pub fn resolve(settings_raw: Option<&str>) -> VisibleStats {
    let Some(obj) = settings_raw.and_then(parse_object) else {
        return VisibleStats::default();
    };

    let Some(entries) = obj.get(ENABLED_STATS_FIELD).and_then(Value::as_array) else {
        return VisibleStats::default();
    };

    let keys = entries.iter().filter_map(|entry| {
        let token = entry.as_str()?;
        let key = StatKey::parse(token);
        if key.is_none() {
            tracing::debug!(token, "Ignoring unknown stat key");
        }
        key
    });

    VisibleStats::new(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_keys_roundtrip_through_names() {
        for key in StatKey::all() {
            assert_eq!(StatKey::parse(key.as_str()), Some(*key));
        }
        assert_eq!(StatKey::parse("netWorth"), None);
    }

    #[test]
    fn absent_settings_use_default_pair() {
        let expected = VisibleStats::new([StatKey::TotalThisMonth, StatKey::TopStore]);
        assert_eq!(resolve(None), expected);
        assert_eq!(resolve(Some("garbage")), expected);
        assert_eq!(resolve(Some("{}")), expected);
        assert_eq!(resolve(Some(r#"{"theme": "dark"}"#)), expected);
        assert_eq!(resolve(Some(r#"{"enabledStats": "totalItems"}"#)), expected);
    }

    #[test]
    fn explicit_empty_array_shows_nothing() {
        let visible = resolve(Some(r#"{"enabledStats": []}"#));
        assert!(visible.is_empty());
    }

    #[test]
    fn unknown_tokens_are_dropped() {
        let visible = resolve(Some(
            r#"{"enabledStats": ["totalItems", "netWorth", 3, "receiptsCount"]}"#,
        ));
        assert_eq!(
            visible,
            VisibleStats::new([StatKey::TotalItems, StatKey::ReceiptsCount])
        );
    }

    #[test]
    fn only_unknown_tokens_is_empty_not_default() {
        let visible = resolve(Some(r#"{"enabledStats": ["netWorth"]}"#));
        assert_eq!(visible, VisibleStats::none());
    }

    #[test]
    fn duplicates_collapse() {
        let visible = resolve(Some(r#"{"enabledStats": ["topStore", "topStore"]}"#));
        assert_eq!(visible.iter().collect::<Vec<_>>(), vec![StatKey::TopStore]);
    }
}
