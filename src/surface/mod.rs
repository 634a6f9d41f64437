//! Home-screen surfaces projected from the host's latest snapshot.
//!
//! # Architecture
//!
//! ```text
//! SnapshotStore ──→ Projector ──→ ViewModel ──→ RenderSink
//!                      │
//!              SurfaceKind (slots + projection)
//! ```
//!
//! - `view_model.rs` - Slot instructions for one refresh
//! - `primary.rs`, `trend.rs`, `savings.rs` - Per-surface projections
//! - `projector.rs` - Store → view-model pipeline shared by all surfaces
//! - `sink.rs` - Where finished view-models go
//! - `widget.rs` - Terminal preview rendering

mod primary;
mod projector;
mod savings;
mod sink;
mod trend;
mod view_model;
mod widget;

use std::fmt;

use serde::Serialize;

use crate::snapshot::Snapshot;
use crate::routing::DeepLinkRouter;
use crate::visibility::VisibleStats;

pub use projector::Projector;
pub use sink::{MemorySink, RenderSink};
pub use view_model::{Progress, Slot, SlotState, TapTarget, ViewModel};
pub use widget::SurfaceWidget;

pub mod slots {
    //! Slot ids per surface.
    pub use super::primary::{
        AVERAGE_PER_RECEIPT, DAYS_WITH_EXPENSES, MIC_BUTTON, RECEIPTS_COUNT, ROOT, TOP_STORE,
        TOTAL, TOTAL_ITEMS,
    };
    pub use super::savings::{AMOUNT, GOAL_PROGRESS, GOAL_TITLE, PROGRESS_LABEL};
    pub use super::trend::{TREND_ICON, TREND_VALUE};
}

/// Independently refreshed surface types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SurfaceKind {
    #[serde(rename = "summary")]
    PrimarySummary,
    #[serde(rename = "expense_trend")]
    ExpenseTrend,
    #[serde(rename = "savings_goal")]
    SavingsGoal,
}

impl SurfaceKind {
    /// Stable id used by hosts and the CLI.
    pub fn id(&self) -> &'static str {
        match self {
            Self::PrimarySummary => "summary",
            Self::ExpenseTrend => "expense_trend",
            Self::SavingsGoal => "savings_goal",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::PrimarySummary => "This Month",
            Self::ExpenseTrend => "Expense Trend",
            Self::SavingsGoal => "Savings Goal",
        }
    }

    pub fn all() -> &'static [SurfaceKind] {
        &[Self::PrimarySummary, Self::ExpenseTrend, Self::SavingsGoal]
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.id() == s)
    }

    /// Fixed slot set of the surface layout, in layout order.
    pub fn slots(&self) -> &'static [&'static str] {
        match self {
            Self::PrimarySummary => primary::SLOTS,
            Self::ExpenseTrend => trend::SLOTS,
            Self::SavingsGoal => savings::SLOTS,
        }
    }

    /// Whether the surface reads the visible-stats settings.
    pub fn uses_visibility(&self) -> bool {
        matches!(self, Self::PrimarySummary)
    }

    /// Writes this surface's instructions into a blank view-model.
    pub(crate) fn project(&self, ctx: &SurfaceContext<'_>, view: &mut ViewModel) {
        match self {
            Self::PrimarySummary => primary::project(ctx, view),
            Self::ExpenseTrend => trend::project(ctx, view),
            Self::SavingsGoal => savings::project(ctx, view),
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Inputs shared by every projection.
pub(crate) struct SurfaceContext<'a> {
    pub snapshot: &'a Snapshot,
    /// Only resolved for surfaces that use it.
    pub visible: Option<&'a VisibleStats>,
    pub currency: &'a str,
    pub router: &'a DeepLinkRouter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for kind in SurfaceKind::all() {
            assert_eq!(SurfaceKind::parse(kind.id()), Some(*kind));
            assert_eq!(kind.to_string(), kind.id());
        }
        assert_eq!(SurfaceKind::parse("weather"), None);
    }

    #[test]
    fn slot_ids_are_unique_per_surface() {
        for kind in SurfaceKind::all() {
            let mut ids = kind.slots().to_vec();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), kind.slots().len(), "{kind}");
        }
    }

    #[test]
    fn only_summary_reads_visibility() {
        assert!(SurfaceKind::PrimarySummary.uses_visibility());
        assert!(!SurfaceKind::ExpenseTrend.uses_visibility());
        assert!(!SurfaceKind::SavingsGoal.uses_visibility());
    }
}
