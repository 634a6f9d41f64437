use crate::format;
use crate::routing::RouteTarget;
use crate::visibility::{StatKey, VisibleStats};

use super::view_model::{TapTarget, ViewModel};
use super::SurfaceContext;

pub const TOTAL: &str = "total";
pub const TOP_STORE: &str = "top_store";
pub const RECEIPTS_COUNT: &str = "receipts_count";
pub const AVERAGE_PER_RECEIPT: &str = "average_per_receipt";
pub const DAYS_WITH_EXPENSES: &str = "days_with_expenses";
pub const TOTAL_ITEMS: &str = "total_items";
/// Whole-surface tap area.
pub const ROOT: &str = "root";
pub const MIC_BUTTON: &str = "mic_button";

pub(super) const SLOTS: &[&str] = &[
    TOTAL,
    TOP_STORE,
    RECEIPTS_COUNT,
    AVERAGE_PER_RECEIPT,
    DAYS_WITH_EXPENSES,
    TOTAL_ITEMS,
    ROOT,
    MIC_BUTTON,
];

fn stat_slot(key: StatKey) -> &'static str {
    match key {
        StatKey::TotalThisMonth => TOTAL,
        StatKey::TopStore => TOP_STORE,
        StatKey::ReceiptsCount => RECEIPTS_COUNT,
        StatKey::AveragePerReceipt => AVERAGE_PER_RECEIPT,
        StatKey::DaysWithExpenses => DAYS_WITH_EXPENSES,
        StatKey::TotalItems => TOTAL_ITEMS,
    }
}

fn stat_text(ctx: &SurfaceContext<'_>, key: StatKey) -> String {
    let snapshot = ctx.snapshot;
    match key {
        StatKey::TotalThisMonth => format::currency(snapshot.total_this_month, ctx.currency),
        StatKey::TopStore => format!("Top: {}", snapshot.top_store),
        StatKey::ReceiptsCount => format!("Receipts: {}", format::count(snapshot.receipts_count)),
        StatKey::AveragePerReceipt => format!(
            "Avg: {}",
            format::currency(snapshot.average_per_receipt, ctx.currency)
        ),
        StatKey::DaysWithExpenses => format!("Days: {}", format::count(snapshot.days_with_expenses)),
        StatKey::TotalItems => format!("Items: {}", format::count(snapshot.total_items)),
    }
}

pub(super) fn project(ctx: &SurfaceContext<'_>, view: &mut ViewModel) {
    let fallback = VisibleStats::default();
    let visible = ctx.visible.unwrap_or(&fallback);

    for &key in StatKey::all() {
        let slot = stat_slot(key);
        if visible.contains(key) {
            view.set_visible(slot, true).set_text(slot, stat_text(ctx, key));
        } else {
            view.set_visible(slot, false);
        }
    }

    for (slot, target) in [(ROOT, RouteTarget::Dashboard), (MIC_BUTTON, RouteTarget::VoiceAdd)] {
        if let Some(uri) = ctx.router.link_for(target) {
            view.set_tap(slot, TapTarget { target, uri });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::DeepLinkRouter;
    use crate::snapshot::Snapshot;
    use crate::surface::SurfaceKind;

    fn render(snapshot: &Snapshot, visible: &VisibleStats) -> ViewModel {
        let router = DeepLinkRouter::default();
        let ctx = SurfaceContext {
            snapshot,
            visible: Some(visible),
            currency: "USD",
            router: &router,
        };
        let mut view = ViewModel::blank(SurfaceKind::PrimarySummary);
        project(&ctx, &mut view);
        view
    }

    fn sample() -> Snapshot {
        Snapshot {
            total_this_month: 1234.5,
            top_store: "Acme".into(),
            receipts_count: 12,
            average_per_receipt: 102.875,
            days_with_expenses: 9,
            total_items: 1040,
            ..Snapshot::default()
        }
    }

    #[test]
    fn all_stats_visible() {
        let visible = VisibleStats::new(StatKey::all().iter().copied());
        let view = render(&sample(), &visible);

        assert_eq!(view.text(TOTAL), Some("USD 1,234.50"));
        assert_eq!(view.text(TOP_STORE), Some("Top: Acme"));
        assert_eq!(view.text(RECEIPTS_COUNT), Some("Receipts: 12"));
        assert_eq!(view.text(AVERAGE_PER_RECEIPT), Some("Avg: USD 102.88"));
        assert_eq!(view.text(DAYS_WITH_EXPENSES), Some("Days: 9"));
        assert_eq!(view.text(TOTAL_ITEMS), Some("Items: 1,040"));
        for &key in StatKey::all() {
            assert!(view.is_visible(stat_slot(key)));
        }
    }

    #[test]
    fn hidden_stats_carry_no_text() {
        let visible = VisibleStats::new([StatKey::TopStore]);
        let view = render(&sample(), &visible);

        assert!(view.is_visible(TOP_STORE));
        assert!(!view.is_visible(TOTAL));
        assert_eq!(view.text(TOTAL), None);
        assert!(!view.is_visible(TOTAL_ITEMS));
    }

    #[test]
    fn empty_set_hides_every_stat() {
        let view = render(&sample(), &VisibleStats::none());
        for &key in StatKey::all() {
            assert!(!view.is_visible(stat_slot(key)));
        }
        // tap targets stay
        assert!(view.slot(ROOT).and_then(|s| s.tap.as_ref()).is_some());
    }

    #[test]
    fn tap_targets_open_dashboard_and_voice_add() {
        let view = render(&Snapshot::default(), &VisibleStats::default());

        let root = view.slot(ROOT).and_then(|s| s.tap.clone()).expect("root tap");
        assert_eq!(root.target, RouteTarget::Dashboard);
        assert_eq!(root.uri, "homewidget://open_dashboard");

        let mic = view.slot(MIC_BUTTON).and_then(|s| s.tap.clone()).expect("mic tap");
        assert_eq!(mic.target, RouteTarget::VoiceAdd);
        assert_eq!(mic.uri, "homewidget://quick_voice_add");
    }

    #[test]
    fn defaults_render_placeholders() {
        let view = render(&Snapshot::default(), &VisibleStats::default());
        assert_eq!(view.text(TOTAL), Some("USD 0.00"));
        assert_eq!(view.text(TOP_STORE), Some("Top: —"));
    }
}
