use crate::format;

use super::view_model::ViewModel;
use super::SurfaceContext;

pub const TREND_VALUE: &str = "trend_value";
pub const TREND_ICON: &str = "trend_icon";

pub(super) const SLOTS: &[&str] = &[TREND_VALUE, TREND_ICON];

pub(super) fn project(ctx: &SurfaceContext<'_>, view: &mut ViewModel) {
    // no trend yet: the blank layout stays as is
    let Some(trend) = ctx.snapshot.expense_trend else {
        return;
    };

    let color = format::trend_color(trend.is_up);
    view.set_text(TREND_VALUE, format::percent_with_sign(trend.monthly_change))
        .set_color(TREND_VALUE, color)
        .set_glyph(TREND_ICON, format::trend_glyph(trend.is_up))
        .set_color(TREND_ICON, color);
}
