use crate::format::{self, PROGRESS_MAX};

use super::view_model::{Progress, ViewModel};
use super::SurfaceContext;

pub const GOAL_TITLE: &str = "goal_title";
pub const GOAL_PROGRESS: &str = "goal_progress";
pub const PROGRESS_LABEL: &str = "progress_label";
pub const AMOUNT: &str = "amount";

pub(super) const SLOTS: &[&str] = &[GOAL_TITLE, GOAL_PROGRESS, PROGRESS_LABEL, AMOUNT];

pub(super) fn project(ctx: &SurfaceContext<'_>, view: &mut ViewModel) {
    let Some(goal) = &ctx.snapshot.savings_goal else {
        return;
    };

    // label shows the real percent, the bar is capped at its max
    let percent = format::progress_percent(goal.current_amount, goal.target_amount);
    let amount = format!(
        "{} / {}",
        format::currency(goal.current_amount, ctx.currency),
        format::currency(goal.target_amount, ctx.currency)
    );

    view.set_text(GOAL_TITLE, goal.title.as_str())
        .set_progress(
            GOAL_PROGRESS,
            Progress {
                value: percent.min(PROGRESS_MAX),
                max: PROGRESS_MAX,
            },
        )
        .set_text(PROGRESS_LABEL, format!("{percent}%"))
        .set_text(AMOUNT, amount);
}
