/// Placeholder shown for string fields the host did not provide.
pub const PLACEHOLDER: &str = "—";

/// Title used when a savings goal carries none.
pub const DEFAULT_GOAL_TITLE: &str = "Goal";

/// Latest monthly summary published by the host application.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub total_this_month: f64,
    pub top_store: String,
    pub receipts_count: i64,
    pub average_per_receipt: f64,
    pub days_with_expenses: i64,
    pub total_items: i64,
    pub expense_trend: Option<ExpenseTrend>,
    pub savings_goal: Option<SavingsGoal>,
}

/// Month-over-month direction of spending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpenseTrend {
    /// Spending went up compared to last month.
    pub is_up: bool,
    /// Signed change in percent.
    pub monthly_change: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavingsGoal {
    pub title: String,
    pub target_amount: f64,
    pub current_amount: f64,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            total_this_month: 0.0,
            top_store: PLACEHOLDER.to_string(),
            receipts_count: 0,
            average_per_receipt: 0.0,
            days_with_expenses: 0,
            total_items: 0,
            expense_trend: None,
            savings_goal: None,
        }
    }
}
