use serde_json::{Map, Value};

use super::types::{ExpenseTrend, SavingsGoal, Snapshot, DEFAULT_GOAL_TITLE};

/// Decodes the summary document into a [`Snapshot`].
///
/// Never fails. A document that is missing, unparsable or not a JSON object
/// yields `Snapshot::default()`. Inside an object every field is decoded on
/// its own, so one bad field only defaults that field.
pub fn parse(raw: Option<&str>) -> Snapshot {
    let Some(obj) = raw.and_then(parse_object) else {
        return Snapshot::default();
    };

    let defaults = Snapshot::default();
    Snapshot {
        total_this_month: number(&obj, "totalThisMonth").unwrap_or(defaults.total_this_month),
        top_store: string(&obj, "topStore").unwrap_or(defaults.top_store),
        receipts_count: integer(&obj, "receiptsCount").unwrap_or(defaults.receipts_count),
        average_per_receipt: number(&obj, "averagePerReceipt")
            .unwrap_or(defaults.average_per_receipt),
        days_with_expenses: integer(&obj, "daysWithExpenses")
            .unwrap_or(defaults.days_with_expenses),
        total_items: integer(&obj, "totalItems").unwrap_or(defaults.total_items),
        expense_trend: object(&obj, "expenseTrend").map(expense_trend),
        savings_goal: object(&obj, "savingsGoal").map(savings_goal),
    }
}

/// Parses `raw` as a JSON object, logging and discarding anything else.
pub(crate) fn parse_object(raw: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(obj)) => Some(obj),
        Ok(_) => {
            tracing::warn!("Document is not a JSON object, using defaults");
            None
        }
        Err(err) => {
            tracing::warn!(error = %err, "Document is not valid JSON, using defaults");
            None
        }
    }
}

fn expense_trend(obj: &Map<String, Value>) -> ExpenseTrend {
    ExpenseTrend {
        is_up: obj.get("isUp").and_then(Value::as_bool).unwrap_or(false),
        monthly_change: number(obj, "monthlyChange").unwrap_or(0.0),
    }
}

fn savings_goal(obj: &Map<String, Value>) -> SavingsGoal {
    SavingsGoal {
        title: string(obj, "title").unwrap_or_else(|| DEFAULT_GOAL_TITLE.to_string()),
        target_amount: number(obj, "targetAmount").unwrap_or(0.0),
        current_amount: number(obj, "currentAmount").unwrap_or(0.0),
    }
}

fn number(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64)
}

/// Integer fields accept floating representations, truncated toward zero.
fn integer(obj: &Map<String, Value>, key: &str) -> Option<i64> {
    let value = obj.get(key)?;
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.trunc() as i64))
}

fn string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn object<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    obj.get(key).and_then(Value::as_object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::PLACEHOLDER;

    #[test]
    fn missing_document_is_all_defaults() {
        assert_eq!(parse(None), Snapshot::default());
    }

    #[test]
    fn malformed_documents_are_all_defaults() {
        for raw in ["", "not json", "{", "[1,2]", "42", "null", "\"text\""] {
            assert_eq!(parse(Some(raw)), Snapshot::default(), "input: {raw:?}");
        }
    }

    #[test]
    fn empty_object_is_all_defaults() {
        let snapshot = parse(Some("{}"));
        assert_eq!(snapshot, Snapshot::default());
        assert_eq!(snapshot.top_store, "—");
    }

    #[test]
    fn full_document() {
        let raw = r#"{
            "totalThisMonth": 1234.5,
            "topStore": "Acme",
            "receiptsCount": 12,
            "averagePerReceipt": 102.875,
            "daysWithExpenses": 9,
            "totalItems": 40,
            "expenseTrend": {"isUp": true, "monthlyChange": 12.34},
            "savingsGoal": {"title": "Car", "targetAmount": 5000, "currentAmount": 1250.5}
        }"#;
        let snapshot = parse(Some(raw));

        assert_eq!(snapshot.total_this_month, 1234.5);
        assert_eq!(snapshot.top_store, "Acme");
        assert_eq!(snapshot.receipts_count, 12);
        assert_eq!(snapshot.average_per_receipt, 102.875);
        assert_eq!(snapshot.days_with_expenses, 9);
        assert_eq!(snapshot.total_items, 40);
        assert_eq!(
            snapshot.expense_trend,
            Some(ExpenseTrend {
                is_up: true,
                monthly_change: 12.34
            })
        );
        assert_eq!(
            snapshot.savings_goal,
            Some(SavingsGoal {
                title: "Car".into(),
                target_amount: 5000.0,
                current_amount: 1250.5,
            })
        );
    }

    #[test]
    fn bad_field_defaults_in_isolation() {
        let raw = r#"{"totalThisMonth": "lots", "topStore": 7, "receiptsCount": 3}"#;
        let snapshot = parse(Some(raw));

        assert_eq!(snapshot.total_this_month, 0.0);
        assert_eq!(snapshot.top_store, PLACEHOLDER);
        assert_eq!(snapshot.receipts_count, 3);
    }

    #[test]
    fn integers_accept_float_representation() {
        let raw = r#"{"totalThisMonth": 100, "receiptsCount": 4.0, "totalItems": 7.9}"#;
        let snapshot = parse(Some(raw));

        assert_eq!(snapshot.total_this_month, 100.0);
        assert_eq!(snapshot.receipts_count, 4);
        assert_eq!(snapshot.total_items, 7);
    }

    #[test]
    fn nested_objects_default_their_fields() {
        let snapshot = parse(Some(r#"{"expenseTrend": {}, "savingsGoal": {}}"#));

        assert_eq!(
            snapshot.expense_trend,
            Some(ExpenseTrend {
                is_up: false,
                monthly_change: 0.0
            })
        );
        let goal = snapshot.savings_goal.expect("goal present");
        assert_eq!(goal.title, "Goal");
        assert_eq!(goal.target_amount, 0.0);
        assert_eq!(goal.current_amount, 0.0);
    }

    #[test]
    fn non_object_nested_values_are_absent() {
        let snapshot = parse(Some(r#"{"expenseTrend": true, "savingsGoal": [1]}"#));
        assert!(snapshot.expense_trend.is_none());
        assert!(snapshot.savings_goal.is_none());
    }
}
