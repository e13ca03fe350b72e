//! Tests for budget row mapping and legacy migration helpers.

use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use budgetone_core::budget::{BudgetAmounts, MONTHS_PER_YEAR, set_month};

use crate::entities::budgets;

use super::{amounts_from_model, monthly_json, record_from_model};

fn model(amount: Option<Decimal>, monthly: Option<serde_json::Value>) -> budgets::Model {
    let now = chrono::Utc::now().into();
    budgets::Model {
        id: Uuid::new_v4(),
        location_id: Uuid::new_v4(),
        category_id: Uuid::new_v4(),
        amount,
        monthly_amounts: monthly,
        created_at: now,
        updated_at: now,
    }
}

fn months_with(index: usize, value: Decimal) -> [Decimal; MONTHS_PER_YEAR] {
    let mut months = [Decimal::ZERO; MONTHS_PER_YEAR];
    months[index] = value;
    months
}

#[test]
fn test_monthly_row_maps_to_monthly_shape() {
    let months = months_with(5, dec!(300));
    let row = model(None, Some(serde_json::to_value(months).unwrap()));

    let amounts = amounts_from_model(&row).unwrap();
    assert_eq!(amounts, BudgetAmounts::Monthly { monthly_amounts: months });
}

#[test]
fn test_legacy_row_maps_to_legacy_shape() {
    let row = model(Some(dec!(100)), None);

    let amounts = amounts_from_model(&row).unwrap();
    assert_eq!(amounts, BudgetAmounts::Legacy { amount: dec!(100) });
}

#[test]
fn test_empty_row_maps_to_zeroed_months() {
    let row = model(None, None);

    let amounts = amounts_from_model(&row).unwrap();
    assert_eq!(amounts, BudgetAmounts::zeroed());
}

#[test]
fn test_monthly_column_wins_over_stale_scalar() {
    // A row that somehow carries both columns reads as monthly.
    let months = months_with(0, dec!(42));
    let row = model(Some(dec!(100)), Some(serde_json::to_value(months).unwrap()));

    let amounts = amounts_from_model(&row).unwrap();
    assert_eq!(amounts.total(), dec!(42));
}

#[rstest]
#[case(serde_json::json!("not an array"))]
#[case(serde_json::json!([1, 2, 3]))]
#[case(serde_json::json!({"month": 1}))]
fn test_corrupt_payload_rejected(#[case] payload: serde_json::Value) {
    let row = model(None, Some(payload));
    assert!(matches!(
        amounts_from_model(&row),
        Err(super::BudgetError::CorruptRecord(_, _))
    ));
}

#[test]
fn test_monthly_json_round_trips_through_column() {
    let amounts = set_month(BudgetAmounts::Legacy { amount: dec!(100) }, 1, dec!(50)).unwrap();

    let row = model(None, Some(monthly_json(&amounts)));
    let read_back = amounts_from_model(&row).unwrap();

    assert_eq!(read_back, amounts);
    assert_eq!(read_back.normalize()[0], dec!(100));
    assert_eq!(read_back.normalize()[1], dec!(50));
}

#[test]
fn test_record_from_model_carries_timestamps() {
    let months = months_with(2, dec!(7));
    let row = model(None, Some(serde_json::to_value(months).unwrap()));
    let id = row.id;

    let record = record_from_model(row).unwrap();
    assert_eq!(record.id.into_inner(), id);
    assert_eq!(record.created_at, record.updated_at);
    assert_eq!(record.amounts.total(), dec!(7));
}

#[test]
fn test_unique_violation_classifier_rejects_other_errors() {
    let not_inserted = super::BudgetError::Database(sea_orm::DbErr::RecordNotInserted);
    assert!(!not_inserted.is_unique_violation());

    let validation =
        super::BudgetError::Validation(budgetone_core::budget::BudgetError::MonthOutOfRange(12));
    assert!(!validation.is_unique_violation());
}
