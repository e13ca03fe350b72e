//! Tests for consolidated report computation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use budgetone_shared::types::{CategoryId, Currency, LocationId, UserId};

use crate::account::{Category, CategoryKind};
use crate::budget::Ledger;
use crate::location::Location;

use super::error::ReportError;
use super::service::consolidate;

fn category(code: &str, position: i32) -> Category {
    Category {
        id: CategoryId::new(),
        code: code.to_string(),
        name: format!("Category {code}"),
        kind: Some(CategoryKind::Expense),
        parent_id: None,
        position,
    }
}

fn location(currency: Currency) -> Location {
    Location {
        id: LocationId::new(),
        name: "Branch".to_string(),
        currency,
        manager_id: UserId::new(),
    }
}

#[test]
fn test_category_with_no_records_excluded() {
    let c1 = category("100", 0);
    let report = consolidate(std::slice::from_ref(&c1), &[], &[]).unwrap();

    assert!(report.rows.is_empty());
    assert!(report.currency.is_none());
}

#[test]
fn test_category_with_zero_sum_record_included() {
    let c1 = category("100", 0);
    let loc = location(Currency::Gbp);

    let mut ledger = Ledger::new();
    ledger.upsert_monthly_amount(loc.id, c1.id, 3, dec!(0)).unwrap();

    let report = consolidate(
        std::slice::from_ref(&c1),
        std::slice::from_ref(&loc),
        ledger.records(),
    )
    .unwrap();

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].total_amount, dec!(0));
    assert_eq!(report.rows[0].entries_count, 1);
}

#[test]
fn test_negative_total_with_record_included() {
    let c1 = category("100", 0);
    let loc = location(Currency::Gbp);

    let mut ledger = Ledger::new();
    ledger.upsert_monthly_amount(loc.id, c1.id, 0, dec!(-250)).unwrap();

    let report = consolidate(
        std::slice::from_ref(&c1),
        std::slice::from_ref(&loc),
        ledger.records(),
    )
    .unwrap();

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].total_amount, dec!(-250));
}

#[test]
fn test_totals_sum_across_locations() {
    let c1 = category("100", 0);
    let london = location(Currency::Gbp);
    let mut leeds = location(Currency::Gbp);
    leeds.name = "Leeds".to_string();

    let mut ledger = Ledger::new();
    ledger.upsert_monthly_amount(london.id, c1.id, 0, dec!(500)).unwrap();
    ledger.upsert_monthly_amount(london.id, c1.id, 5, dec!(300)).unwrap();
    ledger.upsert_monthly_amount(leeds.id, c1.id, 2, dec!(200)).unwrap();

    let report = consolidate(
        std::slice::from_ref(&c1),
        &[london, leeds],
        ledger.records(),
    )
    .unwrap();

    assert_eq!(report.currency, Some(Currency::Gbp));
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].total_amount, dec!(1000));
    assert_eq!(report.rows[0].entries_count, 2);
}

#[test]
fn test_rows_follow_declaration_order() {
    let categories = vec![category("500", 0), category("100", 1), category("300", 2)];
    let loc = location(Currency::Gbp);

    let mut ledger = Ledger::new();
    for cat in &categories {
        ledger.upsert_monthly_amount(loc.id, cat.id, 0, dec!(1)).unwrap();
    }

    let report =
        consolidate(&categories, std::slice::from_ref(&loc), ledger.records()).unwrap();

    let codes: Vec<&str> = report.rows.iter().map(|r| r.category_code.as_str()).collect();
    assert_eq!(codes, vec!["500", "100", "300"]);
}

#[test]
fn test_mixed_currencies_rejected() {
    let c1 = category("100", 0);
    let london = location(Currency::Gbp);
    let istanbul = location(Currency::Try);

    let mut ledger = Ledger::new();
    ledger.upsert_monthly_amount(london.id, c1.id, 0, dec!(100)).unwrap();
    ledger.upsert_monthly_amount(istanbul.id, c1.id, 0, dec!(100)).unwrap();

    let result = consolidate(
        std::slice::from_ref(&c1),
        &[london, istanbul],
        ledger.records(),
    );

    assert_eq!(
        result.unwrap_err(),
        ReportError::MixedCurrencies(Currency::Gbp, Currency::Try)
    );
}

#[test]
fn test_idle_location_does_not_trip_currency_check() {
    let c1 = category("100", 0);
    let london = location(Currency::Gbp);
    let istanbul = location(Currency::Try);

    let mut ledger = Ledger::new();
    ledger.upsert_monthly_amount(london.id, c1.id, 0, dec!(100)).unwrap();

    let report = consolidate(
        std::slice::from_ref(&c1),
        &[london, istanbul],
        ledger.records(),
    )
    .unwrap();

    assert_eq!(report.currency, Some(Currency::Gbp));
}

#[test]
fn test_record_with_unknown_location_rejected() {
    let c1 = category("100", 0);

    let mut ledger = Ledger::new();
    let ghost = LocationId::new();
    ledger.upsert_monthly_amount(ghost, c1.id, 0, dec!(100)).unwrap();

    let result = consolidate(std::slice::from_ref(&c1), &[], ledger.records());

    assert_eq!(result.unwrap_err(), ReportError::UnknownLocation(ghost));
}

// ============================================================================
// Conservation property
// ============================================================================

/// Strategy for amounts with two decimal places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Sum of report totals equals the sum of every monthly slot across all
    /// records. Entries are spread over several categories, locations, and
    /// months; the >0-or-has-records filter never drops a category that has
    /// a record, so no amount can escape the report.
    #[test]
    fn prop_report_conserves_total(
        entries in prop::collection::vec(
            (0usize..4, 0usize..3, 0usize..12, amount_strategy()),
            1..40,
        ),
    ) {
        let categories: Vec<Category> =
            (0..4).map(|i| category(&format!("{}00", i + 1), i)).collect();
        let locations: Vec<Location> = (0..3).map(|_| location(Currency::Gbp)).collect();

        let mut ledger = Ledger::new();
        for (cat_idx, loc_idx, month, amount) in entries {
            ledger
                .upsert_monthly_amount(locations[loc_idx].id, categories[cat_idx].id, month, amount)
                .unwrap();
        }

        let ledger_total: Decimal =
            ledger.records().iter().map(|r| r.amounts.total()).sum();

        let report = consolidate(&categories, &locations, ledger.records()).unwrap();
        let report_total: Decimal = report.rows.iter().map(|r| r.total_amount).sum();

        prop_assert_eq!(report_total, ledger_total);
    }

    /// The report never contains a category with total 0 and no entries.
    #[test]
    fn prop_no_phantom_rows(
        entries in prop::collection::vec(
            (0usize..4, 0usize..12, amount_strategy()),
            0..20,
        ),
    ) {
        let categories: Vec<Category> =
            (0..8).map(|i| category(&format!("{}00", i + 1), i)).collect();
        let loc = location(Currency::Gbp);

        let mut ledger = Ledger::new();
        for (cat_idx, month, amount) in entries {
            ledger
                .upsert_monthly_amount(loc.id, categories[cat_idx].id, month, amount)
                .unwrap();
        }

        let report =
            consolidate(&categories, std::slice::from_ref(&loc), ledger.records()).unwrap();

        for row in &report.rows {
            prop_assert!(
                row.total_amount > Decimal::ZERO || row.entries_count > 0,
                "phantom row for {}", row.category_code
            );
        }
    }
}
