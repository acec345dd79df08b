// Copyright (c) 2025 Grocerbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use grocerbook::ledger::Ledger;
use grocerbook::models::GroceryItem;
use rust_decimal::Decimal;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn daily_report_lists_items_and_grand_total() {
    let mut ledger = Ledger::new();
    ledger.add_item(d(2024, 4, 30), GroceryItem::new("Apples", 3, dec("2.00")));
    ledger.add_item(d(2024, 4, 30), GroceryItem::new("Bananas", 2, dec("1.50")));

    let report = ledger.daily_report(d(2024, 4, 30)).unwrap();
    assert_eq!(
        report,
        "Grocery Expenses for April 2024:\n\
         Apples: $6.00\n\
         Bananas: $3.00\n\
         Total Expenses: $9.00"
    );
}

#[test]
fn daily_report_keeps_first_seen_item_order_across_merges() {
    let mut ledger = Ledger::new();
    ledger.add_item(d(2024, 4, 30), GroceryItem::new("Apples", 1, dec("2.00")));
    ledger.add_item(d(2024, 4, 30), GroceryItem::new("Bananas", 2, dec("1.50")));
    ledger.add_item(d(2024, 4, 30), GroceryItem::new("Apples", 2, dec("2.00")));

    let report = ledger.daily_report(d(2024, 4, 30)).unwrap();
    let apples = report.find("Apples").unwrap();
    let bananas = report.find("Bananas").unwrap();
    assert!(apples < bananas);
    assert!(report.contains("Apples: $6.00"));
}

#[test]
fn monthly_report_sums_per_item_across_days() {
    let mut ledger = Ledger::new();
    ledger.add_item(d(2024, 4, 1), GroceryItem::new("Milk", 2, dec("3.00")));
    ledger.add_item(d(2024, 4, 2), GroceryItem::new("Bread", 1, dec("2.50")));

    let report = ledger.monthly_report(4, 2024).unwrap();
    assert!(report.starts_with("Grocery Expenses for 4-2024:\n"));
    assert!(report.contains("Milk: $6.00\n"));
    assert!(report.contains("Bread: $2.50\n"));
    assert!(report.contains("Total Expenses for 4-2024: $8.50\n"));
}

#[test]
fn monthly_report_collapses_unit_price_distinctions() {
    let mut ledger = Ledger::new();
    // Two distinct daily entries for the same name at different unit prices.
    ledger.add_item(d(2024, 4, 1), GroceryItem::new("Apples", 3, dec("2.00")));
    ledger.add_item(d(2024, 4, 1), GroceryItem::new("Apples", 2, dec("2.50")));

    let daily = ledger.daily_report(d(2024, 4, 1)).unwrap();
    assert_eq!(daily.matches("Apples:").count(), 2);

    let monthly = ledger.monthly_report(4, 2024).unwrap();
    assert_eq!(monthly.matches("Apples:").count(), 1);
    assert!(monthly.contains("Apples: $11.00"));
}

#[test]
fn missing_day_or_month_yields_no_report() {
    let mut ledger = Ledger::new();
    assert!(ledger.daily_report(d(2024, 4, 30)).is_none());
    assert!(ledger.monthly_report(4, 2024).is_none());

    ledger.add_item(d(2024, 4, 1), GroceryItem::new("Milk", 1, dec("3.00")));
    // The month now exists, but not that day.
    assert!(ledger.daily_report(d(2024, 4, 30)).is_none());
    assert!(ledger.monthly_report(5, 2024).is_none());
}
