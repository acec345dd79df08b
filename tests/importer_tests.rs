// Copyright (c) 2025 Grocerbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use grocerbook::error::ImportError;
use grocerbook::ledger::Ledger;
use grocerbook::{cli, commands::importer};
use std::io::Write;
use tempfile::NamedTempFile;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn import_distributes_rows_across_the_correct_days() {
    let mut ledger = Ledger::new();
    let csv = "2024-04-01,Milk,2,3.00\n\
               2024-04-01,Bread,1,2.50\n\
               2024-04-02,Milk,1,3.00\n";
    let count = ledger.import_csv(csv.as_bytes()).unwrap();

    assert_eq!(count, 3);
    let month = ledger.month(4, 2024).unwrap();
    assert_eq!(month.days().len(), 2);
    assert_eq!(month.day(d(2024, 4, 1)).unwrap().items().len(), 2);
    assert_eq!(month.day(d(2024, 4, 2)).unwrap().items().len(), 1);
    assert_eq!(month.total_expenses(), "11.50".parse().unwrap());
}

#[test]
fn import_merges_repeated_name_and_price_rows() {
    let mut ledger = Ledger::new();
    let csv = "2024-04-01,Milk,2,3.00\n\
               2024-04-01,Milk,3,3.00\n";
    ledger.import_csv(csv.as_bytes()).unwrap();

    let day = ledger.day(d(2024, 4, 1)).unwrap();
    assert_eq!(day.items().len(), 1);
    assert_eq!(day.items()[0].quantity, 5);
}

#[test]
fn import_routes_each_row_to_the_month_of_its_own_date() {
    let mut ledger = Ledger::new();
    let csv = "2024-04-30,Milk,1,3.00\n\
               2024-05-01,Bread,1,2.50\n";
    ledger.import_csv(csv.as_bytes()).unwrap();

    assert_eq!(ledger.months().len(), 2);
    assert!(ledger.day(d(2024, 4, 30)).is_some());
    assert!(ledger.day(d(2024, 5, 1)).is_some());
    assert_eq!(
        ledger.month(5, 2024).unwrap().total_expenses(),
        "2.50".parse().unwrap()
    );
}

#[test]
fn import_rejects_wrong_field_count() {
    let mut ledger = Ledger::new();
    let err = ledger
        .import_csv("2024-04-01,Milk,2\n".as_bytes())
        .unwrap_err();
    assert!(
        err.to_string()
            .contains("line 1: expected 4 fields (date,name,quantity,price), found 3")
    );
}

#[test]
fn import_rejects_malformed_date() {
    let mut ledger = Ledger::new();
    let err = ledger
        .import_csv("2024-13-01,Milk,2,3.00\n".as_bytes())
        .unwrap_err();
    assert!(err.to_string().contains("invalid date '2024-13-01'"));
}

#[test]
fn import_rejects_malformed_quantity_and_price() {
    let mut ledger = Ledger::new();
    let err = ledger
        .import_csv("2024-04-01,Milk,two,3.00\n".as_bytes())
        .unwrap_err();
    assert!(err.to_string().contains("invalid quantity 'two'"));

    let err = ledger
        .import_csv("2024-04-01,Milk,2,cheap\n".as_bytes())
        .unwrap_err();
    assert!(err.to_string().contains("invalid price 'cheap'"));
}

#[test]
fn failed_import_leaves_the_ledger_untouched() {
    let mut ledger = Ledger::new();
    // Valid rows before the bad one must not be applied.
    let csv = "2024-04-01,Milk,2,3.00\n\
               2024-04-02,Bread,1,2.50\n\
               2024-04-03,Eggs,oops,4.00\n";
    let err = ledger.import_csv(csv.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("line 3"));
    assert!(ledger.is_empty());
}

#[test]
fn import_reports_missing_file_as_resource_error() {
    let mut ledger = Ledger::new();
    let err = ledger
        .import_csv_path("/nonexistent/groceries.csv")
        .unwrap_err();
    assert!(matches!(err, ImportError::Resource { .. }));
    assert!(err.to_string().contains("cannot open"));
}

#[test]
fn importer_command_trims_cli_path_argument() {
    let mut ledger = Ledger::new();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "2024-04-01,Milk,2,3.00").unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let padded = format!("  {}  ", path);
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["grocerbook", "import", "--path", &padded]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(&mut ledger, import_m).unwrap();
    } else {
        panic!("no import subcommand");
    }

    assert_eq!(ledger.day(d(2024, 4, 1)).unwrap().items().len(), 1);
}
