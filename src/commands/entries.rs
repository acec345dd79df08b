// Copyright (c) 2025 Grocerbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::GroceryItem;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_month, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let name = sub.get_one::<String>("name").unwrap();
    let quantity = sub.get_one::<String>("quantity").unwrap();
    let price = sub.get_one::<String>("price").unwrap();

    // Validation happens before any mutation; a rejected entry leaves the
    // ledger exactly as it was.
    let item = GroceryItem::parse(name, quantity, price)?;
    let recorded = item.name.clone();
    ledger.add_item(date, item);
    println!("Item '{}' added for {}.", recorded, date);
    Ok(())
}

pub fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.item.clone(),
                    r.quantity.to_string(),
                    r.unit_price.clone(),
                    r.total.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Item", "Qty", "Unit Price", "Total"], rows)
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct EntryRow {
    pub date: String,
    pub item: String,
    pub quantity: u32,
    pub unit_price: String,
    pub total: String,
}

pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<EntryRow>> {
    let filter = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m)?),
        None => None,
    };

    let mut data = Vec::new();
    for month in ledger.months() {
        if let Some((mm, yy)) = filter {
            if month.month != mm || month.year != yy {
                continue;
            }
        }
        for day in month.days() {
            for item in day.items() {
                data.push(EntryRow {
                    date: day.date.to_string(),
                    item: item.name.clone(),
                    quantity: item.quantity,
                    unit_price: fmt_money(&item.price_per_unit),
                    total: fmt_money(&item.total_price()),
                });
            }
        }
    }
    Ok(data)
}
