// Copyright (c) 2025 Grocerbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::utils::{parse_date, parse_month};
use anyhow::Result;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("daily", sub)) => daily(ledger, sub)?,
        Some(("monthly", sub)) => monthly(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn daily(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    match ledger.daily_report(date) {
        Some(report) => println!("{}", report),
        None => println!("No data available for {}.", date),
    }
    Ok(())
}

fn monthly(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let (month, year) = parse_month(sub.get_one::<String>("month").unwrap())?;
    match ledger.monthly_report(month, year) {
        Some(report) => println!("{}", report),
        None => println!("No data available for {}-{}.", month, year),
    }
    Ok(())
}
