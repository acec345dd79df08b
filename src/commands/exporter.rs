// Copyright (c) 2025 Grocerbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use anyhow::{Context, Result};

pub fn handle(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub.get_one::<String>("out").unwrap().trim();
    ledger
        .export_csv_path(out)
        .with_context(|| format!("Export groceries to {}", out))?;
    println!("Exported purchases to {}", out);
    Ok(())
}
