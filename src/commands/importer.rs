// Copyright (c) 2025 Grocerbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use anyhow::{Context, Result};

pub fn handle(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let count = ledger
        .import_csv_path(path)
        .with_context(|| format!("Import groceries from {}", path))?;
    println!("Imported {} rows from {}", count, path);
    Ok(())
}
