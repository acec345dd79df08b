// Copyright (c) 2025 Grocerbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;

use grocerbook::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = match matches.get_one::<String>("ledger") {
        Some(p) => PathBuf::from(p),
        None => store::ledger_path()?,
    };
    let mut ledger = store::load(&path)?;

    match matches.subcommand() {
        Some(("add", sub)) => {
            commands::entries::add(&mut ledger, sub)?;
            store::save(&path, &ledger)?;
        }
        Some(("list", sub)) => commands::entries::list(&ledger, sub)?,
        Some(("report", sub)) => commands::reports::handle(&ledger, sub)?,
        Some(("import", sub)) => {
            commands::importer::handle(&mut ledger, sub)?;
            store::save(&path, &ledger)?;
        }
        Some(("export", sub)) => commands::exporter::handle(&ledger, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
