// Copyright (c) 2025 Grocerbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("grocerbook")
        .version(crate_version!())
        .about("Grocery purchase ledger with daily/monthly expense reports")
        .arg(
            Arg::new("ledger")
                .long("ledger")
                .global(true)
                .value_name("FILE")
                .help("Ledger CSV file (defaults to the platform data dir)"),
        )
        .subcommand(
            Command::new("add")
                .about("Record one grocery purchase")
                .arg(
                    Arg::new("date")
                        .long("date")
                        .required(true)
                        .help("Purchase date, YYYY-MM-DD"),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .required(true)
                        .help("Item name"),
                )
                .arg(
                    Arg::new("quantity")
                        .long("quantity")
                        .required(true)
                        .help("Number of units"),
                )
                .arg(
                    Arg::new("price")
                        .long("price")
                        .required(true)
                        .help("Price per unit"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List recorded purchases")
                .arg(
                    Arg::new("month")
                        .long("month")
                        .help("Restrict to one month, YYYY-MM"),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("report")
                .about("Generate expense reports")
                .subcommand(
                    Command::new("daily").about("Itemized report for one day").arg(
                        Arg::new("date")
                            .long("date")
                            .required(true)
                            .help("Date, YYYY-MM-DD"),
                    ),
                )
                .subcommand(
                    Command::new("monthly")
                        .about("Per-item totals for one month")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .required(true)
                                .help("Month, YYYY-MM"),
                        ),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Bulk-merge purchases from a CSV file (date,name,quantity,price)")
                .arg(Arg::new("path").long("path").required(true)),
        )
        .subcommand(
            Command::new("export")
                .about("Write all purchases to a CSV file")
                .arg(Arg::new("out").long("out").required(true)),
        )
}
