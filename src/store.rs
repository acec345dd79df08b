// Copyright (c) 2025 Grocerbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::ledger::Ledger;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("io.grocerbook", "Grocerbook", "grocerbook"));

/// Default location of the ledger CSV, under the platform data dir.
pub fn ledger_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    std::fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("ledger.csv"))
}

/// Load the ledger from `path`. A missing file is an empty ledger, not an
/// error; anything else that goes wrong is.
pub fn load(path: &Path) -> Result<Ledger> {
    let mut ledger = Ledger::new();
    match File::open(path) {
        Ok(file) => {
            ledger
                .import_csv(file)
                .with_context(|| format!("Read ledger at {}", path.display()))?;
            Ok(ledger)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ledger),
        Err(e) => Err(e).with_context(|| format!("Open ledger at {}", path.display())),
    }
}

pub fn save(path: &Path, ledger: &Ledger) -> Result<()> {
    ledger
        .export_csv_path(path)
        .with_context(|| format!("Write ledger at {}", path.display()))
}
