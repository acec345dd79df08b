// Copyright (c) 2025 Grocerbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use thiserror::Error;

/// Rejections of manual entry input. Surfaced to the user as a message;
/// nothing is merged into the ledger when one of these fires.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("invalid quantity '{0}', expected a whole number")]
    InvalidQuantity(String),
    #[error("invalid price '{0}', expected a decimal number")]
    InvalidPrice(String),
    #[error("quantity must be positive")]
    NonPositiveQuantity,
    #[error("price per unit must be positive")]
    NonPositivePrice,
}

/// Malformed CSV input. `line` is 1-based within the source file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: expected 4 fields (date,name,quantity,price), found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: invalid date '{value}', expected YYYY-MM-DD")]
    Date { line: usize, value: String },
    #[error("line {line}: invalid quantity '{value}'")]
    Quantity { line: usize, value: String },
    #[error("line {line}: invalid price '{value}'")]
    Price { line: usize, value: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot open {path}: {source}")]
    Resource {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}
