// Copyright (c) 2025 Grocerbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{ImportError, ParseError};
use crate::models::{Day, GroceryItem, Month};

/// The whole application state: an insertion-ordered list of months. Owned
/// by the caller and passed by reference into every operation; there is no
/// ambient state anywhere.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    months: Vec<Month>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn months(&self) -> &[Month] {
        &self.months
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn month(&self, month: u32, year: i32) -> Option<&Month> {
        self.months
            .iter()
            .find(|m| m.month == month && m.year == year)
    }

    /// Locate the month for `date`, creating and appending an empty one on a
    /// miss. Linear scan; months stay in insertion order.
    pub fn month_mut(&mut self, date: NaiveDate) -> &mut Month {
        if let Some(idx) = self.months.iter().position(|m| m.contains(date)) {
            return &mut self.months[idx];
        }
        self.months.push(Month::new(date.month(), date.year()));
        self.months.last_mut().unwrap()
    }

    /// Merge one item into the day for `date`, creating the month and day
    /// as needed.
    pub fn add_item(&mut self, date: NaiveDate, item: GroceryItem) {
        self.month_mut(date).day_mut(date).add_item(item);
    }

    pub fn day(&self, date: NaiveDate) -> Option<&Day> {
        self.months
            .iter()
            .find(|m| m.contains(date))
            .and_then(|m| m.day(date))
    }

    /// Report for one day, or `None` when no entries exist for that date.
    pub fn daily_report(&self, date: NaiveDate) -> Option<String> {
        self.day(date).map(|d| d.daily_report())
    }

    /// Report for one month, or `None` when no entries exist for it.
    pub fn monthly_report(&self, month: u32, year: i32) -> Option<String> {
        self.month(month, year).map(|m| m.monthly_report())
    }

    /// Bulk-merge a headerless CSV of `date,name,quantity,price` rows.
    ///
    /// The whole file is parsed before the first merge, so a malformed row
    /// anywhere leaves the ledger untouched. Each row lands in the month of
    /// its own date; a file may span any number of months. Returns the
    /// number of rows merged.
    pub fn import_csv<R: Read>(&mut self, reader: R) -> Result<usize, ParseError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut parsed: Vec<(NaiveDate, GroceryItem)> = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let line = idx + 1;
            let rec = result?;
            if rec.len() != 4 {
                return Err(ParseError::FieldCount {
                    line,
                    found: rec.len(),
                });
            }
            let date_raw = rec[0].trim();
            let name = rec[1].trim();
            let quantity_raw = rec[2].trim();
            let price_raw = rec[3].trim();

            let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d").map_err(|_| {
                ParseError::Date {
                    line,
                    value: date_raw.to_string(),
                }
            })?;
            let quantity: u32 = quantity_raw.parse().map_err(|_| ParseError::Quantity {
                line,
                value: quantity_raw.to_string(),
            })?;
            let price = price_raw.parse().map_err(|_| ParseError::Price {
                line,
                value: price_raw.to_string(),
            })?;
            parsed.push((date, GroceryItem::new(name, quantity, price)));
        }

        let count = parsed.len();
        for (date, item) in parsed {
            self.add_item(date, item);
        }
        Ok(count)
    }

    pub fn import_csv_path(&mut self, path: impl AsRef<Path>) -> Result<usize, ImportError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ImportError::Resource {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.import_csv(file)?)
    }

    /// Write every entry back out in the import format, months, days, and
    /// items in insertion order.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
        for month in &self.months {
            for day in month.days() {
                for item in day.items() {
                    wtr.write_record([
                        day.date.to_string(),
                        item.name.clone(),
                        item.quantity.to_string(),
                        item.price_per_unit.to_string(),
                    ])?;
                }
            }
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn export_csv_path(&self, path: impl AsRef<Path>) -> Result<(), csv::Error> {
        let file = File::create(path).map_err(csv::Error::from)?;
        self.export_csv(file)
    }
}
