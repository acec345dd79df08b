// Copyright (c) 2025 Grocerbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryItem {
    pub name: String,
    pub quantity: u32,
    pub price_per_unit: Decimal,
}

impl GroceryItem {
    pub fn new(name: impl Into<String>, quantity: u32, price_per_unit: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            price_per_unit,
        }
    }

    /// Build an item from freeform text inputs, as entered at a prompt or
    /// form. Empty fields, non-numeric quantity/price, and non-positive
    /// quantity/price are each rejected with a dedicated error.
    pub fn parse(name: &str, quantity: &str, price: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        let quantity = quantity.trim();
        let price = price.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField("item name"));
        }
        if quantity.is_empty() {
            return Err(ValidationError::EmptyField("quantity"));
        }
        if price.is_empty() {
            return Err(ValidationError::EmptyField("price per unit"));
        }
        let qty: i64 = quantity
            .parse()
            .map_err(|_| ValidationError::InvalidQuantity(quantity.to_string()))?;
        let price_per_unit: Decimal = price
            .parse()
            .map_err(|_| ValidationError::InvalidPrice(price.to_string()))?;
        if qty <= 0 {
            return Err(ValidationError::NonPositiveQuantity);
        }
        if price_per_unit <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePrice);
        }
        let qty = u32::try_from(qty)
            .map_err(|_| ValidationError::InvalidQuantity(quantity.to_string()))?;
        Ok(Self::new(name, qty, price_per_unit))
    }

    pub fn total_price(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price_per_unit
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    items: Vec<GroceryItem>,
}

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            items: Vec::new(),
        }
    }

    /// Merge an item into the day. An existing entry with the same name AND
    /// the same unit price absorbs the new quantity; otherwise the item is
    /// appended. Same name at a different unit price stays a separate entry.
    pub fn add_item(&mut self, item: GroceryItem) {
        match self
            .items
            .iter_mut()
            .find(|it| it.name == item.name && it.price_per_unit == item.price_per_unit)
        {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => self.items.push(item),
        }
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn total_expenses(&self) -> Decimal {
        self.items.iter().map(|it| it.total_price()).sum()
    }

    pub fn daily_report(&self) -> String {
        let mut report = format!("Grocery Expenses for {}:\n", self.date.format("%B %Y"));
        for item in &self.items {
            report.push_str(&format!("{}: ${:.2}\n", item.name, item.total_price()));
        }
        report.push_str(&format!("Total Expenses: ${:.2}", self.total_expenses()));
        report
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Month {
    pub month: u32,
    pub year: i32,
    days: Vec<Day>,
}

impl Month {
    pub fn new(month: u32, year: i32) -> Self {
        Self {
            month,
            year,
            days: Vec::new(),
        }
    }

    /// Locate the day for `date`, creating and appending an empty one on a
    /// miss. Days stay in insertion order, not date order.
    pub fn day_mut(&mut self, date: NaiveDate) -> &mut Day {
        if let Some(idx) = self.days.iter().position(|d| d.date == date) {
            return &mut self.days[idx];
        }
        self.days.push(Day::new(date));
        self.days.last_mut().unwrap()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&Day> {
        self.days.iter().find(|d| d.date == date)
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.month == date.month() && self.year == date.year()
    }

    pub fn total_expenses(&self) -> Decimal {
        self.days.iter().map(|d| d.total_expenses()).sum()
    }

    /// Month-level aggregation re-keys by item name ONLY: the same name
    /// bought at two unit prices is two entries in a daily report but one
    /// summed line here. Names appear in first-seen order.
    pub fn monthly_report(&self) -> String {
        let mut item_costs: Vec<(String, Decimal)> = Vec::new();
        for day in &self.days {
            for item in &day.items {
                match item_costs.iter_mut().find(|(name, _)| *name == item.name) {
                    Some((_, cost)) => *cost += item.total_price(),
                    None => item_costs.push((item.name.clone(), item.total_price())),
                }
            }
        }

        let mut report = format!("Grocery Expenses for {}-{}:\n\n", self.month, self.year);
        for (name, cost) in &item_costs {
            report.push_str(&format!("{}: ${:.2}\n", name, cost));
        }
        let total: Decimal = item_costs.iter().map(|(_, cost)| *cost).sum();
        report.push_str(&format!(
            "\nTotal Expenses for {}-{}: ${:.2}\n",
            self.month, self.year, total
        ));
        report
    }
}
