//! Per-size stock table of a variant draft.

use core::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Stock quantity assigned to a size the operator has not filled in yet.
pub const DEFAULT_STOCK_TEXT: &str = "0";

/// Size → quantity text, kept in entry order.
///
/// Serializes as a JSON object whose keys appear in that order. A key that is
/// written again keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockTable {
    entries: Vec<(String, String)>,
}

impl StockTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity text recorded for `size`, if any.
    pub fn get(&self, size: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == size)
            .map(|(_, quantity)| quantity.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(size, quantity)| (size.as_str(), quantity.as_str()))
    }

    pub fn sizes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(size, _)| size.as_str())
    }

    /// Set the quantity of `size`, appending it when new.
    pub(crate) fn insert(&mut self, size: String, quantity: String) {
        match self.entries.iter_mut().find(|(key, _)| *key == size) {
            Some((_, existing)) => *existing = quantity,
            None => self.entries.push((size, quantity)),
        }
    }

    /// Table for a new size list: one entry per distinct size in first-seen
    /// order, quantities carried over from `self`, new sizes at
    /// [`DEFAULT_STOCK_TEXT`].
    pub(crate) fn recompute<'a>(&self, sizes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut table = Self::new();
        for size in sizes {
            if table.get(size).is_some() {
                continue;
            }
            let quantity = self.get(size).unwrap_or(DEFAULT_STOCK_TEXT);
            table
                .entries
                .push((size.to_string(), quantity.to_string()));
        }
        table
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for StockTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (size, quantity) in iter {
            table.insert(size.to_string(), quantity.to_string());
        }
        table
    }
}

impl Serialize for StockTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for StockTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StockTableVisitor)
    }
}

struct StockTableVisitor;

impl<'de> Visitor<'de> for StockTableVisitor {
    type Value = StockTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of size to quantity text")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut table = StockTable::new();
        while let Some((size, quantity)) = map.next_entry::<String, String>()? {
            table.insert(size, quantity);
        }
        Ok(table)
    }
}
