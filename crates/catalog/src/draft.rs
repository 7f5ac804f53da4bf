//! Editable form state: product base fields and per-variant drafts.

use serde::{Deserialize, Serialize};

use vendorfront_core::{DraftId, Entity, split_list};

use crate::stock::StockTable;

/// Product-level fields, kept as the raw text the operator typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductBase {
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    /// Comma-separated tags.
    #[serde(rename = "tags")]
    pub tags_raw: String,
    /// Numeric text; parsed only at submission.
    pub base_price: String,
}

/// Addressable product base field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseField {
    Name,
    Description,
    Brand,
    Category,
    Tags,
    BasePrice,
}

impl ProductBase {
    pub fn set(&mut self, field: BaseField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BaseField::Name => self.name = value,
            BaseField::Description => self.description = value,
            BaseField::Brand => self.brand = value,
            BaseField::Category => self.category = value,
            BaseField::Tags => self.tags_raw = value,
            BaseField::BasePrice => self.base_price = value,
        }
    }

    /// Tags split on commas, trimmed, blanks dropped.
    pub fn tags(&self) -> Vec<String> {
        split_list(&self.tags_raw).map(str::to_string).collect()
    }
}

/// Directly editable draft field (sizes go through [`VariantDraft::set_sizes`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Color,
    PriceOverride,
}

/// One block of operator input describing a color and its sizes.
///
/// Invariant: right after a size edit, the keys of `stock` are exactly the
/// distinct tokens of `sizes_raw`, in first-seen order. Direct stock edits may
/// add keys afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDraft {
    #[serde(default)]
    id: DraftId,
    #[serde(default)]
    color: String,
    #[serde(default, rename = "sizes")]
    sizes_raw: String,
    #[serde(default, rename = "price")]
    price_override: String,
    #[serde(default)]
    stock: StockTable,
    #[serde(default)]
    images: Vec<String>,
}

impl VariantDraft {
    /// Create an empty draft with a fresh identifier.
    pub fn new() -> Self {
        Self::with_id(DraftId::new())
    }

    pub fn with_id(id: DraftId) -> Self {
        Self {
            id,
            color: String::new(),
            sizes_raw: String::new(),
            price_override: String::new(),
            stock: StockTable::new(),
            images: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> DraftId {
        self.id
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn sizes_raw(&self) -> &str {
        &self.sizes_raw
    }

    pub fn price_override(&self) -> &str {
        &self.price_override
    }

    pub fn stock(&self) -> &StockTable {
        &self.stock
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Size tokens in entry order, duplicates included.
    pub fn sizes(&self) -> impl Iterator<Item = &str> {
        split_list(&self.sizes_raw)
    }

    /// Raw stock text recorded for `size`, if any.
    pub fn stock_for(&self, size: &str) -> Option<&str> {
        self.stock.get(size)
    }

    pub(crate) fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Color => self.color = value,
            DraftField::PriceOverride => self.price_override = value,
        }
    }

    /// Replace the size list and rebuild the stock table from it.
    ///
    /// Retained sizes keep their quantity text, new sizes start at `"0"`, and
    /// sizes that disappeared are dropped.
    pub(crate) fn set_sizes(&mut self, value: String) {
        self.stock = self.stock.recompute(split_list(&value));
        self.sizes_raw = value;
    }

    pub(crate) fn set_stock(&mut self, size: String, value: String) {
        self.stock.insert(size, value);
    }

    pub(crate) fn append_images(&mut self, urls: impl IntoIterator<Item = String>) {
        self.images.extend(urls);
    }

    pub(crate) fn remove_image(&mut self, index: usize) -> Option<String> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }
}

impl Default for VariantDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for VariantDraft {
    type Id = DraftId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
