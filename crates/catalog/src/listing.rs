//! Read model for the vendor's existing products (dashboard listing).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vendorfront_core::ProductId;

/// A product as returned by `GET /api/products?vendor=<id>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    pub base_price: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub variants: Vec<VariantSummary>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A listed variant. Options are keyed by axis name (e.g. `Color`, `Size`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantSummary {
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    #[serde(default)]
    pub stock: u64,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
}

pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

impl ProductSummary {
    /// First gallery image, used as the card cover.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn total_stock(&self) -> u64 {
        self.variants.iter().map(|v| v.stock).sum()
    }

    pub fn display_base_price(&self) -> String {
        format_price(self.base_price)
    }
}

impl VariantSummary {
    /// `"Color: Blue Size: M"`, axes sorted by name.
    pub fn label(&self) -> String {
        self.options
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}
