//! Expansion of drafts into concrete, sellable variant records.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::draft::VariantDraft;

/// The `{ Color, Size }` pair identifying a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOptions {
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Size")]
    pub size: String,
}

/// One purchasable color × size combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandedVariant {
    pub options: VariantOptions,
    pub stock: u64,
    pub price: f64,
    pub images: Vec<String>,
}

/// Parse operator-entered decimal text. Blank, non-numeric and non-finite
/// input yields `None`.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a stock quantity from its leading integer.
///
/// Surrounding whitespace and anything after the leading digits are ignored
/// (`"3.5"` is 3, `"5 pcs"` is 5). A negative count is 0, as is text with no
/// leading digits. Counts past `u64::MAX` saturate.
pub fn parse_stock(text: Option<&str>) -> u64 {
    let Some(text) = text else {
        return 0;
    };
    let trimmed = text.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if digits.is_empty() {
        warn!(value = text, "unparseable stock quantity, using 0");
        return 0;
    }
    if negative {
        warn!(value = text, "negative stock quantity, using 0");
        return 0;
    }
    if end < rest.len() {
        debug!(value = text, "ignoring trailing stock text");
    }
    digits.parse::<u64>().unwrap_or(u64::MAX)
}

/// Expand one draft: one record per size token, duplicates included.
///
/// Duplicate tokens look up the same stock entry and yield identical records;
/// downstream consumers rely on positional correspondence with the input, so
/// they are not collapsed. A draft without sizes yields nothing.
pub fn expand_draft(draft: &VariantDraft, base_price: f64) -> Vec<ExpandedVariant> {
    let price = match parse_decimal(draft.price_override()) {
        Some(price) => price,
        None => {
            if !draft.price_override().trim().is_empty() {
                warn!(
                    value = draft.price_override(),
                    "unparseable price override, using base price"
                );
            }
            base_price
        }
    };

    draft
        .sizes()
        .map(|size| ExpandedVariant {
            options: VariantOptions {
                color: draft.color().to_string(),
                size: size.to_string(),
            },
            stock: parse_stock(draft.stock_for(size)),
            price,
            images: draft.images().to_vec(),
        })
        .collect()
}

/// Expand all drafts in order and concatenate the results.
pub fn expand_variants(drafts: &[VariantDraft], base_price: f64) -> Vec<ExpandedVariant> {
    drafts
        .iter()
        .flat_map(|d| expand_draft(d, base_price))
        .collect()
}
