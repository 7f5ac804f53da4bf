//! Product-level option declarations derived from the drafts.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::draft::VariantDraft;

/// Option axis name, serialized exactly as the catalog API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionName {
    Color,
    Size,
}

/// One option axis and its values in first-entry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDeclaration {
    pub name: OptionName,
    pub values: Vec<String>,
}

/// Trimmed, non-empty colors in draft order.
///
/// Colors are deliberately **not** deduplicated, unlike sizes: two drafts that
/// both say `"Blue"` produce two `"Blue"` entries. Whether the catalog wants
/// that is an open question; the behavior is kept as the dashboard ships it.
pub fn color_values(drafts: &[VariantDraft]) -> Vec<String> {
    drafts
        .iter()
        .map(|d| d.color().trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Distinct size tokens across all drafts, first-seen order.
pub fn size_values(drafts: &[VariantDraft]) -> Vec<String> {
    let mut seen = HashSet::new();
    drafts
        .iter()
        .flat_map(|d| d.sizes())
        .filter(|size| seen.insert(*size))
        .map(str::to_string)
        .collect()
}

/// Declarations in fixed order (Color, then Size); empty axes are omitted.
pub fn aggregate_options(drafts: &[VariantDraft]) -> Vec<OptionDeclaration> {
    [
        (OptionName::Color, color_values(drafts)),
        (OptionName::Size, size_values(drafts)),
    ]
    .into_iter()
    .filter(|(_, values)| !values.is_empty())
    .map(|(name, values)| OptionDeclaration { name, values })
    .collect()
}
