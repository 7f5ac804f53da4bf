//! Product gallery assembly.

use crate::draft::VariantDraft;

/// Every draft's images, draft order then within-draft order, no dedup.
///
/// Drafts without sizes still contribute: a draft can exist purely to attach
/// gallery images even though it yields no purchasable variant.
pub fn collect_images(drafts: &[VariantDraft]) -> Vec<String> {
    drafts
        .iter()
        .flat_map(|d| d.images().iter().cloned())
        .collect()
}
