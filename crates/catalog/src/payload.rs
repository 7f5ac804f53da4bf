//! Submission payload assembly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use vendorfront_core::{DomainError, DomainResult};

use crate::expand::{ExpandedVariant, expand_variants, parse_decimal};
use crate::images::collect_images;
use crate::options::{OptionDeclaration, aggregate_options};
use crate::session::DraftSession;

/// Wire body of `POST /api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    pub base_price: f64,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub options: Vec<OptionDeclaration>,
    pub variants: Vec<ExpandedVariant>,
}

/// Parse the product base price. Unlike per-variant fields there is no
/// fallback: a bad base price aborts the submission.
pub fn parse_base_price(raw: &str) -> DomainResult<f64> {
    parse_decimal(raw)
        .ok_or_else(|| DomainError::validation(format!("base price {raw:?} is not a number")))
}

/// Build the payload from a snapshot of the session.
///
/// Either the whole payload is produced or an error is returned; the session
/// is only read.
pub fn assemble(session: &DraftSession) -> DomainResult<SubmissionPayload> {
    let base = session.base();
    let drafts = session.drafts();
    let base_price = parse_base_price(&base.base_price)?;

    let payload = SubmissionPayload {
        name: base.name.clone(),
        description: base.description.clone(),
        brand: base.brand.clone(),
        category: base.category.clone(),
        base_price,
        tags: base.tags(),
        images: collect_images(drafts),
        options: aggregate_options(drafts),
        variants: expand_variants(drafts, base_price),
    };

    debug!(
        drafts = drafts.len(),
        variants = payload.variants.len(),
        images = payload.images.len(),
        "payload assembled"
    );
    Ok(payload)
}
