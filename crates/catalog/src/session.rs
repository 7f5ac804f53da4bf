//! The editing session: single owner of the base fields and the draft list.

use tracing::debug;

use vendorfront_core::{DomainError, DomainResult, DraftId, Entity};

use crate::draft::{BaseField, DraftField, ProductBase, VariantDraft};

/// In-memory state of one product-creation form.
///
/// There is exactly one writer (the active editing session); all operations
/// are synchronous. Drafts keep their insertion order, which drives the order
/// of option values, images and expanded variants at submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftSession {
    base: ProductBase,
    drafts: Vec<VariantDraft>,
}

impl DraftSession {
    /// A fresh session: empty base fields and one empty draft.
    pub fn new() -> Self {
        Self::with_base(ProductBase::default())
    }

    /// A session seeded with base fields and one empty draft.
    pub fn with_base(base: ProductBase) -> Self {
        Self {
            base,
            drafts: vec![VariantDraft::new()],
        }
    }

    pub fn base(&self) -> &ProductBase {
        &self.base
    }

    pub fn drafts(&self) -> &[VariantDraft] {
        &self.drafts
    }

    pub fn draft(&self, id: DraftId) -> DomainResult<&VariantDraft> {
        self.drafts
            .iter()
            .find(|d| *d.id() == id)
            .ok_or_else(|| DomainError::not_found(format!("draft {id}")))
    }

    fn draft_mut(&mut self, id: DraftId) -> DomainResult<&mut VariantDraft> {
        self.drafts
            .iter_mut()
            .find(|d| *d.id() == id)
            .ok_or_else(|| DomainError::not_found(format!("draft {id}")))
    }

    pub fn set_base_field(&mut self, field: BaseField, value: impl Into<String>) {
        self.base.set(field, value);
    }

    /// Append an empty draft and return its identifier.
    pub fn add_draft(&mut self) -> DraftId {
        let draft = VariantDraft::new();
        let id = draft.id_typed();
        self.drafts.push(draft);
        debug!(draft_id = %id, drafts = self.drafts.len(), "draft added");
        id
    }

    /// Remove a draft. Removing the last one leaves an empty list.
    pub fn remove_draft(&mut self, id: DraftId) -> DomainResult<VariantDraft> {
        let pos = self
            .drafts
            .iter()
            .position(|d| *d.id() == id)
            .ok_or_else(|| DomainError::not_found(format!("draft {id}")))?;
        let removed = self.drafts.remove(pos);
        debug!(draft_id = %id, drafts = self.drafts.len(), "draft removed");
        Ok(removed)
    }

    pub fn set_field(
        &mut self,
        id: DraftId,
        field: DraftField,
        value: impl Into<String>,
    ) -> DomainResult<()> {
        self.draft_mut(id)?.set_field(field, value.into());
        Ok(())
    }

    /// Replace the size list of a draft and recompute its stock table.
    pub fn set_sizes(&mut self, id: DraftId, value: impl Into<String>) -> DomainResult<()> {
        let draft = self.draft_mut(id)?;
        draft.set_sizes(value.into());
        debug!(draft_id = %id, sizes = draft.stock().len(), "sizes updated");
        Ok(())
    }

    /// Set the quantity text of one size. Does not recompute anything.
    pub fn set_stock(
        &mut self,
        id: DraftId,
        size: impl Into<String>,
        value: impl Into<String>,
    ) -> DomainResult<()> {
        self.draft_mut(id)?.set_stock(size.into(), value.into());
        Ok(())
    }

    pub fn append_images<I>(&mut self, id: DraftId, urls: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = String>,
    {
        let draft = self.draft_mut(id)?;
        draft.append_images(urls);
        debug!(draft_id = %id, images = draft.images().len(), "images appended");
        Ok(())
    }

    pub fn remove_image(&mut self, id: DraftId, index: usize) -> DomainResult<String> {
        self.draft_mut(id)?.remove_image(index).ok_or_else(|| {
            DomainError::validation(format!("image index {index} out of range for draft {id}"))
        })
    }

    /// Discard all draft state, returning to a fresh session.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for DraftSession {
    fn default() -> Self {
        Self::new()
    }
}
