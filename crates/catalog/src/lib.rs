//! Catalog product composition for the vendor dashboard.
//!
//! This crate turns the operator's free-form variant drafts into a catalog
//! product payload. Everything here is deterministic, in-memory logic; the only
//! IO happens behind the [`ImageUploader`] and [`ProductSubmitter`] seams, which
//! the client crate implements over HTTP.
//!
//! Pipeline, leaf-first:
//!
//! - [`DraftSession`] owns the base fields and the ordered draft list.
//! - [`aggregate_options`] derives the `Color` / `Size` option declarations.
//! - [`expand_variants`] turns each draft into one record per size token.
//! - [`collect_images`] gathers the product gallery from every draft.
//! - [`assemble`] combines all of the above into a [`SubmissionPayload`].

pub mod draft;
pub mod expand;
pub mod images;
pub mod listing;
pub mod options;
pub mod payload;
pub mod session;
pub mod stock;
pub mod submit;
pub mod upload;

pub use draft::{BaseField, DraftField, ProductBase, VariantDraft};
pub use expand::{ExpandedVariant, VariantOptions, expand_variants};
pub use images::collect_images;
pub use listing::{ProductSummary, VariantSummary};
pub use options::{OptionDeclaration, OptionName, aggregate_options};
pub use payload::{SubmissionPayload, assemble};
pub use session::DraftSession;
pub use stock::{DEFAULT_STOCK_TEXT, StockTable};
pub use submit::{ProductSubmitter, SubmitError, submit};
pub use upload::{ImageUploader, UploadError, UploadFile, upload_batch};
