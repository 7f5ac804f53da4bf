//! `vendorfront-client`
//!
//! **Responsibility:** HTTP access to the marketplace API for the vendor
//! surfaces.
//!
//! This crate provides:
//! - `ApiClient`: fetch/save the vendor profile, list products, upload
//!   images, create products
//! - Implementations of the catalog crate's `ImageUploader` and
//!   `ProductSubmitter` seams
//! - `ClientConfig` (environment-driven), the draft file format and the
//!   plain-text renderers used by the `vendorfront` CLI

pub mod adapters;
pub mod client;
pub mod config;
pub mod draft_file;
pub mod error;
pub mod render;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use draft_file::{DraftEntry, DraftFile};
pub use error::ApiError;
