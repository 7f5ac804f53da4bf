//! `vendorfront-core` — shared building blocks for the storefront crates.
//!
//! This crate contains **pure** primitives (no IO, no HTTP).

pub mod entity;
pub mod error;
pub mod id;
pub mod tokens;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{DraftId, ProductId, VendorId};
pub use tokens::split_list;
