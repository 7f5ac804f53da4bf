//! On-disk description of a product draft, consumed by the CLI.
//!
//! ```json
//! {
//!   "name": "Classic Denim Jacket",
//!   "basePrice": "99.99",
//!   "tags": "Outerwear, Denim",
//!   "variants": [
//!     { "color": "Blue", "sizes": "S,M", "stock": { "S": "3" }, "uploads": ["blue.png"] },
//!     { "color": "Black", "images": ["/uploads/black.png"] }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use vendorfront_catalog::{DraftField, DraftSession, ProductBase, StockTable, UploadFile};
use vendorfront_core::{DomainResult, DraftId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftFile {
    #[serde(flatten)]
    pub base: ProductBase,
    #[serde(default)]
    pub variants: Vec<DraftEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftEntry {
    pub color: String,
    pub sizes: String,
    pub price: String,
    /// Quantity text per size; applied after the size list.
    pub stock: StockTable,
    /// Already-hosted image URLs.
    pub images: Vec<String>,
    /// Local files to upload for this variant, relative to the draft file.
    pub uploads: Vec<PathBuf>,
}

/// Pending upload batch for one draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUploads {
    pub draft_id: DraftId,
    pub paths: Vec<PathBuf>,
}

impl DraftFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read draft file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse draft file {}", path.display()))
    }

    /// Replay the file through the session's edit operations.
    ///
    /// Upload paths are resolved against `root` and returned per draft, in
    /// draft order, for the caller to push through the upload flow.
    pub fn into_session(self, root: &Path) -> DomainResult<(DraftSession, Vec<PendingUploads>)> {
        let mut session = DraftSession::with_base(self.base);
        let mut pending = Vec::new();

        for (index, entry) in self.variants.into_iter().enumerate() {
            let id = if index == 0 {
                session.drafts()[0].id_typed()
            } else {
                session.add_draft()
            };

            session.set_field(id, DraftField::Color, entry.color)?;
            session.set_field(id, DraftField::PriceOverride, entry.price)?;
            session.set_sizes(id, entry.sizes)?;
            for (size, quantity) in entry.stock.iter() {
                session.set_stock(id, size, quantity)?;
            }
            session.append_images(id, entry.images)?;

            if !entry.uploads.is_empty() {
                pending.push(PendingUploads {
                    draft_id: id,
                    paths: entry.uploads.iter().map(|p| root.join(p)).collect(),
                });
            }
        }

        Ok((session, pending))
    }
}

/// Read local files into upload batches.
pub fn read_upload_files(paths: &[PathBuf]) -> anyhow::Result<Vec<UploadFile>> {
    paths
        .iter()
        .map(|path| {
            let bytes = std::fs::read(path)
                .with_context(|| format!("failed to read image {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string());
            Ok(UploadFile::new(file_name, bytes))
        })
        .collect()
}
