//! Image upload batches for a single draft.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use vendorfront_core::{DomainError, DraftId};

use crate::session::DraftSession;

/// One file selected by the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The upload endpoint rejected one file; the whole batch was dropped.
    #[error("error uploading image {file_name}: {message}")]
    Failed { file_name: String, message: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Transport for a single image. Returns the stored image URL.
#[async_trait]
pub trait ImageUploader: Send + Sync {
    async fn upload(&self, file: &UploadFile) -> Result<String, UploadError>;
}

/// Upload files one at a time, in order, stopping at the first failure.
///
/// URLs already obtained for the batch are discarded on failure.
pub async fn upload_all(
    files: &[UploadFile],
    uploader: &dyn ImageUploader,
) -> Result<Vec<String>, UploadError> {
    let mut urls = Vec::with_capacity(files.len());
    for file in files {
        match uploader.upload(file).await {
            Ok(url) => urls.push(url),
            Err(err) => {
                warn!(
                    file = %file.file_name,
                    uploaded = urls.len(),
                    error = %err,
                    "image upload failed, dropping batch"
                );
                return Err(err);
            }
        }
    }
    Ok(urls)
}

/// Upload a batch for one draft and append the resulting URLs.
///
/// All-or-nothing: if any file fails, the draft's images are left exactly as
/// they were. Returns the number of images appended.
pub async fn upload_batch(
    session: &mut DraftSession,
    draft_id: DraftId,
    files: &[UploadFile],
    uploader: &dyn ImageUploader,
) -> Result<usize, UploadError> {
    session.draft(draft_id)?;
    if files.is_empty() {
        return Ok(0);
    }

    let urls = upload_all(files, uploader).await?;
    let count = urls.len();
    session.append_images(draft_id, urls)?;
    info!(draft_id = %draft_id, count, "image batch uploaded");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Fails on the file whose name matches `fail_on`; records every call.
    struct FakeUploader {
        fail_on: Option<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeUploader {
        fn new(fail_on: Option<&'static str>) -> Self {
            Self {
                fail_on,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ImageUploader for FakeUploader {
        async fn upload(&self, file: &UploadFile) -> Result<String, UploadError> {
            self.calls.lock().unwrap().push(file.file_name.clone());
            if self.fail_on == Some(file.file_name.as_str()) {
                return Err(UploadError::Failed {
                    file_name: file.file_name.clone(),
                    message: "Image upload failed".to_string(),
                });
            }
            Ok(format!("/uploads/{}", file.file_name))
        }
    }

    fn files(names: &[&str]) -> Vec<UploadFile> {
        names
            .iter()
            .map(|n| UploadFile::new(*n, n.as_bytes().to_vec()))
            .collect()
    }

    #[tokio::test]
    async fn successful_batch_appends_in_order() {
        let mut session = DraftSession::new();
        let id = session.drafts()[0].id_typed();
        session.append_images(id, vec!["/uploads/old.png".to_string()]).unwrap();
        let uploader = FakeUploader::new(None);

        let appended = upload_batch(&mut session, id, &files(&["a.png", "b.png"]), &uploader)
            .await
            .unwrap();

        assert_eq!(appended, 2);
        assert_eq!(
            session.draft(id).unwrap().images(),
            &["/uploads/old.png", "/uploads/a.png", "/uploads/b.png"]
        );
    }

    #[tokio::test]
    async fn failure_mid_batch_appends_nothing_and_stops() {
        let mut session = DraftSession::new();
        let id = session.drafts()[0].id_typed();
        session.append_images(id, vec!["/uploads/old.png".to_string()]).unwrap();
        let before = session.clone();
        let uploader = FakeUploader::new(Some("2.png"));

        let err = upload_batch(
            &mut session,
            id,
            &files(&["1.png", "2.png", "3.png"]),
            &uploader,
        )
        .await
        .unwrap_err();

        assert_eq!(
            err,
            UploadError::Failed {
                file_name: "2.png".to_string(),
                message: "Image upload failed".to_string(),
            }
        );
        assert_eq!(session, before);
        // Sequential: the third file is never attempted.
        assert_eq!(uploader.calls(), vec!["1.png", "2.png"]);
    }

    #[tokio::test]
    async fn unknown_draft_is_rejected_before_uploading() {
        let mut session = DraftSession::new();
        let uploader = FakeUploader::new(None);

        let err = upload_batch(&mut session, DraftId::new(), &files(&["a.png"]), &uploader)
            .await
            .unwrap_err();

        assert!(matches!(err, UploadError::Domain(DomainError::NotFound(_))));
        assert!(uploader.calls().is_empty());
    }

    #[tokio::test]
    async fn empty_batch_is_a_no_op() {
        let mut session = DraftSession::new();
        let id = session.drafts()[0].id_typed();
        let uploader = FakeUploader::new(None);
        assert_eq!(upload_batch(&mut session, id, &[], &uploader).await.unwrap(), 0);
        assert!(uploader.calls().is_empty());
    }
}
