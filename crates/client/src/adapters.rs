//! `ApiClient` as the catalog crate's upload and submission collaborators.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use vendorfront_catalog::{
    ImageUploader, ProductSubmitter, SubmissionPayload, SubmitError, UploadError, UploadFile,
};

use crate::client::ApiClient;

#[async_trait]
impl ImageUploader for ApiClient {
    async fn upload(&self, file: &UploadFile) -> Result<String, UploadError> {
        self.upload_image(file)
            .await
            .map_err(|err| UploadError::Failed {
                file_name: file.file_name.clone(),
                message: err.user_message(),
            })
    }
}

#[async_trait]
impl ProductSubmitter for ApiClient {
    async fn create_product(&self, payload: &SubmissionPayload) -> Result<JsonValue, SubmitError> {
        ApiClient::create_product(self, payload)
            .await
            .map_err(|err| SubmitError::Rejected {
                message: err.user_message(),
            })
    }
}
