//! Thin HTTP client for the marketplace API.

use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use vendorfront_catalog::{ProductSummary, SubmissionPayload, UploadFile};
use vendorfront_core::VendorId;
use vendorfront_vendor::VendorProfile;

use crate::config::ClientConfig;
use crate::error::ApiError;

const UPLOAD_FIELD: &str = "image";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: Option<String>,
}

/// Client for the vendor-facing API endpoints.
///
/// Every call is a single request; there is no retry. Any body carrying a
/// `message` field is treated as a failure, whatever the status code.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.auth_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// `GET /api/vendors/me`
    pub async fn fetch_vendor_profile(&self) -> Result<VendorProfile, ApiError> {
        let req = self.authorize(self.http.get(self.url("/api/vendors/me")));
        read_json(send(req).await?).await
    }

    /// `PUT /api/vendors/me` with the full profile object.
    pub async fn save_vendor_profile(
        &self,
        profile: &VendorProfile,
    ) -> Result<VendorProfile, ApiError> {
        let req = self
            .authorize(self.http.put(self.url("/api/vendors/me")))
            .json(profile);
        read_json(send(req).await?).await
    }

    /// `GET /api/products?vendor=<id>`
    pub async fn fetch_products(&self, vendor: &VendorId) -> Result<Vec<ProductSummary>, ApiError> {
        let req = self
            .authorize(self.http.get(self.url("/api/products")))
            .query(&[("vendor", vendor.as_str())]);
        read_json(send(req).await?).await
    }

    /// `POST /api/upload` with one file. Returns the stored image URL.
    pub async fn upload_image(&self, file: &UploadFile) -> Result<String, ApiError> {
        let part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        let form = Form::new().part(UPLOAD_FIELD, part);
        let req = self
            .authorize(self.http.post(self.url("/api/upload")))
            .multipart(form);

        let resp = send(req).await?;
        let status = resp.status().as_u16();
        let body: UploadResponse = read_json(resp).await?;
        body.url.ok_or_else(|| ApiError::Api {
            status,
            message: "Image upload failed".to_string(),
        })
    }

    /// `POST /api/products` with the assembled payload.
    ///
    /// Success is decided by status alone: the create endpoint may answer a
    /// 2xx with a `message` alongside the created product.
    pub async fn create_product(&self, payload: &SubmissionPayload) -> Result<JsonValue, ApiError> {
        let req = self
            .authorize(self.http.post(self.url("/api/products")))
            .json(payload);
        read_created(send(req).await?).await
    }
}

async fn send(req: RequestBuilder) -> Result<Response, ApiError> {
    let resp = req.send().await?;
    debug!(status = resp.status().as_u16(), url = %resp.url(), "response received");
    Ok(resp)
}

/// Body of a create call. Any 2xx succeeds; otherwise the body's `message`
/// (or the raw text) becomes the error.
async fn read_created(resp: Response) -> Result<JsonValue, ApiError> {
    let status = resp.status();
    let text = resp.text().await?;
    let body = serde_json::from_str::<JsonValue>(&text).ok();

    if status.is_success() {
        return Ok(body.unwrap_or(JsonValue::Null));
    }

    let message = match body.as_ref().and_then(|b| b.get("message")) {
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None if body.is_none() && !text.trim().is_empty() => text.trim().to_string(),
        None => format!("request failed with status {status}"),
    };
    warn!(status = status.as_u16(), %message, "create rejected");
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Apply the `message`-means-failure convention and decode the body.
async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let text = resp.text().await?;

    let body: JsonValue = if text.trim().is_empty() {
        JsonValue::Null
    } else {
        match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(ApiError::Parse(e.to_string())),
            Err(_) => {
                return Err(ApiError::Api {
                    status: status.as_u16(),
                    message: text.trim().to_string(),
                });
            }
        }
    };

    if let Some(message) = body.get("message") {
        let message = match message.as_str() {
            Some(s) => s.to_string(),
            None => message.to_string(),
        };
        warn!(status = status.as_u16(), %message, "API reported failure");
        return Err(ApiError::Api {
            status: status.as_u16(),
            message,
        });
    }

    if !status.is_success() {
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: format!("request failed with status {status}"),
        });
    }

    serde_json::from_value(body).map_err(|e| ApiError::Parse(e.to_string()))
}
