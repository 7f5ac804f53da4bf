//! Product submission: assemble once, hand off whole.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::{info, warn};

use vendorfront_core::DomainError;

use crate::payload::{SubmissionPayload, assemble};
use crate::session::DraftSession;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The form could not be turned into a payload; nothing was sent.
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// The catalog API refused or failed the request.
    #[error("failed to create product: {message}")]
    Rejected { message: String },
}

/// Receiver of the assembled payload (the create-product endpoint).
#[async_trait]
pub trait ProductSubmitter: Send + Sync {
    /// Send the payload as a single request. Returns the created product.
    async fn create_product(&self, payload: &SubmissionPayload) -> Result<JsonValue, SubmitError>;
}

/// Assemble the session and submit it.
///
/// On success the session is reset (no draft state survives a submission).
/// On any failure the session is left exactly as it was so the operator can
/// retry without re-entering data. There is no retry here.
pub async fn submit(
    session: &mut DraftSession,
    submitter: &dyn ProductSubmitter,
) -> Result<JsonValue, SubmitError> {
    let payload = assemble(session)?;
    let variants = payload.variants.len();

    match submitter.create_product(&payload).await {
        Ok(created) => {
            info!(name = %payload.name, variants, "product created");
            session.reset();
            Ok(created)
        }
        Err(err) => {
            warn!(name = %payload.name, error = %err, "product submission failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{BaseField, DraftField};
    use serde_json::json;
    use std::sync::Mutex;

    struct FakeSubmitter {
        reject_with: Option<&'static str>,
        received: Mutex<Vec<SubmissionPayload>>,
    }

    impl FakeSubmitter {
        fn accepting() -> Self {
            Self {
                reject_with: None,
                received: Mutex::new(Vec::new()),
            }
        }

        fn rejecting(message: &'static str) -> Self {
            Self {
                reject_with: Some(message),
                received: Mutex::new(Vec::new()),
            }
        }

        fn received(&self) -> Vec<SubmissionPayload> {
            self.received.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProductSubmitter for FakeSubmitter {
        async fn create_product(
            &self,
            payload: &SubmissionPayload,
        ) -> Result<JsonValue, SubmitError> {
            self.received.lock().unwrap().push(payload.clone());
            match self.reject_with {
                Some(message) => Err(SubmitError::Rejected {
                    message: message.to_string(),
                }),
                None => Ok(json!({ "_id": "p1", "name": payload.name })),
            }
        }
    }

    fn filled_session() -> DraftSession {
        let mut session = DraftSession::new();
        session.set_base_field(BaseField::Name, "Tee");
        session.set_base_field(BaseField::BasePrice, "25");
        let id = session.drafts()[0].id_typed();
        session.set_field(id, DraftField::Color, "White").unwrap();
        session.set_sizes(id, "S,M").unwrap();
        session
    }

    #[tokio::test]
    async fn success_sends_once_and_resets_session() {
        let mut session = filled_session();
        let submitter = FakeSubmitter::accepting();

        let created = submit(&mut session, &submitter).await.unwrap();

        assert_eq!(created["_id"], "p1");
        let received = submitter.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].variants.len(), 2);
        assert!(session.base().name.is_empty());
        assert_eq!(session.drafts().len(), 1);
        assert!(session.drafts()[0].sizes_raw().is_empty());
    }

    #[tokio::test]
    async fn rejection_keeps_session_for_retry() {
        let mut session = filled_session();
        let before = session.clone();
        let submitter = FakeSubmitter::rejecting("SKU already exists");

        let err = submit(&mut session, &submitter).await.unwrap_err();

        assert_eq!(
            err,
            SubmitError::Rejected {
                message: "SKU already exists".to_string()
            }
        );
        assert_eq!(session, before);
    }

    #[tokio::test]
    async fn bad_base_price_sends_nothing() {
        let mut session = filled_session();
        session.set_base_field(BaseField::BasePrice, "free");
        let before = session.clone();
        let submitter = FakeSubmitter::accepting();

        let err = submit(&mut session, &submitter).await.unwrap_err();

        assert!(matches!(err, SubmitError::Validation(DomainError::Validation(_))));
        assert!(submitter.received().is_empty());
        assert_eq!(session, before);
    }
}
