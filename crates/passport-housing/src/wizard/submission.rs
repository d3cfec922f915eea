use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Wire payload for the site backend's form endpoint: a form-type tag,
/// the applicant's reachable identity, and an arbitrary key/value map
/// with the rest of the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub form_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub data: BTreeMap<String, Value>,
}

/// Result of one delivery attempt. Rejections carry a human-readable
/// reason the wizard surfaces for a retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected { reason: String },
}

/// Boundary through which completed applications leave the system.
/// Callers suspend until the attempt resolves; there is no cancellation
/// and no automatic retry.
#[async_trait]
pub trait SubmissionPort: Send + Sync {
    async fn submit(&self, submission: FormSubmission) -> SubmissionOutcome;
}

/// Stand-in delivery used while no backend is wired up: waits a fixed
/// delay, then accepts everything.
#[derive(Debug, Clone)]
pub struct SimulatedSubmission {
    delay: Duration,
}

impl SimulatedSubmission {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmission {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl SubmissionPort for SimulatedSubmission {
    async fn submit(&self, _submission: FormSubmission) -> SubmissionOutcome {
        tokio::time::sleep(self.delay).await;
        SubmissionOutcome::Accepted
    }
}

/// Delivers applications to the site backend's public form endpoint.
#[derive(Debug, Clone)]
pub struct CmsFormClient {
    client: reqwest::Client,
    endpoint: String,
    domain: String,
}

impl CmsFormClient {
    pub fn new(endpoint: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            domain: domain.into(),
        }
    }

    fn forms_url(&self) -> String {
        format!(
            "{}/api/public/{}/forms",
            self.endpoint.trim_end_matches('/'),
            self.domain
        )
    }
}

#[derive(Debug, Deserialize)]
struct RejectionBody {
    message: Option<String>,
}

#[async_trait]
impl SubmissionPort for CmsFormClient {
    async fn submit(&self, submission: FormSubmission) -> SubmissionOutcome {
        let response = match self
            .client
            .post(self.forms_url())
            .json(&submission)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "form delivery never reached the backend");
                return SubmissionOutcome::Rejected {
                    reason: "Network error".to_string(),
                };
            }
        };

        if response.status().is_success() {
            return SubmissionOutcome::Accepted;
        }

        let status = response.status();
        let reason = match response.json::<RejectionBody>().await {
            Ok(RejectionBody {
                message: Some(message),
            }) => message,
            _ => "Submission failed".to_string(),
        };
        warn!(%status, %reason, "form delivery rejected by the backend");
        SubmissionOutcome::Rejected { reason }
    }
}
