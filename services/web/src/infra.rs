use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use passport_housing::catalog::Catalog;
use passport_housing::siteconfig::SiteDataProvider;
use passport_housing::wizard::{FormSubmission, SubmissionOutcome, SubmissionPort};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared state for the catalog, site-document, and application routes.
#[derive(Clone)]
pub(crate) struct SiteState {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) site: Arc<SiteDataProvider>,
    pub(crate) submissions: Arc<dyn SubmissionPort>,
}

/// Accepts every application and keeps the payloads around, for the
/// demo and for router tests. An optional delay mimics the reference
/// backend's pacing.
#[derive(Default)]
pub(crate) struct InMemorySubmissionSink {
    received: Mutex<Vec<FormSubmission>>,
    delay: Duration,
}

impl InMemorySubmissionSink {
    pub(crate) fn with_delay(delay: Duration) -> Self {
        Self {
            received: Mutex::new(Vec::new()),
            delay,
        }
    }

    pub(crate) fn received(&self) -> Vec<FormSubmission> {
        self.received.lock().expect("sink mutex poisoned").clone()
    }
}

#[async_trait::async_trait]
impl SubmissionPort for InMemorySubmissionSink {
    async fn submit(&self, submission: FormSubmission) -> SubmissionOutcome {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.received
            .lock()
            .expect("sink mutex poisoned")
            .push(submission);
        SubmissionOutcome::Accepted
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
