use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::warn;

use crate::config::CmsConfig;

use super::{SiteData, SitePage};

/// Fetches the site document from the remote backend, failing open to
/// [`SiteData::fallback`] so callers never branch on errors. A resolved
/// document (fallback included) is reused within the freshness window
/// before the next call re-fetches.
pub struct SiteDataProvider {
    client: reqwest::Client,
    endpoint: String,
    domain: String,
    refresh: Duration,
    cached: Mutex<Option<CachedDocument>>,
}

struct CachedDocument {
    fetched_at: Instant,
    document: Arc<SiteData>,
}

/// Why a remote fetch did not produce a document. Only ever logged;
/// callers get the fallback instead.
#[derive(Debug, thiserror::Error)]
enum SiteFetchError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

impl SiteDataProvider {
    pub fn new(endpoint: impl Into<String>, domain: impl Into<String>, refresh: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            domain: domain.into(),
            refresh,
            cached: Mutex::new(None),
        }
    }

    pub fn from_config(config: &CmsConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            config.domain.clone(),
            config.refresh_window(),
        )
    }

    fn site_url(&self) -> String {
        format!(
            "{}/api/public/{}",
            self.endpoint.trim_end_matches('/'),
            self.domain
        )
    }

    /// The current site document. Total: transport failures, non-2xx
    /// statuses, and decode failures all collapse into the fallback.
    pub async fn fetch(&self) -> Arc<SiteData> {
        if let Some(document) = self.fresh_copy() {
            return document;
        }

        let document = match self.fetch_remote().await {
            Ok(document) => Arc::new(document),
            Err(reason) => {
                warn!(reason = %reason, "site configuration unavailable, serving fallback");
                Arc::new(SiteData::fallback())
            }
        };

        let mut guard = self.cached.lock().expect("site cache mutex poisoned");
        *guard = Some(CachedDocument {
            fetched_at: Instant::now(),
            document: Arc::clone(&document),
        });
        document
    }

    /// A single CMS page by slug. Any failure collapses to `None`.
    pub async fn fetch_page(&self, slug: &str) -> Option<SitePage> {
        let url = format!("{}/pages/{}", self.site_url(), slug);
        let response = self.client.get(url).send().await.ok()?;
        if !response.status().is_success() {
            return None;
        }
        response.json::<SitePage>().await.ok()
    }

    fn fresh_copy(&self) -> Option<Arc<SiteData>> {
        let guard = self.cached.lock().expect("site cache mutex poisoned");
        guard
            .as_ref()
            .filter(|cached| cached.fetched_at.elapsed() < self.refresh)
            .map(|cached| Arc::clone(&cached.document))
    }

    async fn fetch_remote(&self) -> Result<SiteData, SiteFetchError> {
        let response = self.client.get(self.site_url()).send().await?;

        if !response.status().is_success() {
            return Err(SiteFetchError::Status(response.status()));
        }

        Ok(response.json::<SiteData>().await?)
    }
}
