//! Cloud object-storage artifact store.
//!
//! Speaks a GCS-style JSON object API: a listing endpoint
//! (`GET {endpoint}/storage/v1/b/{bucket}/o?prefix=...`) and per-object
//! downloads (`?alt=media`). Credentials and location come from the
//! environment; a partially configured backend fails fast, before any
//! scoring is attempted.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use restoplan_models::RawBundle;

use crate::error::{StoreError, StoreResult};
use crate::traits::{bundle_file_names, component_from_file_name, ArtifactStore};

/// Configuration for the cloud artifact backend
#[derive(Debug, Clone)]
pub struct CloudConfig {
    /// API endpoint (e.g. "https://storage.googleapis.com")
    pub endpoint: String,
    /// Bucket name
    pub bucket: String,
    /// Bearer token; `None` for public buckets
    pub token: Option<String>,
    /// Object name prefix, normalized to end with "/" when non-empty
    pub prefix: String,
    /// Request timeout
    pub timeout: Duration,
}

impl CloudConfig {
    pub fn new(endpoint: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            bucket: bucket.into(),
            token: None,
            prefix: String::new(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = normalize_prefix(&prefix.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create from environment variables
    ///
    /// Reads:
    /// - RESTOPLAN_STORE_ENDPOINT (required)
    /// - RESTOPLAN_STORE_BUCKET (required)
    /// - RESTOPLAN_STORE_TOKEN (optional)
    /// - RESTOPLAN_STORE_PREFIX (optional, default: "")
    /// - RESTOPLAN_STORE_TIMEOUT_SECS (optional, default: 30)
    pub fn from_env() -> StoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Tests inject a map here so
    /// they never mutate process-wide environment state.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> StoreResult<Self> {
        let endpoint = lookup("RESTOPLAN_STORE_ENDPOINT")
            .ok_or_else(|| StoreError::Config("RESTOPLAN_STORE_ENDPOINT not set".to_string()))?;
        let bucket = lookup("RESTOPLAN_STORE_BUCKET")
            .ok_or_else(|| StoreError::Config("RESTOPLAN_STORE_BUCKET not set".to_string()))?;
        let token = lookup("RESTOPLAN_STORE_TOKEN");
        let prefix = lookup("RESTOPLAN_STORE_PREFIX").unwrap_or_default();
        let timeout_secs = match lookup("RESTOPLAN_STORE_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                StoreError::Config(format!(
                    "RESTOPLAN_STORE_TIMEOUT_SECS is not a number: '{raw}'"
                ))
            })?,
            None => 30,
        };

        Ok(Self {
            endpoint,
            bucket,
            token,
            prefix: normalize_prefix(&prefix),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let p = prefix.trim_start_matches('/');
    if p.is_empty() || p.ends_with('/') {
        p.to_string()
    } else {
        format!("{p}/")
    }
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    items: Vec<ListedObject>,

    /// Continuation token; present when the listing spans further pages.
    #[serde(default, rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListedObject {
    name: String,
}

/// Artifact store over a cloud object bucket.
pub struct CloudArtifactStore {
    config: CloudConfig,
    client: reqwest::Client,
}

impl CloudArtifactStore {
    /// Build the store and its HTTP client. The configured timeout bounds
    /// every listing and download request.
    pub fn new(config: CloudConfig) -> StoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        info!(
            endpoint = %config.endpoint,
            bucket = %config.bucket,
            prefix = %config.prefix,
            "cloud artifact store configured"
        );
        Ok(Self { config, client })
    }

    fn list_url(&self, page_token: Option<&str>) -> String {
        let mut url = format!(
            "{}/storage/v1/b/{}/o?prefix={}",
            self.config.endpoint, self.config.bucket, self.config.prefix
        );
        if let Some(token) = page_token {
            url.push_str("&pageToken=");
            url.push_str(&urlencode(token));
        }
        url
    }

    async fn list_page(&self, page_token: Option<&str>) -> StoreResult<ListResponse> {
        let url = self.list_url(page_token);
        let response = self.authorized(self.client.get(&url)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::CloudStatus {
                status: status.as_u16(),
                object: url,
            });
        }
        Ok(serde_json::from_slice(&response.bytes().await?)?)
    }

    fn object_url(&self, object: &str) -> String {
        format!(
            "{}/storage/v1/b/{}/o/{}?alt=media",
            self.config.endpoint,
            self.config.bucket,
            urlencode(object)
        )
    }

    fn authorized(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn download(&self, object: &str) -> StoreResult<Vec<u8>> {
        let url = self.object_url(object);
        let response = self.authorized(self.client.get(&url)).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(object.to_string()));
        }
        if !status.is_success() {
            return Err(StoreError::CloudStatus {
                status: status.as_u16(),
                object: object.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Percent-encode an object name for use as a single URL path segment.
fn urlencode(object: &str) -> String {
    let mut out = String::with_capacity(object.len());
    for b in object.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

#[async_trait]
impl ArtifactStore for CloudArtifactStore {
    async fn discover_components(&self) -> StoreResult<Vec<String>> {
        let prefix = &self.config.prefix;
        let mut components: Vec<String> = Vec::new();

        // listings can span pages; follow the continuation token to the end
        let mut page_token: Option<String> = None;
        loop {
            let listing = self.list_page(page_token.as_deref()).await?;
            components.extend(
                listing
                    .items
                    .iter()
                    .filter_map(|obj| obj.name.strip_prefix(prefix.as_str()))
                    .filter_map(component_from_file_name)
                    .map(str::to_string),
            );
            match listing.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        components.sort();
        components.dedup();
        debug!(count = components.len(), "discovered components in bucket");
        Ok(components)
    }

    async fn fetch_bundle(&self, component: &str) -> StoreResult<RawBundle> {
        let [pre, time, succ] = bundle_file_names(component);
        let prefix = &self.config.prefix;
        Ok(RawBundle {
            preprocessor: self.download(&format!("{prefix}{pre}")).await?,
            time_model: self.download(&format!("{prefix}{time}")).await?,
            success_model: self.download(&format!("{prefix}{succ}")).await?,
        })
    }

    fn location(&self) -> String {
        format!("{}/{}", self.config.bucket, self.config.prefix)
    }
}
