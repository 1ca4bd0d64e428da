//! HTTP implementation of the platform capabilities
//!
//! - `GET {api_host}/api/v1/endpoints?model_id=..&version_id=..&is_active=..`
//! - `GET {api_host}/api/v1/workspaces`

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::debug::{log_exchange, RequestSnapshot, ResponseSnapshot};
use super::{EndpointLister, WorkspaceFetcher};
use crate::common::error::PlatformError;
use crate::config::PlatformConfig;
use crate::types::{EndpointListParams, EndpointsList, Workspace};

const ENDPOINTS_PATH: &str = "/api/v1/endpoints";
const WORKSPACES_PATH: &str = "/api/v1/workspaces";

/// reqwest-based platform client
///
/// One request per call, no retries. The timeout comes from [`PlatformConfig`].
#[derive(Clone)]
pub struct PlatformClient {
    http: Client,
    api_host: String,
    api_key: Option<String>,
    debug: bool,
}

impl std::fmt::Debug for PlatformClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformClient")
            .field("api_host", &self.api_host)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("debug", &self.debug)
            .finish()
    }
}

impl PlatformClient {
    /// Build a client from configuration
    pub fn new(config: &PlatformConfig) -> Result<Self, PlatformError> {
        let api_host = config.api_host.trim().trim_end_matches('/').to_string();
        if api_host.is_empty() {
            return Err(PlatformError::Config("API host is empty".to_string()));
        }

        if config.timeout.is_zero() {
            return Err(PlatformError::Config("timeout must be greater than zero".to_string()));
        }

        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            api_host,
            api_key: config.api_key.clone(),
            debug: config.debug,
        })
    }

    /// Build a client from `MODELDECK_*` environment variables
    pub fn from_env() -> Result<Self, PlatformError> {
        Self::new(&PlatformConfig::from_env())
    }

    /// Base URL requests are sent to
    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .get(format!("{}{}", self.api_host, path))
            .header(ACCEPT, "application/json");

        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    /// Send the request and decode a JSON body
    ///
    /// Non-2xx answers become [`PlatformError::EndpointError`] carrying the response text.
    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        what: &str,
    ) -> Result<T, PlatformError> {
        let request = builder.build()?;
        let request_snapshot = self.debug.then(|| RequestSnapshot::capture(&request));

        let response = self.http.execute(request).await?;
        let status = response.status();
        let response_snapshot = self.debug.then(|| ResponseSnapshot::capture(&response));
        let body = response.text().await?;

        if let (Some(req), Some(res)) = (request_snapshot, response_snapshot) {
            log_exchange(&req, &res.with_body(&body));
        }

        if !status.is_success() {
            return Err(PlatformError::EndpointError {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            PlatformError::InvalidResponse(format!("Failed to parse {} response: {}", what, e))
        })
    }
}

#[async_trait]
impl EndpointLister for PlatformClient {
    async fn list_endpoints(
        &self,
        params: &EndpointListParams,
    ) -> Result<EndpointsList, PlatformError> {
        tracing::debug!(
            model_id = params.model_id,
            version_id = params.version_id,
            is_active = params.is_active,
            "Listing endpoints"
        );
        let builder = self.get(ENDPOINTS_PATH).query(params);
        self.send_json(builder, "endpoints").await
    }
}

#[async_trait]
impl WorkspaceFetcher for PlatformClient {
    async fn get_workspace(&self) -> Result<Workspace, PlatformError> {
        tracing::debug!("Fetching current workspace");
        let builder = self.get(WORKSPACES_PATH);
        self.send_json(builder, "workspace").await
    }
}
