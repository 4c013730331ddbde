use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::de::IgnoredAny;

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::core::http_client::build_http_client;
use crate::features::chamber::dto::{FilterValue, UpstreamResponse};
use crate::features::chamber::helpers::{build_request_url, to_query_pairs};

const DEPUTIES_PATH: &str = "deputados";

#[async_trait]
pub trait ChamberDataSource: Send + Sync {
    async fn fetch_deputies(
        &self,
        filters: Vec<(&'static str, FilterValue)>,
    ) -> Result<UpstreamResponse, AppError>;

    async fn fetch_deputy(&self, id: i64) -> Result<UpstreamResponse, AppError>;
}

pub struct ChamberClient {
    config: Arc<AppConfig>,
    http_client: reqwest::Client,
}

impl ChamberClient {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, AppError> {
        let timeout = Duration::from_secs(config.upstream_timeout_secs);
        let http_client = build_http_client(timeout, config.disable_proxy)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.upstream_base_url
    }

    // Single attempt: no retry, and the upstream status is kept as-is.
    async fn execute_request(&self, url: Url) -> Result<UpstreamResponse, AppError> {
        tracing::debug!(%url, "forwarding request upstream");

        let response = self.http_client.get(url.clone()).send().await.map_err(|err| {
            if err.is_timeout() {
                tracing::warn!(
                    %url,
                    timeout_secs = self.config.upstream_timeout_secs,
                    "upstream request timed out"
                );
                return AppError::upstream(format!(
                    "request to {url} timed out after {}s",
                    self.config.upstream_timeout_secs
                ));
            }
            tracing::warn!(%url, error = %err, "upstream request failed");
            AppError::upstream(format!("network error contacting {url}: {err}"))
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|err| {
            tracing::warn!(%url, %status, error = %err, "failed to read upstream body");
            AppError::upstream(format!("failed to read response from {url}: {err}"))
        })?;

        if serde_json::from_slice::<IgnoredAny>(&body).is_err() {
            tracing::warn!(%url, %status, "upstream returned a non-JSON body");
            return Err(AppError::upstream(format!(
                "request to {url} returned a non-JSON body with {status}"
            )));
        }

        if !status.is_success() {
            tracing::warn!(%url, %status, "upstream returned a non-success status");
        }

        Ok(UpstreamResponse { status, body })
    }
}

#[async_trait]
impl ChamberDataSource for ChamberClient {
    async fn fetch_deputies(
        &self,
        filters: Vec<(&'static str, FilterValue)>,
    ) -> Result<UpstreamResponse, AppError> {
        let pairs = to_query_pairs(&filters);
        let url = build_request_url(self.base_url(), DEPUTIES_PATH, &pairs)?;
        self.execute_request(url).await
    }

    async fn fetch_deputy(&self, id: i64) -> Result<UpstreamResponse, AppError> {
        let url = build_request_url(self.base_url(), &format!("{DEPUTIES_PATH}/{id}"), &[])?;
        self.execute_request(url).await
    }
}
