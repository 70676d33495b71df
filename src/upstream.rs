use anyhow::{Context, Result};
use axum::http::{HeaderValue, StatusCode};
use common::AnalyzeRequest;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::ProxyError;

const PING_TIMEOUT: Duration = Duration::from_secs(2);

/// Client of the analysis service.
#[derive(Debug, Clone)]
pub struct AnalysisUpstream {
    http: reqwest::Client,
    base_url: String,
}

/// Reply of the analysis service, relayed to the browser as is.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: String,
}

impl AnalysisUpstream {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build reqwest client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Forward one analysis request. Every HTTP response counts as a reply,
    /// only transport failures become errors.
    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<UpstreamReply, ProxyError> {
        let url = format!("{}/analyze", self.base_url);
        debug!("Forwarding analysis request to {}", url);

        let response = self.http.post(&url).json(request).send().await?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| HeaderValue::from_bytes(v.as_bytes()).ok());
        let body = response.text().await?;

        debug!(status = %status, bytes = body.len(), "Analysis service replied");
        Ok(UpstreamReply {
            status,
            content_type,
            body,
        })
    }

    /// Whether the analysis service answers HTTP at all.
    pub async fn ping(&self) -> bool {
        match self.http.get(&self.base_url).timeout(PING_TIMEOUT).send().await {
            Ok(_) => true,
            Err(e) => {
                warn!("Analysis service not reachable: {}", e);
                false
            }
        }
    }
}
