use common::{AnalysisResponse, AnalyzeError, AnalyzeRequest};
use gloo_net::http::Request;

use crate::settings;

pub const ANALYZE_ENDPOINT: &str = "/analyze";

/// Send one analysis request. There are no retries; every failure is
/// reported through [`AnalyzeError`].
pub async fn analyze(request: &AnalyzeRequest) -> Result<AnalysisResponse, AnalyzeError> {
    let url = settings::get_settings().api_url(ANALYZE_ENDPOINT);
    log::debug!("POST request to: {} for {:?}", url, request.symbols);

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| {
            log::error!("POST {} - Failed to serialize request: {}", ANALYZE_ENDPOINT, e);
            AnalyzeError::Transport(e.to_string())
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {} - Request failed: {}", ANALYZE_ENDPOINT, e);
            AnalyzeError::Transport(e.to_string())
        })?;

    if !response.ok() {
        let status = response.status();
        log::warn!("POST {} - Non-OK response: {}", ANALYZE_ENDPOINT, status);
        let body = response.text().await.unwrap_or_default();
        let err = AnalyzeError::from_response(status, &body);
        log::error!("POST {} - API error: {}", ANALYZE_ENDPOINT, err);
        return Err(err);
    }

    log::trace!("POST {} - Response received, parsing JSON", ANALYZE_ENDPOINT);
    let body = response.text().await.map_err(|e| {
        log::error!("POST {} - Failed to read body: {}", ANALYZE_ENDPOINT, e);
        AnalyzeError::Transport(e.to_string())
    })?;
    let analysis: AnalysisResponse = serde_json::from_str(&body).map_err(|e| {
        log::error!("POST {} - Failed to parse response: {}", ANALYZE_ENDPOINT, e);
        AnalyzeError::Malformed(e.to_string())
    })?;

    log::info!("POST {} - Success, {} symbols", ANALYZE_ENDPOINT, analysis.len());
    Ok(analysis)
}
