use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use common::{AnalysisResponse, AnalyzeRequest, ErrorBody};
use tracing::{debug, info, instrument};

use crate::error::ProxyError;
use crate::schemas::AppState;
use crate::upstream::UpstreamReply;

/// Forward an analysis request to the analysis service.
///
/// The request is validated first; the upstream status and body are then
/// relayed unchanged. Successful bodies are cached per canonical request.
#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis results keyed by symbol", body = AnalysisResponse),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 502, description = "Analysis service unavailable", body = ErrorBody),
        (status = 504, description = "Analysis service timed out", body = ErrorBody)
    )
)]
#[instrument(skip(state, payload))]
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Response, ProxyError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected analysis body: {}", rejection.body_text());
        ProxyError::InvalidRequest(rejection.body_text())
    })?;
    request.check().map_err(ProxyError::InvalidRequest)?;

    let key = request.cache_key();
    if let Some(cache) = &state.cache {
        if let Some(body) = cache.get(&key).await {
            debug!("Cache hit for {}", key);
            return Ok(json_response(StatusCode::OK, body));
        }
    }

    info!(symbols = ?request.symbols, "Requesting analysis");
    let reply = state.upstream.analyze(&request).await?;

    if reply.status.is_success() {
        if let Some(cache) = &state.cache {
            cache.insert(key, reply.body.clone()).await;
        }
    }
    Ok(relay(reply))
}

fn json_response(status: StatusCode, body: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response()
}

fn relay(reply: UpstreamReply) -> Response {
    let content_type = reply
        .content_type
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    (reply.status, [(header::CONTENT_TYPE, content_type)], reply.body).into_response()
}
