use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use common::ErrorBody;
use thiserror::Error;
use tracing::error;

/// Failure of the analysis proxy. The body is always `{"error": "..."}`.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Request rejected before it was forwarded
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Analysis service unavailable")]
    Unavailable(#[source] reqwest::Error),

    #[error("Analysis service timed out")]
    TimedOut,
}

impl ProxyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Unavailable(_) => StatusCode::BAD_GATEWAY,
            ProxyError::TimedOut => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProxyError::TimedOut
        } else {
            ProxyError::Unavailable(err)
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match &self {
            ProxyError::Unavailable(source) => error!("Analysis service unavailable: {}", source),
            ProxyError::TimedOut => error!("Analysis service timed out"),
            ProxyError::InvalidRequest(_) => {}
        }
        (self.status_code(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
