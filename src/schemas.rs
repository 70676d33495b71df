use common::{
    ActionSet, AnalysisResponse, AnalyzeRequest, BollingerSeries, ErrorBody, ForecastPoint,
    NormalizedSeries, Recommendation, SummaryStats, SymbolAnalysis,
};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::config::ServerConfig;
use crate::upstream::AnalysisUpstream;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Resolved configuration
    pub config: Arc<ServerConfig>,
    /// Analysis service client
    pub upstream: AnalysisUpstream,
    /// Successful analysis bodies keyed by canonical request, `None` when disabled
    pub cache: Option<Cache<String, String>>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Analysis service reachability
    pub upstream: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::analyze::analyze,
    ),
    components(
        schemas(
            ErrorBody,
            HealthResponse,
            AnalyzeRequest,
            AnalysisResponse,
            SymbolAnalysis,
            ForecastPoint,
            NormalizedSeries,
            SummaryStats,
            BollingerSeries,
            ActionSet,
            Recommendation,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "analysis", description = "Stock forecast analysis"),
    ),
    info(
        title = "stockcast API",
        description = "Dashboard server for multi-symbol stock forecasts",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
