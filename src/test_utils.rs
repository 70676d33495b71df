#[cfg(test)]
pub mod test_utils {
    use crate::config::{ServerConfig, initialize_app_state};
    use crate::router::create_router;
    use axum::{
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Json, Response},
        routing::post,
        Router,
    };
    use chrono::NaiveDate;
    use common::{
        AnalysisResponse, AnalyzeRequest, EvalScores, ForecastPoint, INDEX_SYMBOL, SymbolAnalysis,
    };
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::net::TcpListener;

    /// Symbol that makes the fake service answer `400 {"error": "bad date range"}`
    pub const BAD_RANGE_SYMBOL: &str = "BAD";
    /// Symbol that makes the fake service answer a plain text 500
    pub const CRASH_SYMBOL: &str = "BOOM";
    /// Symbol that makes the fake service stall past the test timeout
    pub const SLOW_SYMBOL: &str = "SLOW";

    /// In-process stand-in for the analysis service.
    pub struct FakeUpstream {
        pub url: String,
        calls: Arc<AtomicUsize>,
    }

    impl FakeUpstream {
        /// Number of `/analyze` requests received so far
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    /// Successful analysis for the requested symbols plus the index symbol.
    pub fn sample_response(request: &AnalyzeRequest) -> AnalysisResponse {
        let start = request.start.unwrap_or_default();
        let mut response = AnalysisResponse::new();
        for symbol in request
            .symbols
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(INDEX_SYMBOL))
        {
            let predictions = (1..=7)
                .map(|day| ForecastPoint {
                    date: start + chrono::Days::new(day),
                    predicted: 100.0 + day as f64,
                })
                .collect();
            response.insert(
                symbol,
                SymbolAnalysis {
                    predictions: Some(predictions),
                    eval_scores: Some(EvalScores::InformationCriteria { aic: 1.0, bic: 2.0 }),
                    ..Default::default()
                },
            );
        }
        response
    }

    async fn fake_analyze(
        State(calls): State<Arc<AtomicUsize>>,
        Json(request): Json<AnalyzeRequest>,
    ) -> Response {
        calls.fetch_add(1, Ordering::SeqCst);
        match request.symbols.first().map(String::as_str) {
            Some(BAD_RANGE_SYMBOL) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "bad date range" })),
            )
                .into_response(),
            Some(CRASH_SYMBOL) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal failure").into_response()
            }
            Some(SLOW_SYMBOL) => {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(sample_response(&request)).into_response()
            }
            _ => Json(sample_response(&request)).into_response(),
        }
    }

    /// Spawn the fake analysis service on an ephemeral port.
    pub async fn spawn_fake_upstream() -> FakeUpstream {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/analyze", post(fake_analyze))
            .with_state(calls.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake upstream");
        let addr = listener.local_addr().expect("Fake upstream has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        FakeUpstream {
            url: format!("http://{}", addr),
            calls,
        }
    }

    /// URL on which nothing listens.
    pub async fn closed_upstream_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind probe listener");
        let addr = listener.local_addr().expect("Probe listener has no address");
        drop(listener);
        format!("http://{}", addr)
    }

    pub fn test_config(upstream_url: &str) -> ServerConfig {
        ServerConfig {
            bind_address: "127.0.0.1:0".to_string(),
            upstream_url: upstream_url.to_string(),
            static_dir: PathBuf::from("does-not-exist"),
            request_timeout_secs: 1,
            cache_ttl_secs: 60,
            cache_capacity: 16,
        }
    }

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// Initialize tracing for tests with output captured by the test harness.
    ///
    /// The filter comes from `RUST_LOG` and defaults to `warn`.
    fn init_test_tracing() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }

    /// Create axum app for testing
    pub fn setup_test_app(config: ServerConfig) -> Router {
        init_test_tracing();
        let state = initialize_app_state(config).expect("Failed to build app state");
        create_router(state)
    }
}
