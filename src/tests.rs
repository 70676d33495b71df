#[cfg(test)]
mod integration_tests {
    use crate::config::ServerConfig;
    use crate::schemas::HealthResponse;
    use crate::test_utils::test_utils::{
        BAD_RANGE_SYMBOL, CRASH_SYMBOL, SLOW_SYMBOL, closed_upstream_url, date, setup_test_app,
        spawn_fake_upstream, test_config,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{AnalysisResponse, AnalyzeRequest, ErrorBody};
    use serde_json::json;

    fn request(symbols: &[&str]) -> AnalyzeRequest {
        AnalyzeRequest::new(
            symbols.iter().map(|s| s.to_string()).collect(),
            date("2024-01-02"),
            date("2024-03-29"),
        )
    }

    fn server(config: ServerConfig) -> TestServer {
        TestServer::new(setup_test_app(config)).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let upstream = spawn_fake_upstream().await;
        let server = server(test_config(&upstream.url));

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.upstream, "reachable");
    }

    #[tokio::test]
    async fn test_health_check_reports_unreachable_upstream() {
        let server = server(test_config(&closed_upstream_url().await));

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.upstream, "unreachable");
    }

    #[tokio::test]
    async fn test_analyze_relays_successful_response() {
        let upstream = spawn_fake_upstream().await;
        let server = server(test_config(&upstream.url));

        let response = server.post("/api/analyze").json(&request(&["AAPL", "MSFT"])).await;

        response.assert_status(StatusCode::OK);
        let body: AnalysisResponse = response.json();
        assert_eq!(body.symbols().collect::<Vec<_>>(), vec!["AAPL", "MSFT", "SPY"]);
        assert_eq!(body.get("AAPL").unwrap().predictions.as_ref().unwrap().len(), 7);
        assert_eq!(upstream.calls(), 1);
    }

    #[tokio::test]
    async fn test_analyze_rejects_invalid_symbol_count() {
        let upstream = spawn_fake_upstream().await;
        let server = server(test_config(&upstream.url));

        let response = server.post("/api/analyze").json(&request(&[])).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.error, "Provide between 1–4 symbols");

        let response = server
            .post("/api/analyze")
            .json(&request(&["AAPL", "MSFT", "NVDA", "AMZN", "TSLA"]))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.error, "Provide between 1–4 symbols");

        assert_eq!(upstream.calls(), 0);
    }

    #[tokio::test]
    async fn test_analyze_rejects_missing_and_inverted_dates() {
        let upstream = spawn_fake_upstream().await;
        let server = server(test_config(&upstream.url));

        let response = server
            .post("/api/analyze")
            .json(&json!({ "symbols": ["AAPL"], "start": "2024-01-02" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.error, "start and end required");

        let inverted = AnalyzeRequest::new(vec!["AAPL".into()], date("2024-03-29"), date("2024-01-02"));
        let response = server.post("/api/analyze").json(&inverted).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.error, "end must not be before start");

        assert_eq!(upstream.calls(), 0);
    }

    #[tokio::test]
    async fn test_analyze_rejects_undecodable_body() {
        let upstream = spawn_fake_upstream().await;
        let server = server(test_config(&upstream.url));

        let response = server
            .post("/api/analyze")
            .json(&json!({ "symbols": "AAPL", "start": "yesterday" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert!(!body.error.is_empty());
        assert_eq!(upstream.calls(), 0);
    }

    #[tokio::test]
    async fn test_upstream_error_body_is_relayed_verbatim() {
        let upstream = spawn_fake_upstream().await;
        let server = server(test_config(&upstream.url));

        let response = server.post("/api/analyze").json(&request(&[BAD_RANGE_SYMBOL])).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.error, "bad date range");
    }

    #[tokio::test]
    async fn test_upstream_plain_text_failure_is_relayed() {
        let upstream = spawn_fake_upstream().await;
        let server = server(test_config(&upstream.url));

        let response = server.post("/api/analyze").json(&request(&[CRASH_SYMBOL])).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "internal failure");
    }

    #[tokio::test]
    async fn test_successful_responses_are_cached() {
        let upstream = spawn_fake_upstream().await;
        let server = server(test_config(&upstream.url));

        let first = server.post("/api/analyze").json(&request(&["AAPL"])).await;
        let second = server.post("/api/analyze").json(&request(&["AAPL"])).await;

        first.assert_status(StatusCode::OK);
        second.assert_status(StatusCode::OK);
        assert_eq!(first.text(), second.text());
        assert_eq!(upstream.calls(), 1);

        let other = server.post("/api/analyze").json(&request(&["MSFT"])).await;
        other.assert_status(StatusCode::OK);
        assert_eq!(upstream.calls(), 2);
    }

    #[tokio::test]
    async fn test_cache_ignores_symbol_case() {
        let upstream = spawn_fake_upstream().await;
        let server = server(test_config(&upstream.url));

        let first = server.post("/api/analyze").json(&request(&["aapl"])).await;
        let second = server.post("/api/analyze").json(&request(&["AAPL"])).await;

        first.assert_status(StatusCode::OK);
        second.assert_status(StatusCode::OK);
        assert_eq!(upstream.calls(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let upstream = spawn_fake_upstream().await;
        let server = server(test_config(&upstream.url));

        for _ in 0..2 {
            let response = server.post("/api/analyze").json(&request(&[BAD_RANGE_SYMBOL])).await;
            response.assert_status(StatusCode::BAD_REQUEST);
        }
        assert_eq!(upstream.calls(), 2);
    }

    #[tokio::test]
    async fn test_zero_ttl_disables_cache() {
        let upstream = spawn_fake_upstream().await;
        let config = ServerConfig {
            cache_ttl_secs: 0,
            ..test_config(&upstream.url)
        };
        let server = server(config);

        for _ in 0..2 {
            let response = server.post("/api/analyze").json(&request(&["AAPL"])).await;
            response.assert_status(StatusCode::OK);
        }
        assert_eq!(upstream.calls(), 2);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_maps_to_bad_gateway() {
        let server = server(test_config(&closed_upstream_url().await));

        let response = server.post("/api/analyze").json(&request(&["AAPL"])).await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: ErrorBody = response.json();
        assert_eq!(body.error, "Analysis service unavailable");
    }

    #[tokio::test]
    async fn test_slow_upstream_maps_to_gateway_timeout() {
        let upstream = spawn_fake_upstream().await;
        let server = server(test_config(&upstream.url));

        let response = server.post("/api/analyze").json(&request(&[SLOW_SYMBOL])).await;

        response.assert_status(StatusCode::GATEWAY_TIMEOUT);
        let body: ErrorBody = response.json();
        assert_eq!(body.error, "Analysis service timed out");
    }

    #[tokio::test]
    async fn test_frontend_is_served_with_index_fallback() {
        let upstream = spawn_fake_upstream().await;
        let static_dir = std::env::temp_dir().join(format!("stockcast-static-{}", std::process::id()));
        std::fs::create_dir_all(&static_dir).unwrap();
        std::fs::write(static_dir.join("index.html"), "<html>dashboard</html>").unwrap();
        std::fs::write(static_dir.join("app.js"), "run()").unwrap();

        let config = ServerConfig {
            static_dir: static_dir.clone(),
            ..test_config(&upstream.url)
        };
        let server = server(config);

        let asset = server.get("/app.js").await;
        asset.assert_status(StatusCode::OK);
        assert_eq!(asset.text(), "run()");

        let page = server.get("/some/client/route").await;
        page.assert_status(StatusCode::OK);
        assert_eq!(page.text(), "<html>dashboard</html>");

        std::fs::remove_dir_all(&static_dir).ok();
    }
}
