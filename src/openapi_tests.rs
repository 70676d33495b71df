#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;

    fn object_properties(name: &str) -> Vec<String> {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        match components.schemas.get(name).unwrap() {
            utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) => {
                obj.properties.keys().cloned().collect()
            }
            _ => panic!("{} should be an object schema", name),
        }
    }

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        for name in ["ErrorBody", "HealthResponse", "AnalyzeRequest", "AnalysisResponse", "SymbolAnalysis"] {
            assert!(components.schemas.contains_key(name), "missing schema {}", name);
        }

        assert!(serde_json::to_string(&openapi).is_ok());
    }

    #[test]
    fn test_health_response_schema_structure() {
        let properties = object_properties("HealthResponse");
        for field in ["status", "version", "upstream"] {
            assert!(properties.contains(&field.to_string()));
        }
    }

    #[test]
    fn test_analyze_request_schema_structure() {
        let properties = object_properties("AnalyzeRequest");
        for field in ["symbols", "start", "end"] {
            assert!(properties.contains(&field.to_string()));
        }
    }

    #[test]
    fn test_symbol_analysis_uses_wire_names() {
        let properties = object_properties("SymbolAnalysis");
        for field in ["predictions", "evalScores", "summaryStats", "bollinger", "error"] {
            assert!(properties.contains(&field.to_string()), "missing {}", field);
        }
    }

    #[test]
    fn test_openapi_paths() {
        let openapi = ApiDoc::openapi();

        let health = openapi.paths.paths.get("/health").unwrap();
        assert!(health.operations.contains_key(&utoipa::openapi::PathItemType::Get));

        let analyze = openapi.paths.paths.get("/api/analyze").unwrap();
        let post = analyze
            .operations
            .get(&utoipa::openapi::PathItemType::Post)
            .unwrap();
        for status in ["200", "400", "502", "504"] {
            assert!(post.responses.responses.contains_key(status), "missing {}", status);
        }
    }
}
