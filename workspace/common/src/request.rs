use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// Body of `POST /analyze`.
///
/// Dates serialize as ISO calendar dates (`YYYY-MM-DD`). They are optional on
/// the wire so that a missing date can be reported with the same message the
/// analysis service uses instead of a generic decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeRequest {
    /// Ticker symbols to analyze (1 to 4)
    #[validate(length(min = 1, max = 4, message = "Provide between 1–4 symbols"))]
    pub symbols: Vec<String>,
    /// First day of the history window
    #[validate(required(message = "start and end required"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    /// Last day of the history window
    #[validate(required(message = "start and end required"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl AnalyzeRequest {
    pub fn new(symbols: Vec<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            symbols,
            start: Some(start),
            end: Some(end),
        }
    }

    /// Validate and collapse the result into the first human readable message.
    ///
    /// The symbol and date presence messages match the analysis service's own;
    /// the reversed range message is this server's, the service does not check it.
    pub fn check(&self) -> Result<(), String> {
        self.validate().map_err(|errors| first_message(&errors))?;
        match (self.start, self.end) {
            (Some(start), Some(end)) if end < start => Err("end must not be before start".to_string()),
            _ => Ok(()),
        }
    }

    /// Canonical key used to cache upstream answers for identical requests.
    /// Symbols are compared case-insensitively, as the service uppercases them.
    pub fn cache_key(&self) -> String {
        let symbols = self
            .symbols
            .iter()
            .map(|s| s.trim().to_uppercase())
            .collect::<Vec<_>>()
            .join(",");
        let start = self.start.map(|d| d.to_string()).unwrap_or_default();
        let end = self.end.map(|d| d.to_string()).unwrap_or_default();
        format!("{}|{}|{}", symbols, start, end)
    }
}

/// Fields are checked in a fixed order so the reported message is stable.
fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    ["symbols", "start", "end"]
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request".to_string())
}
