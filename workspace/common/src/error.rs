use thiserror::Error;

use crate::ErrorBody;
use crate::form::MAX_SYMBOLS;

/// Why a ticker could not be added to the selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickerRejection {
    #[error("Enter a ticker symbol")]
    Empty,

    #[error("{0} is already selected")]
    Duplicate(String),

    #[error("Pick at most {} symbols", MAX_SYMBOLS)]
    LimitReached,
}

/// Local validation failure of the analysis form.
///
/// These only disable submission; they are never shown as an error banner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Add at least one symbol")]
    NoSymbols,

    #[error("Pick a start date")]
    MissingStart,

    #[error("Pick an end date")]
    MissingEnd,

    #[error("End date must not be before start date")]
    EndBeforeStart,

    #[error("Dates must not be in the future")]
    FutureDate,
}

/// Failure of a single analysis request.
///
/// `Display` yields the one message surfaced to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzeError {
    /// The request never produced an HTTP response
    #[error("Failed to fetch")]
    Transport(String),

    /// Non-success HTTP status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Success status but the body is not an analysis response
    #[error("Malformed analysis response: {0}")]
    Malformed(String),
}

impl AnalyzeError {
    /// Build the error for a non-success response.
    ///
    /// A structured `{"error": "..."}` body is surfaced verbatim, anything
    /// else falls back to a status coded message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) if !parsed.error.is_empty() => parsed.error,
            _ => format!("Server error (status {})", status),
        };
        AnalyzeError::Server { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AnalyzeError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure while building the CSV export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV flush error: {0}")]
    Flush(String),

    #[error("CSV encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_error_is_surfaced_verbatim() {
        let err = AnalyzeError::from_response(400, r#"{"error":"bad date range"}"#);
        assert_eq!(err.to_string(), "bad date range");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_unparseable_body_falls_back_to_status() {
        let err = AnalyzeError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Server error (status 502)");

        let empty = AnalyzeError::from_response(500, "");
        assert_eq!(empty.to_string(), "Server error (status 500)");
    }

    #[test]
    fn test_blank_error_field_falls_back_to_status() {
        let err = AnalyzeError::from_response(404, r#"{"error":""}"#);
        assert_eq!(err.to_string(), "Server error (status 404)");
    }

    #[test]
    fn test_transport_message_is_generic() {
        let err = AnalyzeError::Transport("NetworkError when attempting to fetch resource.".into());
        assert_eq!(err.to_string(), "Failed to fetch");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_ticker_rejection_messages() {
        assert_eq!(TickerRejection::LimitReached.to_string(), "Pick at most 4 symbols");
        assert_eq!(
            TickerRejection::Duplicate("AAPL".into()).to_string(),
            "AAPL is already selected"
        );
    }
}
