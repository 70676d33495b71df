//! Common types shared between the dashboard server and the browser frontend.
//! The wire contract of the analysis service lives here together with the
//! target-independent dashboard logic (form state, session state, the
//! projections feeding each view and the CSV export), so both sides agree on
//! shapes and the logic can be unit tested without a browser.

pub mod analysis;
pub mod error;
pub mod export;
pub mod form;
pub mod projection;
pub mod request;
pub mod session;

pub use analysis::{
    ActionSet, AnalysisResponse, BollingerSeries, EvalScores, ForecastPoint, INDEX_SYMBOL,
    NormalizedSeries, Recommendation, SummaryStats, SymbolAnalysis, TradeAction,
};
pub use error::{AnalyzeError, ExportError, FormError, TickerRejection};
pub use export::{FORECAST_CSV_FILENAME, forecast_csv};
pub use form::{AnalysisForm, MAX_SYMBOLS, TickerList};
pub use request::AnalyzeRequest;
pub use session::{AnalysisSession, Ticket};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by the analysis service (and by the dashboard server
/// when it rejects a request before forwarding it).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorBody {
    /// Human readable error message
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
