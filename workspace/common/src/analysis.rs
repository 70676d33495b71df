//! Wire model of the analysis service response.
//!
//! The response is a JSON object keyed by ticker symbol. Every per-symbol
//! sub-record is optional: the service omits sections it could not compute
//! and may replace the whole record with `{"error": "..."}` when a single
//! symbol fails.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Market index symbol that carries the Bollinger band series.
pub const INDEX_SYMBOL: &str = "SPY";

/// Analysis results keyed by symbol.
///
/// The service serializes with sorted keys, so a sorted map reproduces the
/// symbol order the views are expected to show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct AnalysisResponse(pub BTreeMap<String, SymbolAnalysis>);

impl AnalysisResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: impl Into<String>, analysis: SymbolAnalysis) {
        self.0.insert(symbol.into(), analysis);
    }

    pub fn get(&self, symbol: &str) -> Option<&SymbolAnalysis> {
        self.0.get(symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SymbolAnalysis)> {
        self.0.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Record of the market index symbol, if present.
    pub fn index(&self) -> Option<&SymbolAnalysis> {
        self.get(INDEX_SYMBOL)
    }

    /// True when at least one symbol carries forecast points.
    pub fn has_forecasts(&self) -> bool {
        self.0
            .values()
            .any(|s| s.predictions.as_ref().is_some_and(|p| !p.is_empty()))
    }
}

impl FromIterator<(String, SymbolAnalysis)> for AnalysisResponse {
    fn from_iter<I: IntoIterator<Item = (String, SymbolAnalysis)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Everything the service computed for one symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SymbolAnalysis {
    /// 7-day forecast
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predictions: Option<Vec<ForecastPoint>>,
    /// Model evaluation scores
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub eval_scores: Option<EvalScores>,
    /// Recommended action per horizon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<ActionSet>,
    /// Performance scaled to 1.0 at the window start
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<NormalizedSeries>,
    /// Summary statistics of the normalized series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_stats: Option<SummaryStats>,
    /// Bollinger bands; the views only draw the index symbol's
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerSeries>,
    /// Set instead of the other fields when this symbol failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    #[serde(alias = "value")]
    pub predicted: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NormalizedSeries {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SummaryStats {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
}

/// Evaluation scores; the variant identifies the model family.
///
/// Information criteria are only chosen when both `aic` and `bic` are present,
/// anything else decodes as accuracy scores with optional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvalScores {
    InformationCriteria {
        aic: f64,
        bic: f64,
    },
    Accuracy {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        train: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        test: Option<f64>,
    },
}

/// Recommendations for the 1, 7 and 14 day horizons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActionSet {
    #[serde(rename = "1", default, skip_serializing_if = "Option::is_none")]
    pub day1: Option<Recommendation>,
    #[serde(rename = "7", default, skip_serializing_if = "Option::is_none")]
    pub day7: Option<Recommendation>,
    #[serde(rename = "14", default, skip_serializing_if = "Option::is_none")]
    pub day14: Option<Recommendation>,
}

impl ActionSet {
    /// Horizons in display order.
    pub fn horizons(&self) -> [Option<&Recommendation>; 3] {
        [self.day1.as_ref(), self.day7.as_ref(), self.day14.as_ref()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub price: f64,
    #[schema(value_type = String)]
    pub action: TradeAction,
}

/// Action label attached to a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TradeAction {
    Buy,
    Hold,
    Sell,
    None,
    Other(String),
}

impl TradeAction {
    pub fn label(&self) -> &str {
        match self {
            TradeAction::Buy => "Buy",
            TradeAction::Hold => "Hold",
            TradeAction::Sell => "Sell",
            TradeAction::None => "None",
            TradeAction::Other(label) => label,
        }
    }
}

impl From<String> for TradeAction {
    fn from(label: String) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "buy" => TradeAction::Buy,
            "hold" => TradeAction::Hold,
            "sell" => TradeAction::Sell,
            "none" => TradeAction::None,
            _ => TradeAction::Other(label),
        }
    }
}

impl From<TradeAction> for String {
    fn from(action: TradeAction) -> Self {
        action.label().to_string()
    }
}

impl std::fmt::Display for TradeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Band values are `null` until the 20 day rolling window has filled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BollingerSeries {
    pub dates: Vec<NaiveDate>,
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
}
