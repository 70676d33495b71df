//! Per-view projections of an [`AnalysisResponse`].
//!
//! Every function borrows the response and builds the minimal shape one view
//! needs. Date indexed series from different symbols are aligned on the
//! sorted union of their dates; a symbol without a value on some date yields
//! `None` for that cell, never a synthetic zero.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::analysis::{AnalysisResponse, EvalScores, Recommendation};

/// Line colors assigned by ordinal position of a series.
pub const SERIES_COLORS: [&str; 5] = ["#4F46E5", "#10B981", "#F59E0B", "#EF4444", "#3B82F6"];

/// Placeholder for a table cell without a value.
pub const MISSING_CELL: &str = "–";

/// Labels of the recommendation horizons, matching [`crate::ActionSet::horizons`].
pub const HORIZON_LABELS: [&str; 3] = ["1-Day", "7-Day", "14-Day"];

pub fn series_color(ordinal: usize) -> &'static str {
    SERIES_COLORS[ordinal % SERIES_COLORS.len()]
}

/// Render an optional number for a table cell.
pub fn display_value(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => MISSING_CELL.to_string(),
    }
}

/// Date aligned values for several keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesTable {
    pub keys: Vec<String>,
    pub rows: Vec<SeriesRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRow {
    pub date: NaiveDate,
    /// One slot per entry of [`SeriesTable::keys`]
    pub values: Vec<Option<f64>>,
}

impl SeriesTable {
    /// Align keyed series on the sorted union of their dates.
    fn align(series: Vec<(String, BTreeMap<NaiveDate, f64>)>) -> Self {
        let dates: BTreeSet<NaiveDate> = series
            .iter()
            .flat_map(|(_, points)| points.keys().copied())
            .collect();

        let rows = dates
            .into_iter()
            .map(|date| SeriesRow {
                date,
                values: series
                    .iter()
                    .map(|(_, points)| points.get(&date).copied())
                    .collect(),
            })
            .collect();

        Self {
            keys: series.into_iter().map(|(key, _)| key).collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn key_index(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// Value of `key` in row `row`.
    pub fn value(&self, row: usize, key: &str) -> Option<f64> {
        let idx = self.key_index(key)?;
        self.rows.get(row)?.values.get(idx).copied().flatten()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|r| r.date).collect()
    }

    /// All values of one key in row order.
    pub fn column(&self, key: &str) -> Vec<Option<f64>> {
        match self.key_index(key) {
            Some(idx) => self.rows.iter().map(|r| r.values[idx]).collect(),
            None => Vec::new(),
        }
    }
}

/// Forecast chart data: one row per forecast date, one key per symbol with
/// forecast points.
pub fn forecast_table(response: &AnalysisResponse) -> SeriesTable {
    let series = response
        .iter()
        .filter_map(|(symbol, analysis)| {
            let points = analysis.predictions.as_ref().filter(|p| !p.is_empty())?;
            let by_date: BTreeMap<NaiveDate, f64> =
                points.iter().map(|p| (p.date, p.predicted)).collect();
            Some((symbol.clone(), by_date))
        })
        .collect();
    SeriesTable::align(series)
}

/// Normalized performance chart data.
pub fn normalized_table(response: &AnalysisResponse) -> SeriesTable {
    let series = response
        .iter()
        .filter_map(|(symbol, analysis)| {
            let normalized = analysis.normalized.as_ref().filter(|n| !n.dates.is_empty())?;
            let by_date: BTreeMap<NaiveDate, f64> = normalized
                .dates
                .iter()
                .copied()
                .zip(normalized.values.iter().copied())
                .collect();
            Some((symbol.clone(), by_date))
        })
        .collect();
    SeriesTable::align(series)
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsRow {
    pub symbol: String,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
}

pub fn stats_rows(response: &AnalysisResponse) -> Vec<StatsRow> {
    response
        .iter()
        .filter_map(|(symbol, analysis)| {
            let stats = analysis.summary_stats.as_ref()?;
            Some(StatsRow {
                symbol: symbol.clone(),
                mean: stats.mean,
                median: stats.median,
                std: stats.std,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionRow {
    pub symbol: String,
    /// Recommendations in [`HORIZON_LABELS`] order
    pub horizons: [Option<Recommendation>; 3],
}

pub fn action_rows(response: &AnalysisResponse) -> Vec<ActionRow> {
    response
        .iter()
        .filter_map(|(symbol, analysis)| {
            let actions = analysis.actions.as_ref()?;
            Some(ActionRow {
                symbol: symbol.clone(),
                horizons: actions.horizons().map(|r| r.cloned()),
            })
        })
        .collect()
}

/// Which set of evaluation columns a table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    /// AIC / BIC
    InformationCriteria,
    /// Train % / Test %
    Accuracy,
}

impl ModelFamily {
    pub fn of(scores: &EvalScores) -> Self {
        match scores {
            EvalScores::InformationCriteria { .. } => ModelFamily::InformationCriteria,
            EvalScores::Accuracy { .. } => ModelFamily::Accuracy,
        }
    }

    pub fn column_labels(self) -> [&'static str; 2] {
        match self {
            ModelFamily::InformationCriteria => ["AIC", "BIC"],
            ModelFamily::Accuracy => ["Train %", "Test %"],
        }
    }

    /// Project scores onto this family's two columns. Scores of the other
    /// family have no value in these columns.
    pub fn cells(self, scores: &EvalScores) -> [Option<f64>; 2] {
        match (self, scores) {
            (ModelFamily::InformationCriteria, EvalScores::InformationCriteria { aic, bic }) => {
                [Some(*aic), Some(*bic)]
            }
            (ModelFamily::Accuracy, EvalScores::Accuracy { train, test }) => [*train, *test],
            _ => [None, None],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvalRow {
    pub symbol: String,
    pub cells: [Option<f64>; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvalTable {
    pub family: ModelFamily,
    pub rows: Vec<EvalRow>,
    /// Some rows belong to the other model family and show no values
    pub mixed: bool,
}

/// Evaluation table. The column set is decided once from the first symbol's
/// scores and applied to every row.
pub fn eval_table(response: &AnalysisResponse) -> EvalTable {
    let family = response
        .iter()
        .next()
        .and_then(|(_, analysis)| analysis.eval_scores.as_ref())
        .map(ModelFamily::of)
        .unwrap_or(ModelFamily::Accuracy);

    let mut mixed = false;
    let rows = response
        .iter()
        .filter_map(|(symbol, analysis)| {
            let scores = analysis.eval_scores.as_ref()?;
            mixed |= ModelFamily::of(scores) != family;
            Some(EvalRow {
                symbol: symbol.clone(),
                cells: family.cells(scores),
            })
        })
        .collect();

    EvalTable { family, rows, mixed }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BollingerRow {
    pub date: NaiveDate,
    pub upper: Option<f64>,
    pub lower: Option<f64>,
    pub close: Option<f64>,
}

/// Bollinger chart data taken from the index symbol, zipped by position and
/// truncated to the shortest of the four series. Missing band values stay
/// `None` so the chart shows a gap.
pub fn bollinger_rows(response: &AnalysisResponse) -> Option<Vec<BollingerRow>> {
    let bands = response.index()?.bollinger.as_ref()?;
    let rows = bands
        .dates
        .iter()
        .zip(&bands.upper)
        .zip(&bands.lower)
        .zip(&bands.close)
        .map(|(((date, upper), lower), close)| BollingerRow {
            date: *date,
            upper: *upper,
            lower: *lower,
            close: *close,
        })
        .collect();
    Some(rows)
}

/// Symbols the service reported as failed, with their messages.
pub fn symbol_errors(response: &AnalysisResponse) -> Vec<(String, String)> {
    response
        .iter()
        .filter_map(|(symbol, analysis)| {
            analysis
                .error
                .as_ref()
                .map(|message| (symbol.clone(), message.clone()))
        })
        .collect()
}
