use chrono::NaiveDate;
use tracing::debug;

use crate::error::{FormError, TickerRejection};
use crate::request::AnalyzeRequest;

/// Maximum number of symbols in one analysis request.
pub const MAX_SYMBOLS: usize = 4;

/// Normalize raw ticker input: trim, uppercase, keep the part before the
/// first comma and drop a leading `$`.
pub fn normalize_symbol(raw: &str) -> Option<String> {
    let upper = raw.trim().to_uppercase();
    let first = upper.split(',').next().unwrap_or_default().trim();
    let symbol = first.strip_prefix('$').unwrap_or(first);
    if symbol.is_empty() {
        None
    } else {
        Some(symbol.to_string())
    }
}

/// Ordered, duplicate free list of at most [`MAX_SYMBOLS`] tickers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerList {
    symbols: Vec<String>,
}

impl TickerList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ticker from raw user input and return the normalized symbol.
    pub fn add(&mut self, raw: &str) -> Result<String, TickerRejection> {
        let symbol = normalize_symbol(raw).ok_or(TickerRejection::Empty)?;
        if self.contains(&symbol) {
            return Err(TickerRejection::Duplicate(symbol));
        }
        if self.is_full() {
            return Err(TickerRejection::LimitReached);
        }
        debug!(%symbol, "ticker added");
        self.symbols.push(symbol.clone());
        Ok(symbol)
    }

    /// Remove a ticker, returning whether it was present.
    pub fn remove(&mut self, symbol: &str) -> bool {
        let before = self.symbols.len();
        self.symbols.retain(|s| s != symbol);
        before != self.symbols.len()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.symbols.len() >= MAX_SYMBOLS
    }
}

/// State of the ticker and date range form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisForm {
    pub tickers: TickerList,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl AnalysisForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn set_start(&mut self, start: Option<NaiveDate>) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: Option<NaiveDate>) {
        self.end = end;
    }

    /// Check the form against the picker rules: at least one symbol, both
    /// dates set, `end >= start` and neither date after `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate), FormError> {
        if self.tickers.is_empty() {
            return Err(FormError::NoSymbols);
        }
        let start = self.start.ok_or(FormError::MissingStart)?;
        let end = self.end.ok_or(FormError::MissingEnd)?;
        if start > today || end > today {
            return Err(FormError::FutureDate);
        }
        if end < start {
            return Err(FormError::EndBeforeStart);
        }
        Ok((start, end))
    }

    /// Build the request body for the analysis service.
    pub fn request(&self, today: NaiveDate) -> Result<AnalyzeRequest, FormError> {
        let (start, end) = self.validate(today)?;
        Ok(AnalyzeRequest::new(self.tickers.symbols().to_vec(), start, end))
    }

    /// Submission is only possible while idle and with a valid form.
    pub fn can_submit(&self, busy: bool, today: NaiveDate) -> bool {
        !busy && self.validate(today).is_ok()
    }
}
