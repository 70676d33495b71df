use csv::{Terminator, WriterBuilder};
use tracing::debug;

use crate::analysis::AnalysisResponse;
use crate::error::ExportError;
use crate::projection::forecast_table;

/// File name offered for the forecast download.
pub const FORECAST_CSV_FILENAME: &str = "7_day_forecast.csv";

/// Serialize the forecast table as CSV.
///
/// The header is `Date` followed by one column per symbol with forecast
/// points; rows follow the chart's date order and absent values are written
/// as empty cells. Returns `None` when there is nothing to export.
pub fn forecast_csv(response: &AnalysisResponse) -> Result<Option<String>, ExportError> {
    let table = forecast_table(response);
    if table.is_empty() || table.rows.is_empty() {
        return Ok(None);
    }

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let mut header = Vec::with_capacity(table.keys.len() + 1);
    header.push("Date".to_string());
    header.extend(table.keys.iter().cloned());
    writer.write_record(&header)?;

    for row in &table.rows {
        let mut record = Vec::with_capacity(row.values.len() + 1);
        record.push(row.date.format("%Y-%m-%d").to_string());
        record.extend(
            row.values
                .iter()
                .map(|v| v.map(|v| v.to_string()).unwrap_or_default()),
        );
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    let mut csv = String::from_utf8(bytes)?;
    if csv.ends_with('\n') {
        csv.pop();
    }

    debug!(rows = table.rows.len(), columns = table.keys.len(), "forecast CSV built");
    Ok(Some(csv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ForecastPoint, SymbolAnalysis};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn forecast(points: &[(&str, f64)]) -> SymbolAnalysis {
        SymbolAnalysis {
            predictions: Some(
                points
                    .iter()
                    .map(|(d, v)| ForecastPoint { date: date(d), predicted: *v })
                    .collect(),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_forecasts_means_no_export() {
        let mut response = AnalysisResponse::new();
        assert!(forecast_csv(&response).unwrap().is_none());

        response.insert(
            "TSLA",
            SymbolAnalysis {
                error: Some("No data for TSLA".into()),
                ..Default::default()
            },
        );
        assert!(forecast_csv(&response).unwrap().is_none());
    }

    #[test]
    fn test_csv_aligns_rows_with_chart() {
        let mut response = AnalysisResponse::new();
        response.insert("AAPL", forecast(&[("2024-04-01", 171.5), ("2024-04-02", 172.25)]));
        response.insert("MSFT", forecast(&[("2024-04-01", 420.0), ("2024-04-02", 421.5)]));

        let csv = forecast_csv(&response).unwrap().unwrap();
        assert_eq!(
            csv,
            "Date,AAPL,MSFT\n2024-04-01,171.5,420\n2024-04-02,172.25,421.5"
        );
    }

    #[test]
    fn test_csv_leaves_missing_values_empty() {
        let mut response = AnalysisResponse::new();
        response.insert("AAPL", forecast(&[("2024-04-01", 1.5), ("2024-04-02", 2.5)]));
        response.insert("MSFT", forecast(&[("2024-04-02", 3.5)]));

        let csv = forecast_csv(&response).unwrap().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, vec!["Date,AAPL,MSFT", "2024-04-01,1.5,", "2024-04-02,2.5,3.5"]);
    }
}
