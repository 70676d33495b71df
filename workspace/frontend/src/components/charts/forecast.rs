use common::projection::{forecast_table, series_color};
use common::AnalysisResponse;
use yew::prelude::*;

use super::plot::{LinePlot, LineSeries};

#[derive(Properties, PartialEq)]
pub struct ForecastChartProps {
    pub response: AnalysisResponse,
}

/// 7-day price forecast, one line per symbol.
#[function_component(ForecastChart)]
pub fn forecast_chart(props: &ForecastChartProps) -> Html {
    let table = forecast_table(&props.response);
    if table.is_empty() {
        return html! {};
    }

    let series = table
        .keys
        .iter()
        .enumerate()
        .map(|(idx, symbol)| LineSeries {
            name: symbol.clone(),
            color: series_color(idx),
            values: table.column(symbol),
        })
        .collect::<Vec<_>>();
    let dates = table.dates().iter().map(|d| d.to_string()).collect::<Vec<_>>();

    html! {
        <LinePlot
            div_id="forecast-chart"
            title="7-Day Forecast"
            y_title="Predicted price"
            {dates}
            {series}
        />
    }
}
