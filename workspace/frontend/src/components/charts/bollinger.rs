use common::projection::bollinger_rows;
use common::AnalysisResponse;
use yew::prelude::*;

use super::plot::{LinePlot, LineSeries};

const UPPER_COLOR: &str = "#8884d8";
const LOWER_COLOR: &str = "#82ca9d";
const CLOSE_COLOR: &str = "#FF8042";

#[derive(Properties, PartialEq)]
pub struct BollingerChartProps {
    pub response: AnalysisResponse,
}

/// Bollinger bands of the market index.
#[function_component(BollingerChart)]
pub fn bollinger_chart(props: &BollingerChartProps) -> Html {
    let Some(rows) = bollinger_rows(&props.response) else {
        return html! { <p class="text-sm text-gray-500">{"No Bollinger data"}</p> };
    };
    if rows.is_empty() {
        return html! {};
    }

    let dates = rows.iter().map(|r| r.date.to_string()).collect::<Vec<_>>();
    let line = |name: &str, color: &'static str, value: fn(&common::projection::BollingerRow) -> Option<f64>| {
        LineSeries {
            name: name.to_string(),
            color,
            values: rows.iter().map(value).collect(),
        }
    };
    let series = vec![
        line("Upper Band", UPPER_COLOR, |r| r.upper),
        line("Lower Band", LOWER_COLOR, |r| r.lower),
        line("Close Price", CLOSE_COLOR, |r| r.close),
    ];

    html! {
        <LinePlot
            div_id="bollinger-chart"
            title="Bollinger Bands"
            y_title="Price"
            {dates}
            {series}
        />
    }
}
