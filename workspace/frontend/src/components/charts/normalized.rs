use common::projection::{normalized_table, series_color};
use common::AnalysisResponse;
use yew::prelude::*;

use super::plot::{LinePlot, LineSeries};

#[derive(Properties, PartialEq)]
pub struct NormalizedChartProps {
    pub response: AnalysisResponse,
}

#[function_component(NormalizedChart)]
pub fn normalized_chart(props: &NormalizedChartProps) -> Html {
    let table = normalized_table(&props.response);
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
            div_id="normalized-chart"
            title="Normalized performance"
            y_title="Value (start = 1.0)"
            {dates}
            {series}
        />
    }
}
