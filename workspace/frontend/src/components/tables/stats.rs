use common::projection::stats_rows;
use common::AnalysisResponse;
use yew::prelude::*;

use super::{TD_RIGHT, TD_SYMBOL, TH_LEFT, TH_RIGHT};

#[derive(Properties, PartialEq)]
pub struct StatsTableProps {
    pub response: AnalysisResponse,
}

#[function_component(StatsTable)]
pub fn stats_table(props: &StatsTableProps) -> Html {
    let rows = stats_rows(&props.response);
    if rows.is_empty() {
        return html! {};
    }

    html! {
        <div class="overflow-x-auto mb-6">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th class={TH_LEFT}>{"Symbol"}</th>
                        <th class={TH_RIGHT}>{"Mean"}</th>
                        <th class={TH_RIGHT}>{"Median"}</th>
                        <th class={TH_RIGHT}>{"Std"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for rows.iter().map(|row| html! {
                        <tr key={row.symbol.clone()}>
                            <td class={TD_SYMBOL}>{&row.symbol}</td>
                            <td class={TD_RIGHT}>{row.mean.to_string()}</td>
                            <td class={TD_RIGHT}>{row.median.to_string()}</td>
                            <td class={TD_RIGHT}>{row.std.to_string()}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
