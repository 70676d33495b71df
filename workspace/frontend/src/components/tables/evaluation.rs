use common::projection::{display_value, eval_table};
use common::AnalysisResponse;
use yew::prelude::*;

use super::{TD_RIGHT, TD_SYMBOL, TH_LEFT, TH_RIGHT};

#[derive(Properties, PartialEq)]
pub struct EvalTableProps {
    pub response: AnalysisResponse,
}

/// Model evaluation scores. The column pair is taken from the first symbol's
/// model family and applies to every row.
#[function_component(EvalTable)]
pub fn eval_table_view(props: &EvalTableProps) -> Html {
    let table = eval_table(&props.response);
    if table.rows.is_empty() {
        return html! {};
    }
    let [first, second] = table.family.column_labels();

    html! {
        <div class="overflow-x-auto mb-6">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th class={TH_LEFT}>{"Symbol"}</th>
                        <th class={TH_RIGHT}>{first}</th>
                        <th class={TH_RIGHT}>{second}</th>
                    </tr>
                </thead>
                <tbody>
                    {for table.rows.iter().map(|row| html! {
                        <tr key={row.symbol.clone()}>
                            <td class={TD_SYMBOL}>{&row.symbol}</td>
                            <td class={TD_RIGHT}>{display_value(row.cells[0])}</td>
                            <td class={TD_RIGHT}>{display_value(row.cells[1])}</td>
                        </tr>
                    })}
                </tbody>
            </table>
            if table.mixed {
                <p class="text-xs text-gray-500 mt-2">
                    {"Some symbols were scored by a different model family; their columns are left empty."}
                </p>
            }
        </div>
    }
}
