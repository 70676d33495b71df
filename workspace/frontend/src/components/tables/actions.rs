use common::projection::{action_rows, HORIZON_LABELS, MISSING_CELL};
use common::{AnalysisResponse, Recommendation};
use yew::prelude::*;

use super::{TD_LEFT, TD_SYMBOL, TH_LEFT};

#[derive(Properties, PartialEq)]
pub struct ActionTableProps {
    pub response: AnalysisResponse,
}

fn recommendation_cell(recommendation: Option<&Recommendation>) -> Html {
    match recommendation {
        Some(rec) => html! {
            <>{rec.price.to_string()}{" / "}<em>{rec.action.label()}</em></>
        },
        None => html! { {MISSING_CELL} },
    }
}

#[function_component(ActionTable)]
pub fn action_table(props: &ActionTableProps) -> Html {
    let rows = action_rows(&props.response);
    if rows.is_empty() {
        return html! {};
    }

    html! {
        <div class="overflow-x-auto mb-6">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th class={TH_LEFT}>{"Symbol"}</th>
                        {for HORIZON_LABELS.iter().map(|label| html! {
                            <th class={TH_LEFT}>{*label}</th>
                        })}
                    </tr>
                </thead>
                <tbody>
                    {for rows.iter().map(|row| html! {
                        <tr key={row.symbol.clone()}>
                            <td class={TD_SYMBOL}>{&row.symbol}</td>
                            {for row.horizons.iter().map(|rec| html! {
                                <td class={TD_LEFT}>{recommendation_cell(rec.as_ref())}</td>
                            })}
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
