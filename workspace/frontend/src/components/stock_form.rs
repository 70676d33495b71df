use chrono::NaiveDate;
use common::AnalysisForm;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StockFormProps {
    pub form: AnalysisForm,
    pub busy: bool,
    pub today: NaiveDate,
    pub on_change: Callback<AnalysisForm>,
    pub on_submit: Callback<()>,
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

/// Ticker pills plus the date range of the analysis.
#[function_component(StockForm)]
pub fn stock_form(props: &StockFormProps) -> Html {
    let input = use_state(String::new);
    let rejection = use_state(|| None::<String>);

    let add_symbol = {
        let input = input.clone();
        let rejection = rejection.clone();
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: ()| {
            let mut form = form.clone();
            match form.tickers.add(&input) {
                Ok(symbol) => {
                    log::debug!("Added ticker {}", symbol);
                    input.set(String::new());
                    rejection.set(None);
                    on_change.emit(form);
                }
                Err(e) => {
                    log::debug!("Ticker rejected: {}", e);
                    rejection.set(Some(e.to_string()));
                }
            }
        })
    };

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            input.set(target.value());
        })
    };

    let on_keydown = {
        let add_symbol = add_symbol.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                add_symbol.emit(());
            }
        })
    };

    let on_add_click = {
        let add_symbol = add_symbol.clone();
        Callback::from(move |_: MouseEvent| add_symbol.emit(()))
    };

    let on_start = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let mut form = form.clone();
            form.set_start(parse_date(&target.value()));
            on_change.emit(form);
        })
    };

    let on_end = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let mut form = form.clone();
            form.set_end(parse_date(&target.value()));
            on_change.emit(form);
        })
    };

    let on_form_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let today = date_value(Some(props.today));
    let can_submit = props.form.can_submit(props.busy, props.today);

    html! {
        <form class="grid gap-6" onsubmit={on_form_submit}>
            <div class="flex gap-2">
                <input
                    type="text"
                    class="input input-bordered flex-1"
                    placeholder="AAPL"
                    value={(*input).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    disabled={props.busy}
                />
                <button
                    type="button"
                    class="btn btn-primary"
                    onclick={on_add_click}
                    disabled={props.busy || props.form.tickers.is_full()}
                >
                    {"+"}
                </button>
            </div>
            if let Some(message) = (*rejection).clone() {
                <p class="text-sm text-warning">{message}</p>
            }

            <div class="flex gap-2 flex-wrap">
                {for props.form.tickers.symbols().iter().map(|symbol| {
                    let on_remove = {
                        let form = props.form.clone();
                        let on_change = props.on_change.clone();
                        let symbol = symbol.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut form = form.clone();
                            form.tickers.remove(&symbol);
                            on_change.emit(form);
                        })
                    };
                    html! {
                        <span key={symbol.clone()} class="badge badge-primary badge-lg gap-2">
                            {symbol.clone()}
                            <button type="button" onclick={on_remove} disabled={props.busy}>
                                {"×"}
                            </button>
                        </span>
                    }
                })}
            </div>

            <div class="grid grid-cols-3 gap-4 items-end">
                <label class="form-control">
                    <span class="label-text mb-1">{"Start Date"}</span>
                    <input
                        type="date"
                        class="input input-bordered"
                        value={date_value(props.form.start())}
                        max={today.clone()}
                        onchange={on_start}
                    />
                </label>
                <label class="form-control">
                    <span class="label-text mb-1">{"End Date"}</span>
                    <input
                        type="date"
                        class="input input-bordered"
                        value={date_value(props.form.end())}
                        min={date_value(props.form.start())}
                        max={today}
                        onchange={on_end}
                    />
                </label>
                <button type="submit" class="btn btn-primary" disabled={!can_submit}>
                    {if props.busy { "Loading…" } else { "Explore" }}
                </button>
            </div>
        </form>
    }
}
