use chrono::Local;
use common::projection::symbol_errors;
use common::{forecast_csv, AnalysisForm, AnalysisResponse, FORECAST_CSV_FILENAME};
use yew::prelude::*;

use crate::common::error::ErrorBanner;
use crate::common::loading::Loading;
use crate::common::toast::ToastContext;
use crate::components::charts::{BollingerChart, ForecastChart, NormalizedChart};
use crate::components::info_tooltip::InfoTooltip;
use crate::components::stock_form::StockForm;
use crate::components::tables::{ActionTable, EvalTable, StatsTable};
use crate::download::download_text;
use crate::hooks::use_analysis_session;

fn section(title: &'static str, tooltip: &'static str, description: &'static str, body: Html) -> Html {
    html! {
        <section class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title text-2xl">
                    {title}
                    <InfoTooltip text={tooltip} />
                </h2>
                <p class="text-sm text-gray-500 mb-4">{description}</p>
                {body}
            </div>
        </section>
    }
}

fn result_sections(response: &AnalysisResponse) -> Html {
    html! {
        <>
            {section(
                "7-Day Forecast",
                "Predicted closing prices for each symbol over the next seven days.",
                "The chart displays daily predicted prices. Use it to spot upcoming uptrends or downtrends.",
                html! { <ForecastChart response={response.clone()} /> },
            )}
            {section(
                "Normalized vs SPY",
                "Compares each stock's performance to the S&P 500 index over the selected period.",
                "Values are scaled so you can see which stocks are stronger or weaker than the overall market.",
                html! { <NormalizedChart response={response.clone()} /> },
            )}
            {section(
                "Summary Statistics",
                "Mean, median and standard deviation of the normalized series during your chosen window.",
                "Review these to understand how the stock behaved historically before trusting the forecast.",
                html! { <StatsTable response={response.clone()} /> },
            )}
            {section(
                "Model Evaluation Scores",
                "How well the model fit past data.",
                "Check these scores to gauge confidence in the forecast.",
                html! { <EvalTable response={response.clone()} /> },
            )}
            {section(
                "Action Recommendations",
                "Automated buy/hold/sell suggestions based on the forecast.",
                "Use these at a glance to guide your next move.",
                html! { <ActionTable response={response.clone()} /> },
            )}
            {section(
                "Bollinger Bands",
                "Shows the typical price range (upper/lower bands) of the market index plus its closing price.",
                "Prices near the upper band may be overbought, near the lower band oversold.",
                html! { <BollingerChart response={response.clone()} /> },
            )}
        </>
    }
}

/// The single dashboard page: form, error banner and result sections.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let session = use_analysis_session();
    let form = use_state(AnalysisForm::new);
    let toast_ctx = use_context::<ToastContext>();
    let today = Local::now().date_naive();
    let snapshot = session.snapshot();

    let on_form_change = {
        let form = form.clone();
        Callback::from(move |updated: AnalysisForm| form.set(updated))
    };

    let on_submit = {
        let form = form.clone();
        let session = session.clone();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |_: ()| {
            let today = Local::now().date_naive();
            let request = match form.request(today) {
                Ok(request) => request,
                Err(e) => {
                    log::debug!("Submission blocked: {}", e);
                    return;
                }
            };

            let toast_ctx = toast_ctx.clone();
            let on_success = Callback::from(move |response: AnalysisResponse| {
                let Some(toast_ctx) = &toast_ctx else {
                    return;
                };
                for (symbol, message) in symbol_errors(&response) {
                    toast_ctx.show_warning(format!("{}: {}", symbol, message));
                }
            });
            session.submit(request, on_success);
        })
    };

    let on_download = {
        let session = session.clone();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |_: MouseEvent| {
            let snapshot = session.snapshot();
            let Some(response) = snapshot.response() else {
                return;
            };
            let outcome = match forecast_csv(response) {
                Ok(Some(csv)) => download_text(FORECAST_CSV_FILENAME, &csv, "text/csv")
                    .map_err(|e| format!("Download failed: {:?}", e)),
                Ok(None) => {
                    log::debug!("Nothing to export");
                    return;
                }
                Err(e) => Err(e.to_string()),
            };
            match (outcome, &toast_ctx) {
                (Ok(()), Some(ctx)) => ctx.show_success(format!("Saved {}", FORECAST_CSV_FILENAME)),
                (Err(message), Some(ctx)) => ctx.show_error(message),
                (Err(message), None) => log::error!("{}", message),
                (Ok(()), None) => {}
            }
        })
    };

    html! {
        <main class="flex-1 w-full mx-auto py-12 px-8 lg:px-16 space-y-10">
            <section class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title text-3xl">
                        {"Pick up to 4 Symbols & Date Range"}
                        <InfoTooltip text="Pick up to 4 tickers (e.g. AAPL). Start and end dates spanning at least 60 days give the model enough history to learn price patterns." />
                    </h2>
                    <p class="text-sm text-gray-500 mb-4">
                        {"For accurate forecasts, select a period of 60 days or more."}
                    </p>
                    if let Some(error) = snapshot.error() {
                        <ErrorBanner message={error.to_string()} />
                    }
                    <StockForm
                        form={(*form).clone()}
                        busy={snapshot.is_busy()}
                        {today}
                        on_change={on_form_change}
                        {on_submit}
                    />
                </div>
            </section>

            if snapshot.is_busy() {
                <Loading text={Some("Running analysis…".to_string())} />
            }

            if let Some(response) = snapshot.response() {
                <>
                    {result_sections(response)}
                    <div class="flex justify-end gap-4">
                        <button
                            class="btn btn-primary"
                            onclick={on_download}
                            disabled={!response.has_forecasts()}
                        >
                            <i class="fas fa-download"></i>
                            {" Download CSV"}
                        </button>
                    </div>
                </>
            }
        </main>
    }
}
