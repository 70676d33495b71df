use plotly::common::{Line, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Scatter};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

/// One line of a chart. `values[i]` belongs to `dates[i]` of the chart;
/// `None` leaves a gap instead of dropping to zero.
#[derive(Clone, PartialEq, Debug)]
pub struct LineSeries {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<Option<f64>>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct LinePlotProps {
    pub div_id: AttrValue,
    pub title: AttrValue,
    pub y_title: AttrValue,
    pub dates: Vec<String>,
    pub series: Vec<LineSeries>,
}

/// Plotly line chart over a shared date axis.
#[function_component(LinePlot)]
pub fn line_plot(props: &LinePlotProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.clone()), move |(container_ref, props)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(&props.div_id);
            if let Err(e) = render(props) {
                log::error!("Failed to render chart {}: {:?}", props.div_id, e);
            }
        }
        || ()
    });

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}

fn render(props: &LinePlotProps) -> Result<(), JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();

    let data = js_sys::Array::new();
    for series in &props.series {
        let trace = Scatter::new(props.dates.clone(), series.values.clone())
            .mode(Mode::Lines)
            .name(series.name.as_str())
            .line(Line::new().color(series.color).width(2.0));
        data.push(&trace.serialize(&serializer)?);
    }

    let layout = Layout::new()
        .title(Title::with_text(props.title.as_str()))
        .x_axis(Axis::new().title(Title::with_text("Date")))
        .y_axis(Axis::new().title(Title::with_text(props.y_title.as_str())))
        .height(400);
    let layout = layout.serialize(&serializer)?;

    log::trace!("Plotting {} series into {}", props.series.len(), props.div_id);
    newPlot(&props.div_id, data.into(), layout);
    Ok(())
}
