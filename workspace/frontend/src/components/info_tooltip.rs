use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InfoTooltipProps {
    pub text: AttrValue,
}

/// Click-to-expand explanation next to a section heading.
#[function_component(InfoTooltip)]
pub fn info_tooltip(props: &InfoTooltipProps) -> Html {
    html! {
        <details class="inline-block ml-2 align-top">
            <summary class="cursor-pointer text-gray-400 hover:text-gray-600">
                <i class="fas fa-info-circle"></i>
            </summary>
            <div class="mt-2 p-4 text-sm font-normal bg-base-200 rounded shadow">
                {props.text.clone()}
            </div>
        </details>
    }
}
