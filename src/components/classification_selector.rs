use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::services::panels::Classification;

#[derive(Properties, PartialEq)]
pub struct ClassificationSelectorProps {
    pub classification: Classification,
    pub on_change: Callback<Classification>,
}

/// Dropdown choosing the dimension of the classification pie
#[function_component(ClassificationSelector)]
pub fn classification_selector(props: &ClassificationSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            match target.value().parse::<Classification>() {
                Ok(classification) => callback.emit(classification),
                Err(e) => gloo::console::warn!(e.to_string()),
            }
        })
    };

    html! {
        <select
            class="classification-selector"
            onchange={on_change}
            aria-label="选择分类维度"
        >
            {
                Classification::all().iter().map(|c| {
                    let selected = *c == props.classification;
                    html! {
                        <option value={c.code()} {selected}>{c.label()}</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
