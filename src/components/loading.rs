use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingPlaceholderProps {
    #[prop_or_else(|| AttrValue::from("Loading..."))]
    pub message: AttrValue,
}

/// Neutral placeholder, reveals nothing about the page behind it
#[function_component(LoadingPlaceholder)]
pub fn loading_placeholder(props: &LoadingPlaceholderProps) -> Html {
    html! {
        <div class="loading-placeholder">
            <div class="spinner"></div>
            <p>{ props.message.clone() }</p>
        </div>
    }
}
