use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::LoadingPlaceholder;
use crate::hooks::{use_resource_item, FetchState};
use crate::models::Resource;
use crate::routing::Route;

#[derive(Properties, PartialEq)]
pub struct ResourceDetailProps {
    pub id: i64,
}

/// Read-only view of one record
#[function_component(ResourceDetailPage)]
pub fn resource_detail_page<R>(props: &ResourceDetailProps) -> Html
where
    R: Resource,
{
    let item = use_resource_item::<R>(props.id);

    let content = match &*item {
        FetchState::Loading => html! { <LoadingPlaceholder /> },
        FetchState::Failed(message) => html! { <p class="page-error">{ message.clone() }</p> },
        FetchState::Loaded(item) => html! {
            <div class="detail-card">
                if let Some(src) = item.image_src() {
                    <img class="detail-image" src={src} alt={item.display_name().to_string()} />
                }
                <dl class="detail-list">
                    { for item.details().into_iter().map(|(label, value)| html! {
                        <>
                            <dt>{ label }</dt>
                            <dd>{ value }</dd>
                        </>
                    }) }
                </dl>
            </div>
        },
    };

    html! {
        <section class="resource-detail">
            <div class="page-toolbar">
                <h2>{ format!("{} details", R::SINGULAR) }</h2>
                <Link<Route> to={Route::list(R::KIND)} classes="btn btn-secondary">{"Back"}</Link<Route>>
            </div>
            { content }
        </section>
    }
}
