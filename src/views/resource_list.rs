use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{LoadingPlaceholder, Modal, ResourceForm};
use crate::hooks::{use_resource_list, ListAction};
use crate::models::Resource;
use crate::routing::Route;
use crate::utils::filter_by_name;

/// Table page shared by categories, shipping, taxation and stock
#[function_component(ResourceListPage)]
pub fn resource_list_page<R>() -> Html
where
    R: Resource,
{
    let list = use_resource_list::<R>();
    let query = use_state(String::new);
    let show_add = use_state(|| false);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_open = {
        let show_add = show_add.clone();
        Callback::from(move |_: MouseEvent| show_add.set(true))
    };

    let on_close = {
        let show_add = show_add.clone();
        Callback::from(move |_: ()| show_add.set(false))
    };

    let on_created = {
        let list = list.clone();
        let show_add = show_add.clone();
        Callback::from(move |item: R| {
            list.dispatch(ListAction::Appended(item));
            show_add.set(false);
        })
    };

    let body = if list.loading {
        html! { <LoadingPlaceholder message={format!("Loading {}...", R::TITLE.to_lowercase())} /> }
    } else if let Some(message) = &list.error {
        html! { <p class="page-error">{ message.clone() }</p> }
    } else if list.items.is_empty() {
        html! { <p class="page-empty">{ format!("No {} yet.", R::TITLE.to_lowercase()) }</p> }
    } else {
        let visible = filter_by_name(&list.items, query.as_str());
        if visible.is_empty() {
            html! { <p class="page-empty">{ format!("No {} match \"{}\".", R::TITLE.to_lowercase(), query.trim()) }</p> }
        } else {
            html! {
                <table class="data-table">
                    <thead>
                        <tr>
                            { for R::columns().iter().map(|column| html! { <th>{ *column }</th> }) }
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for visible.into_iter().map(|item| html! {
                            <tr key={item.id().to_string()}>
                                { for item.cells().into_iter().map(|cell| html! { <td>{ cell }</td> }) }
                                <td>
                                    <Link<Route> to={Route::detail(R::KIND, item.id())} classes="btn btn-small">
                                        {"Details"}
                                    </Link<Route>>
                                </td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }
        }
    };

    html! {
        <section class="resource-page">
            <div class="page-toolbar">
                <input
                    type="search"
                    class="search-input"
                    placeholder={format!("Search {}", R::TITLE.to_lowercase())}
                    value={(*query).clone()}
                    oninput={on_search}
                />
                <button class="btn btn-primary" onclick={on_open}>{ format!("Add {}", R::SINGULAR) }</button>
            </div>

            { body }

            if *show_add {
                <Modal title={format!("Add {}", R::SINGULAR)} on_close={on_close.clone()}>
                    <ResourceForm<R> {on_created} on_cancel={on_close} />
                </Modal>
            }
        </section>
    }
}
