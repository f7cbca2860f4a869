use yew::prelude::*;

use crate::components::LoadingPlaceholder;
use crate::hooks::{use_statistics, FetchState};

#[function_component(StatisticsPage)]
pub fn statistics_page() -> Html {
    let stats = use_statistics();

    match &*stats {
        FetchState::Loading => html! { <LoadingPlaceholder message="Loading statistics..." /> },
        FetchState::Failed(message) => html! { <p class="page-error">{ message.clone() }</p> },
        FetchState::Loaded(stats) => html! {
            <div class="stat-grid">
                { for stats.cards().into_iter().map(|(title, value)| html! {
                    <div class="stat-card">
                        <span class="stat-title">{ title }</span>
                        <span class="stat-value">{ value }</span>
                    </div>
                }) }
            </div>
        },
    }
}
