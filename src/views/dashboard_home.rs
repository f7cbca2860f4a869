use yew::prelude::*;
use yew_router::prelude::*;

use crate::routing::{Route, MENU};

#[function_component(DashboardHome)]
pub fn dashboard_home() -> Html {
    html! {
        <section class="dashboard-home">
            <h2>{"Welcome to the eShop admin dashboard"}</h2>
            <p>{"Use the menu to manage stock, categories, taxation rates and shipping options, or check the store statistics."}</p>
            <div class="shortcut-grid">
                { for MENU.iter().filter(|item| item.route != Route::Dashboard).map(|item| html! {
                    <Link<Route> to={item.route.clone()} classes="shortcut-card">{ item.label }</Link<Route>>
                }) }
            </div>
        </section>
    }
}
