use yew::prelude::*;
use yew_router::prelude::*;

use crate::routing::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Dashboard} classes="btn btn-primary">{"Back to dashboard"}</Link<Route>>
        </div>
    }
}
