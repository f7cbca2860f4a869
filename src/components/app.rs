use yew::prelude::*;
use yew_router::prelude::*;

use super::{DashboardLayout, RequireAuth};
use crate::hooks::SessionProvider;
use crate::models::{Category, ShippingOption, StockItem, TaxationRate};
use crate::routing::Route;
use crate::views::{
    DashboardHome, LoginPage, NotFound, ResourceDetailPage, ResourceListPage, StatisticsPage,
};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <Switch<Route> render={switch} />
            </SessionProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    if !route.is_protected() {
        return public_page(route);
    }
    // Keyed by path so each navigation gets a fresh guard
    let key = route.to_path();
    html! {
        <RequireAuth key={key}>
            <DashboardLayout>{ page(route) }</DashboardLayout>
        </RequireAuth>
    }
}

fn public_page(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Login => html! { <LoginPage /> },
        _ => html! { <NotFound /> },
    }
}

fn page(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardHome /> },
        Route::Statistics => html! { <StatisticsPage /> },
        Route::Stock => html! { <ResourceListPage<StockItem> /> },
        Route::StockDetail { id } => html! { <ResourceDetailPage<StockItem> {id} /> },
        Route::Categories => html! { <ResourceListPage<Category> /> },
        Route::CategoryDetail { id } => html! { <ResourceDetailPage<Category> {id} /> },
        Route::Taxation => html! { <ResourceListPage<TaxationRate> /> },
        Route::TaxationDetail { id } => html! { <ResourceDetailPage<TaxationRate> {id} /> },
        Route::Shipping => html! { <ResourceListPage<ShippingOption> /> },
        Route::ShippingDetail { id } => html! { <ResourceDetailPage<ShippingOption> {id} /> },
        Route::Home | Route::Login | Route::NotFound => public_page(route),
    }
}
