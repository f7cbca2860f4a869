use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::routing::{Route, MENU};
use crate::state::SessionAccess;
use crate::utils::constants::APP_TITLE;

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub children: Children,
}

/// Sidebar + top bar shell shared by every dashboard page
#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    let session = use_session();
    let route = use_route::<Route>().unwrap_or(Route::Dashboard);
    let show_user_menu = use_state(|| false);

    let on_toggle_user_menu = {
        let show_user_menu = show_user_menu.clone();
        Callback::from(move |_: MouseEvent| show_user_menu.set(!*show_user_menu))
    };

    let on_logout = {
        let session = session.clone();
        let show_user_menu = show_user_menu.clone();
        Callback::from(move |_: MouseEvent| {
            show_user_menu.set(false);
            session.logout();
        })
    };

    let active = route.section();

    html! {
        <div class="dashboard">
            <aside class="sidebar">
                <div class="sidebar-brand">{ APP_TITLE }</div>
                <nav class="sidebar-nav">
                    { for MENU.iter().map(|item| {
                        let class = if item.route == active { "nav-link active" } else { "nav-link" };
                        html! {
                            <Link<Route> to={item.route.clone()} classes={classes!(class)}>
                                { item.label }
                            </Link<Route>>
                        }
                    }) }
                </nav>
            </aside>

            <div class="dashboard-main">
                <header class="topbar">
                    <h1 class="topbar-title">{ route.title() }</h1>
                    <div class="user-menu">
                        <button class="user-menu-toggle" onclick={on_toggle_user_menu}>
                            <span class="avatar">{"👤"}</span>
                            <span class="user-name">{"Administrator"}</span>
                        </button>
                        if *show_user_menu {
                            <div class="user-menu-dropdown">
                                <button class="user-menu-item" onclick={on_logout}>{"Logout"}</button>
                            </div>
                        }
                    </div>
                </header>

                <main class="dashboard-content">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}
