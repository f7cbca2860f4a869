use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::routing::Route;
use crate::services::perform_login;
use crate::state::SessionAccess;
use crate::utils::constants::APP_TITLE;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            loading.set(true);
            error.set(None);

            let username = (*username).clone();
            let password = (*password).clone();
            let error = error.clone();
            let loading = loading.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = perform_login(&username, &password)
                    .await
                    .and_then(|token| session.login(&token).map_err(|e| e.to_string()));
                loading.set(false);
                match result {
                    Ok(()) => {
                        log::info!("✅ [LOGIN] Signed in as {}", username.trim());
                        match navigator {
                            Some(navigator) => navigator.push(&Route::Dashboard),
                            None => log::warn!("⚠️ [LOGIN] No navigator, staying on the login page"),
                        }
                    }
                    Err(message) => error.set(Some(message)),
                }
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{ APP_TITLE }</h1>
                    <p>{"Sign in to manage the store"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            placeholder="Enter your username"
                            autocomplete="username"
                            value={(*username).clone()}
                            oninput={on_username}
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Enter your password"
                            autocomplete="current-password"
                            value={(*password).clone()}
                            oninput={on_password}
                        />
                    </div>

                    if let Some(message) = &*error {
                        <p class="form-error">{ message.clone() }</p>
                    }

                    <button type="submit" class="btn btn-primary btn-block" disabled={*loading}>
                        { if *loading { "Signing in..." } else { "Login" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
