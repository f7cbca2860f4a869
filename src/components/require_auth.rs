use yew::prelude::*;
use yew_router::prelude::*;

use super::loading::LoadingPlaceholder;
use crate::hooks::use_session;
use crate::routing::{Access, Redirect, Route, RouteGuard, RouterRedirect};

/// What the wrapper shows for an access state
#[derive(Debug, Clone, PartialEq)]
pub enum GuardView {
    /// Session still loading: neutral placeholder, children not mounted
    Placeholder,
    Children,
    /// Nothing rendered; navigate away with a history replace
    Redirect(Route),
}

impl GuardView {
    pub fn for_access(access: Access) -> Self {
        match access {
            Access::Checking => GuardView::Placeholder,
            Access::Granted => GuardView::Children,
            Access::Denied => GuardView::Redirect(Route::Login),
        }
    }

    /// Runs the navigation this view asks for, if any
    pub fn follow(&self, redirect: &dyn Redirect) {
        if let GuardView::Redirect(route) = self {
            redirect.replace(route.clone());
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Renders its children only for an authenticated session.
/// Key it by route so every navigation starts a fresh guard.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let guard = use_mut_ref(RouteGuard::new);

    guard.borrow_mut().observe(session.session());
    let view = GuardView::for_access(guard.borrow().access());

    // Denied is terminal, so the dependency stays put once it turns into a
    // redirect and the effect fires exactly once per mount
    use_effect_with(view.clone(), move |view| {
        if matches!(view, GuardView::Redirect(_)) {
            view.follow(&RouterRedirect::new(navigator));
        }
        || ()
    });

    match view {
        GuardView::Placeholder => html! { <LoadingPlaceholder /> },
        GuardView::Redirect(_) => Html::default(),
        GuardView::Children => html! { <>{ props.children.clone() }</> },
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::routing::redirect::testing::RecordingRedirect;
    use crate::services::storage::MemoryTokenStorage;
    use crate::state::{SessionAccess, SessionStore};

    /// Guard + view as the component computes them on each render
    fn render(guard: &mut RouteGuard, store: &SessionStore) -> GuardView {
        guard.observe(&store.snapshot());
        GuardView::for_access(guard.access())
    }

    fn store(storage: MemoryTokenStorage) -> SessionStore {
        SessionStore::new(Rc::new(storage), Rc::new(RecordingRedirect::default()))
    }

    #[test]
    fn loading_session_shows_only_the_placeholder() {
        let store = store(MemoryTokenStorage::with_value("abc"));
        let mut guard = RouteGuard::new();
        assert!(store.is_loading());
        assert_eq!(render(&mut guard, &store), GuardView::Placeholder);
        assert_eq!(render(&mut guard, &store), GuardView::Placeholder);

        store.initialize();
        assert_eq!(render(&mut guard, &store), GuardView::Children);
    }

    #[test]
    fn missing_token_replaces_history_with_login() {
        let store = store(MemoryTokenStorage::new());
        store.initialize();
        let mut guard = RouteGuard::new();
        let view = render(&mut guard, &store);
        assert_eq!(view, GuardView::Redirect(Route::Login));

        let redirect = RecordingRedirect::default();
        view.follow(&redirect);
        assert_eq!(redirect.routes(), vec![Route::Login]);
    }

    #[test]
    fn denied_view_is_stable_across_renders() {
        let store = store(MemoryTokenStorage::new());
        store.initialize();
        let mut guard = RouteGuard::new();
        let first = render(&mut guard, &store);
        // A second render before effects run must not drop the redirect
        let second = render(&mut guard, &store);
        assert_eq!(first, second);
        assert_eq!(second, GuardView::Redirect(Route::Login));
    }

    #[test]
    fn other_views_do_not_navigate() {
        let redirect = RecordingRedirect::default();
        GuardView::Placeholder.follow(&redirect);
        GuardView::Children.follow(&redirect);
        assert!(redirect.routes().is_empty());
    }
}
