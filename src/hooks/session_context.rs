// ============================================================================
// SESSION CONTEXT - Shares the SessionStore with the whole tree
// ============================================================================
// The provider owns the only SessionStore, runs initialize() once after the
// first render and re-renders consumers whenever the store notifies.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routing::RouterRedirect;
use crate::services::storage::LocalTokenStorage;
use crate::state::{Session, SessionAccess, SessionError, SessionStore};

/// What consumers get from the context: a render-consistent snapshot plus
/// the store's two mutators
#[derive(Clone)]
pub struct SessionHandle {
    store: SessionStore,
    session: Session,
}

impl SessionHandle {
    pub fn new(store: SessionStore) -> Self {
        let session = store.snapshot();
        Self { store, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session && self.store.ptr_eq(&other.store)
    }
}

impl SessionAccess for SessionHandle {
    fn token(&self) -> Option<String> {
        self.session.token.clone()
    }

    fn is_loading(&self) -> bool {
        self.session.is_loading
    }

    fn login(&self, token: &str) -> Result<(), SessionError> {
        self.store.login(token)
    }

    fn logout(&self) {
        self.store.logout();
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Must sit inside the router: logout navigates to the login page
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let navigator = use_navigator();
    let store = use_memo((), move |_| {
        SessionStore::new(
            Rc::new(LocalTokenStorage::new()),
            Rc::new(RouterRedirect::new(navigator)),
        )
    });
    let trigger = use_force_update();

    {
        let store = store.clone();
        use_effect_with((), move |_| {
            let subscription = store.subscribe(move || trigger.force_update());
            store.initialize();
            move || store.unsubscribe(subscription)
        });
    }

    let handle = SessionHandle::new((*store).clone());

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<SessionHandle>>
    }
}
