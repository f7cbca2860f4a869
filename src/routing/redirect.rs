use yew_router::prelude::Navigator;
use yew_router::Routable;

use super::routes::Route;

/// Navigation side effect used by the session store and the route guard.
/// Always replaces the current history entry.
pub trait Redirect {
    fn replace(&self, route: Route);
}

/// `Redirect` backed by the yew-router history
#[derive(Clone)]
pub struct RouterRedirect {
    navigator: Option<Navigator>,
}

impl RouterRedirect {
    pub fn new(navigator: Option<Navigator>) -> Self {
        if navigator.is_none() {
            log::warn!("⚠️ [ROUTER] No navigator in scope, redirects will be dropped");
        }
        Self { navigator }
    }
}

impl Redirect for RouterRedirect {
    fn replace(&self, route: Route) {
        match &self.navigator {
            Some(navigator) => {
                log::info!("↪️ [ROUTER] Redirecting to {}", route.to_path());
                navigator.replace(&route);
            }
            None => log::warn!("⚠️ [ROUTER] Redirect to {} dropped", route.to_path()),
        }
    }
}
