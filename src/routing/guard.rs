// ============================================================================
// ROUTE GUARD - Access decision for one mount of a protected route
// ============================================================================
//   CHECKING --(loaded, token)----> GRANTED
//   CHECKING --(loaded, no token)-> DENIED
//   GRANTED  --(token gone)-------> DENIED
//   DENIED is terminal; entering it yields exactly one redirect to /login.
// ============================================================================

use super::routes::Route;
use crate::state::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Checking,
    Granted,
    Denied,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuardAction {
    /// Replace the current history entry with this route
    Redirect(Route),
}

#[derive(Debug)]
pub struct RouteGuard {
    access: Access,
}

impl RouteGuard {
    pub fn new() -> Self {
        Self {
            access: Access::Checking,
        }
    }

    pub fn access(&self) -> Access {
        self.access
    }

    /// Feeds the current session snapshot through the state machine
    pub fn observe(&mut self, session: &Session) -> Option<GuardAction> {
        let next = match self.access {
            Access::Denied => return None,
            Access::Checking if session.is_loading => Access::Checking,
            // is_loading never goes back to true once cleared
            Access::Granted if session.is_loading => Access::Granted,
            _ if session.token.is_some() => Access::Granted,
            _ => Access::Denied,
        };
        self.access = next;
        if next == Access::Denied {
            log::info!("🔒 [GUARD] No session, sending user to login");
            Some(GuardAction::Redirect(Route::Login))
        } else {
            None
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new()
    }
}
