use yew::prelude::*;

use super::session_context::SessionHandle;

/// Session capability for the current component.
/// Panics when rendered outside `SessionProvider`, which is a wiring bug.
#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("use_session() called outside <SessionProvider>")
}
