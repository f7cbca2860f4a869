// ============================================================================
// STATE MODULE - Shared state with Rc<RefCell> + notifications
// ============================================================================

pub mod reactivity;
pub mod session_state;

pub use reactivity::*;
pub use session_state::*;
