pub mod session_context;
pub mod use_resource;
pub mod use_session;

pub use session_context::{SessionHandle, SessionProvider};
pub use use_resource::{use_resource_item, use_resource_list, use_statistics, FetchState, ListAction, ListState};
pub use use_session::use_session;
