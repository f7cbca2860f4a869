pub mod guard;
pub mod redirect;
pub mod routes;

pub use guard::{Access, GuardAction, RouteGuard};
pub use redirect::{Redirect, RouterRedirect};
pub use routes::{MenuItem, Route, MENU};
