pub mod app;
pub mod dashboard_layout;
pub mod loading;
pub mod modal;
pub mod require_auth;
pub mod resource_form;

pub use app::App;
pub use dashboard_layout::DashboardLayout;
pub use loading::LoadingPlaceholder;
pub use modal::Modal;
pub use require_auth::RequireAuth;
pub use resource_form::ResourceForm;
