pub mod dashboard_home;
pub mod login;
pub mod not_found;
pub mod resource_detail;
pub mod resource_list;
pub mod statistics;

pub use dashboard_home::DashboardHome;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use resource_detail::ResourceDetailPage;
pub use resource_list::ResourceListPage;
pub use statistics::StatisticsPage;
