use yew_router::prelude::*;

use crate::models::ResourceKind;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/stock")]
    Stock,
    #[at("/dashboard/stock/:id")]
    StockDetail { id: i64 },
    #[at("/dashboard/categories")]
    Categories,
    #[at("/dashboard/categories/:id")]
    CategoryDetail { id: i64 },
    #[at("/dashboard/taxation")]
    Taxation,
    #[at("/dashboard/taxation/:id")]
    TaxationDetail { id: i64 },
    #[at("/dashboard/shipping")]
    Shipping,
    #[at("/dashboard/shipping/:id")]
    ShippingDetail { id: i64 },
    #[at("/dashboard/statistics")]
    Statistics,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub struct MenuItem {
    pub label: &'static str,
    pub route: Route,
}

/// Sidebar entries, in display order
pub const MENU: [MenuItem; 6] = [
    MenuItem { label: "Dashboard", route: Route::Dashboard },
    MenuItem { label: "Manage Stock", route: Route::Stock },
    MenuItem { label: "Categories", route: Route::Categories },
    MenuItem { label: "Taxation", route: Route::Taxation },
    MenuItem { label: "Shipping", route: Route::Shipping },
    MenuItem { label: "Statistics", route: Route::Statistics },
];

impl Route {
    /// Routes rendered behind the route guard
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Home | Route::Login | Route::NotFound)
    }

    /// Top bar title
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home | Route::Dashboard => "Dashboard",
            Route::Login => "Login",
            Route::Stock => "Stock",
            Route::StockDetail { .. } => "Item Details",
            Route::Categories => "Categories",
            Route::CategoryDetail { .. } => "Category Detail",
            Route::Taxation => "Taxation",
            Route::TaxationDetail { .. } => "Taxation Detail",
            Route::Shipping => "Shipping",
            Route::ShippingDetail { .. } => "Shipping Detail",
            Route::Statistics => "Statistics",
            Route::NotFound => "Not Found",
        }
    }

    /// Sidebar entry highlighted for this route (detail pages light up their list)
    pub fn section(&self) -> Route {
        match self {
            Route::StockDetail { .. } => Route::Stock,
            Route::CategoryDetail { .. } => Route::Categories,
            Route::TaxationDetail { .. } => Route::Taxation,
            Route::ShippingDetail { .. } => Route::Shipping,
            Route::Home => Route::Dashboard,
            other => other.clone(),
        }
    }

    pub fn list(kind: ResourceKind) -> Route {
        match kind {
            ResourceKind::Categories => Route::Categories,
            ResourceKind::Shipping => Route::Shipping,
            ResourceKind::Taxation => Route::Taxation,
            ResourceKind::Stock => Route::Stock,
        }
    }

    pub fn detail(kind: ResourceKind, id: i64) -> Route {
        match kind {
            ResourceKind::Categories => Route::CategoryDetail { id },
            ResourceKind::Shipping => Route::ShippingDetail { id },
            ResourceKind::Taxation => Route::TaxationDetail { id },
            ResourceKind::Stock => Route::StockDetail { id },
        }
    }
}
