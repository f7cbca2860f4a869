// ============================================================================
// ESHOP ADMIN - Administrative dashboard for the eShop REST API
// ============================================================================
// Layers:
// - State: session store (Rc<RefCell> + subscribers), browser-free
// - Services: HTTP client and token storage
// - Routing: routes, route guard, navigation seam
// - Hooks/Components/Views: Yew UI on top of the above
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod routing;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;
