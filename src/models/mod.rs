pub mod auth;
pub mod catalog;
pub mod item;
pub mod resource;
pub mod statistics;

pub use auth::{ErrorBody, LoginRequest, LoginResponse};
pub use catalog::{Category, NewCategory, NewShippingOption, NewTaxationRate, ShippingOption, TaxationRate};
pub use item::{ItemImage, NewItemImage, NewPriceItem, NewStockItem, PriceItem, StockItem};
pub use resource::{push_listed, DraftError, FieldKind, FormField, FormValues, Resource, ResourceKind, SelectOption};
pub use statistics::Statistics;
