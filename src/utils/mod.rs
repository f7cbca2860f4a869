// Shared helpers

pub mod constants;
pub mod filter;
pub mod format;

pub use constants::*;
pub use filter::*;
pub use format::*;
