pub mod format;
pub mod views;

pub use format::{format_ars, format_usd};
pub use views::{admin_view, public_view, rates_view};
