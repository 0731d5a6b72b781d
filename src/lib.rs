pub mod calculator;
pub mod config_loader;
pub mod domain;
pub mod infrastructure;
pub mod render;

pub use calculator::*;
pub use domain::constants::*;
pub use domain::enums::*;
pub use domain::errors::*;
pub use domain::model::quote::*;
pub use domain::model::rate::*;
pub use domain::traits::*;
pub use infrastructure::dolarapi::*;
