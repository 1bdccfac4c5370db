pub mod chart_configs;
pub mod color;
pub mod config;

pub use chart_configs::*;
pub use color::*;
pub use config::*;
