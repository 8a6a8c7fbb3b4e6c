pub mod booking;
pub mod catalog;
pub mod config;
pub mod error;
pub mod pricing;

pub use config::{AppConfig, EasingType, PricingConfig, ScrollConfig, TabBarConfig};
pub use error::{Error, Result};
