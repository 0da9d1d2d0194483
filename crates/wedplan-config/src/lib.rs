//! wedplan-config
//!
//! Persistent user preferences for the wedding budget planner.
//! Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::{default_base_dir, ConfigManager, ConfigSnapshot, HOME_ENV};
pub use model::{Config, Theme};
