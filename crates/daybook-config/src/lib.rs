//! daybook-config
//!
//! Persistent user preferences for daybook. Owns the `Config` model plus
//! disk persistence helpers. The configuration is an explicit object passed
//! to whoever needs it; nothing here is global state.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{Config, Currency, Theme};
