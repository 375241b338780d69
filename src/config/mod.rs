//! Optional settings for confgen runs
//!
//! - `loader`: Settings file discovery, parsing and validation

pub mod loader;


pub use loader::{Settings, SettingsV1};
