//! # Kinship Config
//!
//! Layered configuration loading for Kinship: TOML files plus
//! `KINSHIP__`-prefixed environment variables.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
