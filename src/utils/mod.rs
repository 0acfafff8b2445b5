//! Utility functions and data structures.
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration loading (environment > config file > defaults)

pub mod app_data;

pub use app_data::*;
