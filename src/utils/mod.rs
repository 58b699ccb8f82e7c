//! Utility functions and data structures.
//!
//! - [`app_data`] - Configuration file location and loading

pub mod app_data;

pub use app_data::*;
