//! Configuration module
//!
//! - types: configuration data structures
//! - loader: argument parsing and environment overrides

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
