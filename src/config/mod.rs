//! Configuration module for the registry service
//!
//! This module provides the `ServiceConfig` struct and its type-safe builder
//! for configuring the service with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{ServiceConfigBuilder, WithDataUrl};
pub use types::ServiceConfig;
