//! Core types and configuration for the recur-scan system.
//!
//! This crate provides shared types used across all other crates:
//! - The transaction record
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, FeatureConfig};
pub use error::{Error, Result};
pub use types::*;
