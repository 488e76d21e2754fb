//! Feature computation for the recur-scan system.
//!
//! This crate handles:
//! - Grouping a transaction's reference collection by amount, name, month,
//!   day-of-week, user and amount range
//! - Group statistics (count, percentage, mean, sample standard deviation)
//! - Per-feature functions and the flat feature mapping
//! - Batch computation over a whole collection

pub mod grouping;
pub mod stats;
pub mod feature_set;
pub mod aggregator;
pub mod index;
pub mod engine;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod properties;

pub use grouping::{count_where, filter_where, GroupKey};
pub use feature_set::{FeatureMap, FeatureName, FeatureValue, TransactionFeatures};
pub use aggregator::*;
pub use index::GroupIndex;
pub use engine::FeatureEngine;
