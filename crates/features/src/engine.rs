//! Feature computation engine.
//!
//! Binds the feature functions to a configured range tolerance and adds a
//! checked entry point plus batch computation over a whole collection.

use crate::aggregator::compute_features;
use crate::feature_set::{FeatureMap, TransactionFeatures};
use crate::index::GroupIndex;
use recur_core::{Config, Error, FeatureConfig, Result, Transaction};
use tracing::{debug, warn};

/// Feature computation engine.
#[derive(Debug, Clone, Default)]
pub struct FeatureEngine {
    config: FeatureConfig,
}

impl FeatureEngine {
    /// Create a new feature engine from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.features.clone(),
        }
    }

    /// Create a feature engine with an explicit range tolerance.
    pub fn with_tolerance(tolerance: f64) -> Result<Self> {
        Ok(Self {
            config: FeatureConfig::with_tolerance(tolerance)?,
        })
    }

    /// Range tolerance used for the amount-range features.
    pub fn tolerance(&self) -> f64 {
        self.config.tolerance
    }

    /// Compute the typed feature set for one transaction.
    pub fn compute(&self, transaction: &Transaction, transactions: &[Transaction]) -> TransactionFeatures {
        compute_features(transaction, transactions, self.config.tolerance)
    }

    /// Compute the feature mapping for one transaction.
    ///
    /// The collection must be non-empty and contain `transaction`.
    pub fn get_features(&self, transaction: &Transaction, transactions: &[Transaction]) -> FeatureMap {
        debug!(
            id = %transaction.id,
            collection_size = transactions.len(),
            tolerance = self.config.tolerance,
            "computing features"
        );
        self.compute(transaction, transactions).into()
    }

    /// Compute the feature mapping after checking the collection precondition.
    ///
    /// Membership uses value equality, which includes `f64 ==` on the amount:
    /// a target with a NaN amount is never found and yields
    /// [`Error::TargetNotFound`] even when it is in the collection.
    pub fn try_get_features(
        &self,
        transaction: &Transaction,
        transactions: &[Transaction],
    ) -> Result<FeatureMap> {
        if transactions.is_empty() {
            warn!(id = %transaction.id, "feature request against empty collection");
            return Err(Error::EmptyCollection);
        }
        if !transactions.contains(transaction) {
            warn!(
                id = %transaction.id,
                collection_size = transactions.len(),
                "transaction not found in reference collection"
            );
            return Err(Error::target_not_found(&transaction.id));
        }
        Ok(self.get_features(transaction, transactions))
    }

    /// Compute the typed feature sets for every transaction in the collection.
    pub fn compute_all(&self, transactions: &[Transaction]) -> Vec<TransactionFeatures> {
        let index = GroupIndex::new(transactions);
        transactions
            .iter()
            .map(|t| index.features(t, self.config.tolerance))
            .collect()
    }

    /// Compute the feature mapping for every transaction against the whole
    /// collection, in collection order.
    pub fn get_features_for_all(&self, transactions: &[Transaction]) -> Vec<FeatureMap> {
        debug!(
            collection_size = transactions.len(),
            tolerance = self.config.tolerance,
            "computing features for collection"
        );
        self.compute_all(transactions)
            .into_iter()
            .map(FeatureMap::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::get_features;
    use crate::feature_set::{FeatureName, FeatureValue};
    use crate::fixtures::{sample_transactions, tx};

    #[test]
    fn test_engine_creation() {
        let engine = FeatureEngine::new(&Config::default());
        assert_eq!(engine.tolerance(), 0.1);
        assert!(FeatureEngine::with_tolerance(-1.0).is_err());
    }

    #[test]
    fn test_default_engine_matches_get_features() {
        let txs = sample_transactions();
        let engine = FeatureEngine::default();
        for t in &txs {
            assert_eq!(engine.get_features(t, &txs), get_features(t, &txs));
        }
    }

    #[test]
    fn test_configured_tolerance() {
        let txs = sample_transactions();
        let engine = FeatureEngine::with_tolerance(0.5).unwrap();
        let features = engine.get_features(&txs[2], &txs);
        assert_eq!(
            features[&FeatureName::NTransactionsWithinAmountRange],
            FeatureValue::Count(5)
        );
    }

    #[test]
    fn test_try_get_features() {
        let txs = sample_transactions();
        let engine = FeatureEngine::default();

        assert!(engine.try_get_features(&txs[0], &txs).is_ok());
        assert!(matches!(
            engine.try_get_features(&txs[0], &[]),
            Err(Error::EmptyCollection)
        ));

        let outsider = tx(42, "user1", "vendor1", 100.0, "2024-01-01");
        assert!(matches!(
            engine.try_get_features(&outsider, &txs),
            Err(Error::TargetNotFound { ref id }) if id == "42"
        ));
    }

    #[test]
    fn test_nan_amount_target_is_not_found() {
        let mut txs = sample_transactions();
        txs.push(tx(6, "user1", "vendor1", f64::NAN, "2024-01-04"));
        let engine = FeatureEngine::default();
        assert!(matches!(
            engine.try_get_features(&txs[5], &txs),
            Err(Error::TargetNotFound { ref id }) if id == "6"
        ));
    }

    #[test]
    fn test_membership_is_by_value() {
        let txs = sample_transactions();
        let copy = txs[1].clone();
        let engine = FeatureEngine::default();
        assert!(engine.try_get_features(&copy, &txs).is_ok());
    }

    #[test]
    fn test_batch_matches_single() {
        let mut txs = sample_transactions();
        txs.push(tx(6, "user1", "vendor1", 105.0, "2024-03-04"));
        txs.push(tx(7, "user2", "vendor2", 0.0, "2023-01-08"));
        let engine = FeatureEngine::with_tolerance(0.1).unwrap();

        let batch = engine.get_features_for_all(&txs);
        assert_eq!(batch.len(), txs.len());
        for (t, features) in txs.iter().zip(&batch) {
            assert_eq!(features, &engine.get_features(t, &txs));
        }
    }

    #[test]
    fn test_batch_empty() {
        let engine = FeatureEngine::default();
        assert!(engine.get_features_for_all(&[]).is_empty());
    }
}
