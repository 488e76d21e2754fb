//! Feature names and the per-transaction feature set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name of a single feature.
///
/// Variants are declared in output order, so a [`FeatureMap`] iterates in
/// that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureName {
    NTransactionsSameAmount,
    PercentTransactionsSameAmount,
    NTransactionsSameName,
    PercentTransactionsSameName,
    AvgAmountSameName,
    StdAmountSameName,
    NTransactionsSameMonth,
    PercentTransactionsSameMonth,
    AvgAmountSameMonth,
    StdAmountSameMonth,
    NTransactionsSameUserId,
    PercentTransactionsSameUserId,
    NTransactionsSameDayOfWeek,
    PercentTransactionsSameDayOfWeek,
    AvgAmountSameDayOfWeek,
    StdAmountSameDayOfWeek,
    NTransactionsWithinAmountRange,
    PercentTransactionsWithinAmountRange,
}

impl FeatureName {
    /// All features in output order.
    pub const ALL: [FeatureName; 18] = [
        FeatureName::NTransactionsSameAmount,
        FeatureName::PercentTransactionsSameAmount,
        FeatureName::NTransactionsSameName,
        FeatureName::PercentTransactionsSameName,
        FeatureName::AvgAmountSameName,
        FeatureName::StdAmountSameName,
        FeatureName::NTransactionsSameMonth,
        FeatureName::PercentTransactionsSameMonth,
        FeatureName::AvgAmountSameMonth,
        FeatureName::StdAmountSameMonth,
        FeatureName::NTransactionsSameUserId,
        FeatureName::PercentTransactionsSameUserId,
        FeatureName::NTransactionsSameDayOfWeek,
        FeatureName::PercentTransactionsSameDayOfWeek,
        FeatureName::AvgAmountSameDayOfWeek,
        FeatureName::StdAmountSameDayOfWeek,
        FeatureName::NTransactionsWithinAmountRange,
        FeatureName::PercentTransactionsWithinAmountRange,
    ];

    /// Feature key as used in exported feature dictionaries.
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureName::NTransactionsSameAmount => "n_transactions_same_amount",
            FeatureName::PercentTransactionsSameAmount => "percent_transactions_same_amount",
            FeatureName::NTransactionsSameName => "n_transactions_same_name",
            FeatureName::PercentTransactionsSameName => "percent_transactions_same_name",
            FeatureName::AvgAmountSameName => "avg_amount_same_name",
            FeatureName::StdAmountSameName => "std_amount_same_name",
            FeatureName::NTransactionsSameMonth => "n_transactions_same_month",
            FeatureName::PercentTransactionsSameMonth => "percent_transactions_same_month",
            FeatureName::AvgAmountSameMonth => "avg_amount_same_month",
            FeatureName::StdAmountSameMonth => "std_amount_same_month",
            FeatureName::NTransactionsSameUserId => "n_transactions_same_user_id",
            FeatureName::PercentTransactionsSameUserId => "percent_transactions_same_user_id",
            FeatureName::NTransactionsSameDayOfWeek => "n_transactions_same_day_of_week",
            FeatureName::PercentTransactionsSameDayOfWeek => "percent_transactions_same_day_of_week",
            FeatureName::AvgAmountSameDayOfWeek => "avg_amount_same_day_of_week",
            FeatureName::StdAmountSameDayOfWeek => "std_amount_same_day_of_week",
            FeatureName::NTransactionsWithinAmountRange => "n_transactions_within_amount_range",
            FeatureName::PercentTransactionsWithinAmountRange => {
                "percent_transactions_within_amount_range"
            }
        }
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A feature value: either a group size or a real-valued statistic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Count(u64),
    Real(f64),
}

impl FeatureValue {
    /// Value as f64 regardless of kind.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            FeatureValue::Count(n) => n as f64,
            FeatureValue::Real(x) => x,
        }
    }
}

/// Flat feature mapping for one transaction.
pub type FeatureMap = BTreeMap<FeatureName, FeatureValue>;

/// Complete feature set for one transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionFeatures {
    /// Transactions with exactly the same amount.
    pub n_transactions_same_amount: u64,
    /// Fraction of the collection with the same amount.
    pub percent_transactions_same_amount: f64,
    /// Transactions with the same vendor name.
    pub n_transactions_same_name: u64,
    /// Fraction of the collection with the same vendor name.
    pub percent_transactions_same_name: f64,
    /// Mean amount over the same-name group.
    pub avg_amount_same_name: f64,
    /// Sample standard deviation of amounts over the same-name group.
    pub std_amount_same_name: f64,
    /// Transactions in the same calendar month (any year).
    pub n_transactions_same_month: u64,
    /// Fraction of the collection in the same calendar month.
    pub percent_transactions_same_month: f64,
    /// Mean amount over the same-month group.
    pub avg_amount_same_month: f64,
    /// Sample standard deviation of amounts over the same-month group.
    pub std_amount_same_month: f64,
    /// Transactions belonging to the same user.
    pub n_transactions_same_user_id: u64,
    /// Fraction of the collection belonging to the same user.
    pub percent_transactions_same_user_id: f64,
    /// Transactions on the same day of the week.
    pub n_transactions_same_day_of_week: u64,
    /// Fraction of the collection on the same day of the week.
    pub percent_transactions_same_day_of_week: f64,
    /// Mean amount over the same-weekday group.
    pub avg_amount_same_day_of_week: f64,
    /// Sample standard deviation of amounts over the same-weekday group.
    pub std_amount_same_day_of_week: f64,
    /// Transactions whose amount is within the tolerance band.
    pub n_transactions_within_amount_range: u64,
    /// Fraction of the collection within the tolerance band.
    pub percent_transactions_within_amount_range: f64,
}

impl TransactionFeatures {
    /// Look up a single feature.
    pub fn get(&self, name: FeatureName) -> FeatureValue {
        use FeatureValue::{Count, Real};
        match name {
            FeatureName::NTransactionsSameAmount => Count(self.n_transactions_same_amount),
            FeatureName::PercentTransactionsSameAmount => {
                Real(self.percent_transactions_same_amount)
            }
            FeatureName::NTransactionsSameName => Count(self.n_transactions_same_name),
            FeatureName::PercentTransactionsSameName => Real(self.percent_transactions_same_name),
            FeatureName::AvgAmountSameName => Real(self.avg_amount_same_name),
            FeatureName::StdAmountSameName => Real(self.std_amount_same_name),
            FeatureName::NTransactionsSameMonth => Count(self.n_transactions_same_month),
            FeatureName::PercentTransactionsSameMonth => {
                Real(self.percent_transactions_same_month)
            }
            FeatureName::AvgAmountSameMonth => Real(self.avg_amount_same_month),
            FeatureName::StdAmountSameMonth => Real(self.std_amount_same_month),
            FeatureName::NTransactionsSameUserId => Count(self.n_transactions_same_user_id),
            FeatureName::PercentTransactionsSameUserId => {
                Real(self.percent_transactions_same_user_id)
            }
            FeatureName::NTransactionsSameDayOfWeek => {
                Count(self.n_transactions_same_day_of_week)
            }
            FeatureName::PercentTransactionsSameDayOfWeek => {
                Real(self.percent_transactions_same_day_of_week)
            }
            FeatureName::AvgAmountSameDayOfWeek => Real(self.avg_amount_same_day_of_week),
            FeatureName::StdAmountSameDayOfWeek => Real(self.std_amount_same_day_of_week),
            FeatureName::NTransactionsWithinAmountRange => {
                Count(self.n_transactions_within_amount_range)
            }
            FeatureName::PercentTransactionsWithinAmountRange => {
                Real(self.percent_transactions_within_amount_range)
            }
        }
    }

    /// Convert into a flat feature mapping with all 18 keys.
    pub fn to_map(&self) -> FeatureMap {
        FeatureName::ALL
            .iter()
            .map(|&name| (name, self.get(name)))
            .collect()
    }
}

impl From<TransactionFeatures> for FeatureMap {
    fn from(features: TransactionFeatures) -> Self {
        features.to_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_name_matches_as_str() {
        for name in FeatureName::ALL {
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, format!("\"{}\"", name.as_str()));
        }
    }

    #[test]
    fn test_all_is_sorted_and_unique() {
        let mut sorted = FeatureName::ALL.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, FeatureName::ALL.to_vec());
    }

    #[test]
    fn test_feature_value() {
        assert_eq!(FeatureValue::Count(3).as_f64(), 3.0);
        assert_eq!(FeatureValue::Real(0.4).as_f64(), 0.4);
        assert_eq!(serde_json::to_string(&FeatureValue::Count(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&FeatureValue::Real(0.5)).unwrap(), "0.5");
    }
}
