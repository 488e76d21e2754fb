//! Precomputed grouping index for batch feature computation.
//!
//! Buckets the reference collection once per grouping key so that features
//! for every transaction can be computed without rescanning the collection.
//! Buckets hold positions in collection order, so group amounts (and the
//! statistics derived from them) are identical to a direct scan.

use crate::feature_set::TransactionFeatures;
use crate::grouping::amount_band;
use crate::stats::{mean, percentage, sample_std_dev};
use ordered_float::OrderedFloat;
use recur_core::Transaction;
use std::collections::HashMap;

/// Grouping index over a reference collection.
pub struct GroupIndex<'a> {
    transactions: &'a [Transaction],
    by_amount: HashMap<OrderedFloat<f64>, Vec<usize>>,
    by_name: HashMap<&'a str, Vec<usize>>,
    by_month: HashMap<u32, Vec<usize>>,
    by_weekday: HashMap<u32, Vec<usize>>,
    by_user: HashMap<&'a str, Vec<usize>>,
    /// Non-NaN amounts in ascending order.
    sorted_amounts: Vec<f64>,
}

impl<'a> GroupIndex<'a> {
    /// Build the index over `transactions`.
    pub fn new(transactions: &'a [Transaction]) -> Self {
        let mut by_amount: HashMap<OrderedFloat<f64>, Vec<usize>> = HashMap::new();
        let mut by_name: HashMap<&str, Vec<usize>> = HashMap::new();
        let mut by_month: HashMap<u32, Vec<usize>> = HashMap::new();
        let mut by_weekday: HashMap<u32, Vec<usize>> = HashMap::new();
        let mut by_user: HashMap<&str, Vec<usize>> = HashMap::new();

        for (i, t) in transactions.iter().enumerate() {
            // NaN never equals anything, including itself
            if !t.amount.is_nan() {
                by_amount.entry(OrderedFloat(t.amount)).or_default().push(i);
            }
            by_name.entry(t.name.as_str()).or_default().push(i);
            by_month.entry(t.month()).or_default().push(i);
            by_weekday.entry(t.weekday()).or_default().push(i);
            by_user.entry(t.user_id.as_str()).or_default().push(i);
        }

        let mut sorted_amounts: Vec<f64> = transactions
            .iter()
            .map(|t| t.amount)
            .filter(|a| !a.is_nan())
            .collect();
        sorted_amounts.sort_by(f64::total_cmp);

        Self {
            transactions,
            by_amount,
            by_name,
            by_month,
            by_weekday,
            by_user,
            sorted_amounts,
        }
    }

    /// Number of indexed transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn bucket_len<K>(map: &HashMap<K, Vec<usize>>, key: &K) -> usize
    where
        K: std::hash::Hash + Eq,
    {
        map.get(key).map_or(0, Vec::len)
    }

    fn bucket_amounts<K>(&self, map: &HashMap<K, Vec<usize>>, key: &K) -> Vec<f64>
    where
        K: std::hash::Hash + Eq,
    {
        map.get(key)
            .map(|idx| idx.iter().map(|&i| self.transactions[i].amount).collect())
            .unwrap_or_default()
    }

    /// Number of indexed amounts within `tolerance` of `amount`.
    ///
    /// `amount - center` is monotone in `amount`, so both band edges can be
    /// located by binary search using the same comparison as a direct scan.
    pub fn count_within_range(&self, amount: f64, tolerance: f64) -> usize {
        let band = amount_band(amount, tolerance);
        if band.is_nan() {
            return 0;
        }
        let lower = self.sorted_amounts.partition_point(|&a| a - amount < -band);
        let upper = self.sorted_amounts.partition_point(|&a| a - amount <= band);
        upper.saturating_sub(lower)
    }

    /// Compute every feature for `transaction` against the indexed collection.
    pub fn features(&self, transaction: &Transaction, tolerance: f64) -> TransactionFeatures {
        let total = self.len();
        let n_amount = if transaction.amount.is_nan() {
            0
        } else {
            Self::bucket_len(&self.by_amount, &OrderedFloat(transaction.amount))
        };
        let n_user = Self::bucket_len(&self.by_user, &transaction.user_id.as_str());
        let n_range = self.count_within_range(transaction.amount, tolerance);

        let name_amounts = self.bucket_amounts(&self.by_name, &transaction.name.as_str());
        let month_amounts = self.bucket_amounts(&self.by_month, &transaction.month());
        let weekday_amounts = self.bucket_amounts(&self.by_weekday, &transaction.weekday());

        TransactionFeatures {
            n_transactions_same_amount: n_amount as u64,
            percent_transactions_same_amount: percentage(n_amount, total),
            n_transactions_same_name: name_amounts.len() as u64,
            percent_transactions_same_name: percentage(name_amounts.len(), total),
            avg_amount_same_name: mean(&name_amounts),
            std_amount_same_name: sample_std_dev(&name_amounts),
            n_transactions_same_month: month_amounts.len() as u64,
            percent_transactions_same_month: percentage(month_amounts.len(), total),
            avg_amount_same_month: mean(&month_amounts),
            std_amount_same_month: sample_std_dev(&month_amounts),
            n_transactions_same_user_id: n_user as u64,
            percent_transactions_same_user_id: percentage(n_user, total),
            n_transactions_same_day_of_week: weekday_amounts.len() as u64,
            percent_transactions_same_day_of_week: percentage(weekday_amounts.len(), total),
            avg_amount_same_day_of_week: mean(&weekday_amounts),
            std_amount_same_day_of_week: sample_std_dev(&weekday_amounts),
            n_transactions_within_amount_range: n_range as u64,
            percent_transactions_within_amount_range: percentage(n_range, total),
        }
    }
}
