//! Per-transaction feature functions.
//!
//! Each function takes the target transaction and the reference collection
//! it belongs to. The collection must be non-empty and contain the target;
//! this is not checked here (see [`crate::FeatureEngine::try_get_features`]).

use crate::feature_set::{FeatureMap, TransactionFeatures};
use crate::grouping::{group_amounts, group_count, GroupKey};
use crate::stats::{mean, percentage, sample_std_dev};
use recur_core::config::DEFAULT_TOLERANCE;
use recur_core::Transaction;

fn count(key: GroupKey, transaction: &Transaction, transactions: &[Transaction]) -> usize {
    group_count(key, transaction, transactions)
}

fn percent(key: GroupKey, transaction: &Transaction, transactions: &[Transaction]) -> f64 {
    percentage(count(key, transaction, transactions), transactions.len())
}

fn avg_amount(key: GroupKey, transaction: &Transaction, transactions: &[Transaction]) -> f64 {
    mean(&group_amounts(key, transaction, transactions))
}

fn std_amount(key: GroupKey, transaction: &Transaction, transactions: &[Transaction]) -> f64 {
    sample_std_dev(&group_amounts(key, transaction, transactions))
}

/// Number of transactions with exactly the same amount.
pub fn get_n_transactions_same_amount(transaction: &Transaction, transactions: &[Transaction]) -> usize {
    count(GroupKey::Amount, transaction, transactions)
}

/// Fraction of transactions with exactly the same amount.
pub fn get_percent_transactions_same_amount(
    transaction: &Transaction,
    transactions: &[Transaction],
) -> f64 {
    percent(GroupKey::Amount, transaction, transactions)
}

/// Number of transactions with the same vendor name.
pub fn get_n_transactions_same_name(transaction: &Transaction, transactions: &[Transaction]) -> usize {
    count(GroupKey::Name, transaction, transactions)
}

/// Fraction of transactions with the same vendor name.
pub fn get_percent_transactions_same_name(
    transaction: &Transaction,
    transactions: &[Transaction],
) -> f64 {
    percent(GroupKey::Name, transaction, transactions)
}

/// Mean amount of transactions with the same vendor name.
pub fn get_avg_amount_same_name(transaction: &Transaction, transactions: &[Transaction]) -> f64 {
    avg_amount(GroupKey::Name, transaction, transactions)
}

/// Sample standard deviation of amounts with the same vendor name.
pub fn get_std_amount_same_name(transaction: &Transaction, transactions: &[Transaction]) -> f64 {
    std_amount(GroupKey::Name, transaction, transactions)
}

/// Number of transactions in the same calendar month (any year).
pub fn get_n_transactions_same_month(transaction: &Transaction, transactions: &[Transaction]) -> usize {
    count(GroupKey::Month, transaction, transactions)
}

/// Fraction of transactions in the same calendar month.
pub fn get_percent_transactions_same_month(
    transaction: &Transaction,
    transactions: &[Transaction],
) -> f64 {
    percent(GroupKey::Month, transaction, transactions)
}

/// Mean amount of transactions in the same calendar month.
pub fn get_avg_amount_same_month(transaction: &Transaction, transactions: &[Transaction]) -> f64 {
    avg_amount(GroupKey::Month, transaction, transactions)
}

/// Sample standard deviation of amounts in the same calendar month.
pub fn get_std_amount_same_month(transaction: &Transaction, transactions: &[Transaction]) -> f64 {
    std_amount(GroupKey::Month, transaction, transactions)
}

/// Number of transactions belonging to the same user.
pub fn get_n_transactions_same_user_id(
    transaction: &Transaction,
    transactions: &[Transaction],
) -> usize {
    count(GroupKey::UserId, transaction, transactions)
}

/// Fraction of transactions belonging to the same user.
pub fn get_percent_transactions_same_user_id(
    transaction: &Transaction,
    transactions: &[Transaction],
) -> f64 {
    percent(GroupKey::UserId, transaction, transactions)
}

/// Number of transactions on the same day of the week.
pub fn get_n_transactions_same_day_of_week(
    transaction: &Transaction,
    transactions: &[Transaction],
) -> usize {
    count(GroupKey::DayOfWeek, transaction, transactions)
}

/// Fraction of transactions on the same day of the week.
pub fn get_percent_transactions_same_day_of_week(
    transaction: &Transaction,
    transactions: &[Transaction],
) -> f64 {
    percent(GroupKey::DayOfWeek, transaction, transactions)
}

/// Mean amount of transactions on the same day of the week.
pub fn get_avg_amount_same_day_of_week(
    transaction: &Transaction,
    transactions: &[Transaction],
) -> f64 {
    avg_amount(GroupKey::DayOfWeek, transaction, transactions)
}

/// Sample standard deviation of amounts on the same day of the week.
pub fn get_std_amount_same_day_of_week(
    transaction: &Transaction,
    transactions: &[Transaction],
) -> f64 {
    std_amount(GroupKey::DayOfWeek, transaction, transactions)
}

/// Number of transactions whose amount is within `tolerance` (a fraction of
/// the target amount) of the target amount, boundary included.
pub fn get_n_transactions_within_amount_range(
    transaction: &Transaction,
    transactions: &[Transaction],
    tolerance: f64,
) -> usize {
    count(GroupKey::AmountRange { tolerance }, transaction, transactions)
}

/// Fraction of transactions within `tolerance` of the target amount.
pub fn get_percent_transactions_within_amount_range(
    transaction: &Transaction,
    transactions: &[Transaction],
    tolerance: f64,
) -> f64 {
    percent(GroupKey::AmountRange { tolerance }, transaction, transactions)
}

/// Compute every feature for `transaction` with the given range tolerance.
pub fn compute_features(
    transaction: &Transaction,
    transactions: &[Transaction],
    tolerance: f64,
) -> TransactionFeatures {
    let total = transactions.len();
    let n_amount = get_n_transactions_same_amount(transaction, transactions);
    let n_name = get_n_transactions_same_name(transaction, transactions);
    let n_month = get_n_transactions_same_month(transaction, transactions);
    let n_user = get_n_transactions_same_user_id(transaction, transactions);
    let n_weekday = get_n_transactions_same_day_of_week(transaction, transactions);
    let n_range = get_n_transactions_within_amount_range(transaction, transactions, tolerance);

    let name_amounts = group_amounts(GroupKey::Name, transaction, transactions);
    let month_amounts = group_amounts(GroupKey::Month, transaction, transactions);
    let weekday_amounts = group_amounts(GroupKey::DayOfWeek, transaction, transactions);

    TransactionFeatures {
        n_transactions_same_amount: n_amount as u64,
        percent_transactions_same_amount: percentage(n_amount, total),
        n_transactions_same_name: n_name as u64,
        percent_transactions_same_name: percentage(n_name, total),
        avg_amount_same_name: mean(&name_amounts),
        std_amount_same_name: sample_std_dev(&name_amounts),
        n_transactions_same_month: n_month as u64,
        percent_transactions_same_month: percentage(n_month, total),
        avg_amount_same_month: mean(&month_amounts),
        std_amount_same_month: sample_std_dev(&month_amounts),
        n_transactions_same_user_id: n_user as u64,
        percent_transactions_same_user_id: percentage(n_user, total),
        n_transactions_same_day_of_week: n_weekday as u64,
        percent_transactions_same_day_of_week: percentage(n_weekday, total),
        avg_amount_same_day_of_week: mean(&weekday_amounts),
        std_amount_same_day_of_week: sample_std_dev(&weekday_amounts),
        n_transactions_within_amount_range: n_range as u64,
        percent_transactions_within_amount_range: percentage(n_range, total),
    }
}

/// Compute the full feature mapping for `transaction` with the default
/// tolerance of 0.1.
pub fn get_features(transaction: &Transaction, transactions: &[Transaction]) -> FeatureMap {
    compute_features(transaction, transactions, DEFAULT_TOLERANCE).into()
}
