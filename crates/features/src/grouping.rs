//! Grouping of a reference collection around a target transaction.
//!
//! Every feature is computed over the group of transactions that share some
//! attribute with the target. The group always includes the target itself.

use recur_core::Transaction;

/// Attribute a transaction shares with the target to be in its group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroupKey {
    /// Exactly the same amount.
    Amount,
    /// Same vendor name.
    Name,
    /// Same calendar month, any year.
    Month,
    /// Same day of the week.
    DayOfWeek,
    /// Same user.
    UserId,
    /// Amount within `tolerance * |target.amount|` of the target amount.
    AmountRange { tolerance: f64 },
}

impl GroupKey {
    /// Check whether `other` falls in the same group as `target`.
    #[inline]
    pub fn matches(&self, target: &Transaction, other: &Transaction) -> bool {
        match *self {
            GroupKey::Amount => other.amount == target.amount,
            GroupKey::Name => other.name == target.name,
            GroupKey::Month => other.month() == target.month(),
            GroupKey::DayOfWeek => other.weekday() == target.weekday(),
            GroupKey::UserId => other.user_id == target.user_id,
            GroupKey::AmountRange { tolerance } => {
                within_band(other.amount, target.amount, amount_band(target.amount, tolerance))
            }
        }
    }
}

/// Half-width of the amount band around `amount`.
///
/// A zero amount yields a zero-width band, which reduces to exact matching.
#[inline]
pub(crate) fn amount_band(amount: f64, tolerance: f64) -> f64 {
    tolerance * amount.abs()
}

/// Non-strict band check: `|amount - center| <= band`.
#[inline]
pub(crate) fn within_band(amount: f64, center: f64, band: f64) -> bool {
    (amount - center).abs() <= band
}

/// Count the transactions satisfying `pred`.
pub fn count_where<F>(transactions: &[Transaction], pred: F) -> usize
where
    F: Fn(&Transaction) -> bool,
{
    transactions.iter().filter(|&t| pred(t)).count()
}

/// Collect the transactions satisfying `pred`, preserving collection order.
pub fn filter_where<F>(transactions: &[Transaction], pred: F) -> Vec<&Transaction>
where
    F: Fn(&Transaction) -> bool,
{
    transactions.iter().filter(|&t| pred(t)).collect()
}

/// Size of the target's group under `key`.
pub fn group_count(key: GroupKey, target: &Transaction, transactions: &[Transaction]) -> usize {
    count_where(transactions, |t| key.matches(target, t))
}

/// Amounts of the target's group under `key`, in collection order.
pub fn group_amounts(key: GroupKey, target: &Transaction, transactions: &[Transaction]) -> Vec<f64> {
    filter_where(transactions, |t| key.matches(target, t))
        .into_iter()
        .map(|t| t.amount)
        .collect()
}
