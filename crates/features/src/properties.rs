//! Property tests over randomly generated collections.

use crate::aggregator::*;
use crate::engine::FeatureEngine;
use crate::grouping::{group_amounts, GroupKey};
use approx::assert_relative_eq;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use recur_core::Transaction;

const NAMES: [&str; 3] = ["netflix", "gym", "grocer"];
const USERS: [&str; 3] = ["user1", "user2", "user3"];

/// A non-empty collection and the position of the target in it.
fn arb_collection() -> impl Strategy<Value = (Vec<Transaction>, usize)> {
    prop::collection::vec((0usize..3, 0usize..3, 0u32..40, 0u64..500), 1..40)
        .prop_map(|rows| {
            let base = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
            rows.into_iter()
                .enumerate()
                .map(|(i, (user, name, amount, day))| {
                    Transaction::new(
                        i as i64,
                        USERS[user],
                        NAMES[name],
                        amount as f64 * 2.5,
                        base.checked_add_days(Days::new(day)).unwrap(),
                    )
                })
                .collect::<Vec<_>>()
        })
        .prop_flat_map(|txs| {
            let len = txs.len();
            (Just(txs), 0..len)
        })
}

proptest! {
    #[test]
    fn target_is_in_every_group((txs, i) in arb_collection(), tolerance in 0.0f64..1.0) {
        let t = &txs[i];
        prop_assert!(get_n_transactions_same_amount(t, &txs) >= 1);
        prop_assert!(get_n_transactions_same_name(t, &txs) >= 1);
        prop_assert!(get_n_transactions_same_month(t, &txs) >= 1);
        prop_assert!(get_n_transactions_same_user_id(t, &txs) >= 1);
        prop_assert!(get_n_transactions_same_day_of_week(t, &txs) >= 1);
        prop_assert!(get_n_transactions_within_amount_range(t, &txs, tolerance) >= 1);
    }

    #[test]
    fn percent_is_count_over_total((txs, i) in arb_collection()) {
        let t = &txs[i];
        let len = txs.len() as f64;
        prop_assert_eq!(
            get_percent_transactions_same_amount(t, &txs),
            get_n_transactions_same_amount(t, &txs) as f64 / len
        );
        prop_assert_eq!(
            get_percent_transactions_same_name(t, &txs),
            get_n_transactions_same_name(t, &txs) as f64 / len
        );
        prop_assert_eq!(
            get_percent_transactions_same_month(t, &txs),
            get_n_transactions_same_month(t, &txs) as f64 / len
        );
        prop_assert_eq!(
            get_percent_transactions_same_user_id(t, &txs),
            get_n_transactions_same_user_id(t, &txs) as f64 / len
        );
        prop_assert_eq!(
            get_percent_transactions_same_day_of_week(t, &txs),
            get_n_transactions_same_day_of_week(t, &txs) as f64 / len
        );
        prop_assert_eq!(
            get_percent_transactions_within_amount_range(t, &txs, 0.1),
            get_n_transactions_within_amount_range(t, &txs, 0.1) as f64 / len
        );
    }

    #[test]
    fn singleton_groups_have_zero_std((txs, i) in arb_collection()) {
        let t = &txs[i];
        if get_n_transactions_same_name(t, &txs) == 1 {
            prop_assert_eq!(get_std_amount_same_name(t, &txs), 0.0);
        }
        if get_n_transactions_same_month(t, &txs) == 1 {
            prop_assert_eq!(get_std_amount_same_month(t, &txs), 0.0);
        }
        if get_n_transactions_same_day_of_week(t, &txs) == 1 {
            prop_assert_eq!(get_std_amount_same_day_of_week(t, &txs), 0.0);
        }
    }

    #[test]
    fn average_matches_plain_mean((txs, i) in arb_collection()) {
        let t = &txs[i];
        let checks = [
            (GroupKey::Name, get_avg_amount_same_name(t, &txs)),
            (GroupKey::Month, get_avg_amount_same_month(t, &txs)),
            (GroupKey::DayOfWeek, get_avg_amount_same_day_of_week(t, &txs)),
        ];
        for (key, avg) in checks {
            let amounts: Vec<f64> = txs
                .iter()
                .filter(|o| key.matches(t, o))
                .map(|o| o.amount)
                .collect();
            let expected = amounts.iter().sum::<f64>() / amounts.len() as f64;
            assert_relative_eq!(avg, expected, max_relative = 1e-9);
            prop_assert_eq!(group_amounts(key, t, &txs).len(), amounts.len());
        }
    }

    #[test]
    fn wider_tolerance_never_shrinks_range(
        (txs, i) in arb_collection(),
        narrow in 0.0f64..1.0,
        extra in 0.0f64..1.0,
    ) {
        let t = &txs[i];
        prop_assert!(
            get_n_transactions_within_amount_range(t, &txs, narrow + extra)
                >= get_n_transactions_within_amount_range(t, &txs, narrow)
        );
    }

    #[test]
    fn batch_matches_scan((txs, _) in arb_collection(), tolerance in 0.0f64..1.0) {
        let engine = FeatureEngine::with_tolerance(tolerance).unwrap();
        let batch = engine.compute_all(&txs);
        for (t, features) in txs.iter().zip(&batch) {
            prop_assert_eq!(features, &compute_features(t, &txs, tolerance));
        }
    }
}
