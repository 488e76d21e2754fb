//! Shared test data.

use recur_core::Transaction;

pub fn tx(id: i64, user_id: &str, name: &str, amount: f64, date: &str) -> Transaction {
    Transaction::parse(id, user_id, name, amount, date).unwrap()
}

/// Two vendors, two users, January and February 2024.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        tx(1, "user1", "vendor1", 100.0, "2024-01-01"),
        tx(2, "user1", "vendor1", 100.0, "2024-01-02"),
        tx(3, "user1", "vendor1", 200.0, "2024-01-03"),
        tx(4, "user2", "vendor2", 300.0, "2024-02-01"),
        tx(5, "user2", "vendor2", 300.0, "2024-02-02"),
    ]
}
