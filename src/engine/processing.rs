use crate::engine::Transaction;

/// The status most callers filter on.
pub const EXECUTED: &str = "EXECUTED";

/// Keeps the records whose `state` equals `state` exactly (case-sensitive).
/// Records without a state are excluded. Order is preserved.
pub fn filter_by_state(operations: &[Transaction], state: &str) -> Vec<Transaction> {
    operations
        .iter()
        .filter(|op| op.state.as_deref() == Some(state))
        .cloned()
        .collect()
}

/// Sorts records by their `date` string, newest first when `descending`.
///
/// ISO-8601 text compares lexicographically in chronological order, so no
/// date parsing happens here. Missing dates key as the empty string: last
/// under descending order, first under ascending. The sort is stable, so
/// equal dates keep their original relative order.
pub fn sort_by_date(operations: &[Transaction], descending: bool) -> Vec<Transaction> {
    let mut sorted = operations.to_vec();
    sorted.sort_by(|a, b| {
        if descending {
            b.date_key().cmp(a.date_key())
        } else {
            a.date_key().cmp(b.date_key())
        }
    });
    sorted
}
