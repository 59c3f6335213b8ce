use std::collections::HashMap;

use crate::engine::Transaction;

/// Case-insensitive substring search over descriptions.
///
/// Records with a missing or empty description never match. An empty needle
/// matches every record that has a non-empty description — every string
/// contains the empty substring, and callers rely on that.
pub fn search_by_description(data: &[Transaction], needle: &str) -> Vec<Transaction> {
    let needle = needle.to_lowercase();

    data.iter()
        .filter(|tx| {
            tx.description
                .as_deref()
                .is_some_and(|desc| !desc.is_empty() && desc.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Counts, per category, how many records mention it in their description
/// (case-insensitive substring). A record counts under every category its
/// description contains. All requested categories appear in the result, with
/// 0 when nothing matched.
pub fn count_categories(data: &[Transaction], categories: &[&str]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = categories
        .iter()
        .map(|cat| (cat.to_string(), 0))
        .collect();

    for tx in data {
        let Some(description) = tx.description.as_deref() else {
            continue;
        };
        let description = description.to_lowercase();

        for category in categories {
            if description.contains(&category.to_lowercase()) {
                *counts.entry(category.to_string()).or_insert(0) += 1;
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_description(id: u64, description: &str) -> Transaction {
        serde_json::from_str(&format!(
            r#"{{"id": {id}, "description": "{description}"}}"#
        ))
        .unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            with_description(1, "Перевод организации"),
            with_description(2, "Перевод со счета на счет"),
            with_description(3, "Оплата услуг"),
            with_description(4, "Перевод с карты на карту"),
        ]
    }

    #[test]
    fn test_that_search_finds_substrings() {
        let found = search_by_description(&sample(), "перевод");
        assert_eq!(found.len(), 3);

        let found = search_by_description(&sample(), "карт");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, Some(4));
    }

    #[test]
    fn test_that_search_is_case_insensitive() {
        let found = search_by_description(&sample(), "ПЕРЕВОД");
        assert_eq!(found.len(), 3);

        let found = search_by_description(&sample(), "оПлАтА");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_that_search_preserves_order() {
        let found = search_by_description(&sample(), "счет");
        let ids: Vec<u64> = found.iter().map(|t| t.id.unwrap()).collect();
        assert_eq!(ids, vec![2]);

        let all: Vec<u64> = search_by_description(&sample(), "Перевод")
            .iter()
            .map(|t| t.id.unwrap())
            .collect();
        assert_eq!(all, vec![1, 2, 4]);
    }

    #[test]
    fn test_that_no_match_yields_empty() {
        assert!(search_by_description(&sample(), "нету").is_empty());
        assert!(search_by_description(&[], "перевод").is_empty());
    }

    #[test]
    fn test_that_empty_needle_matches_nonempty_descriptions() {
        // Intentional: every string contains the empty substring.
        let mut data = sample();
        data.push(with_description(5, ""));
        data.push(serde_json::from_str(r#"{"id": 6}"#).unwrap());

        let found = search_by_description(&data, "");
        assert_eq!(found.len(), 4);
        assert!(found.iter().all(|t| t.id != Some(5) && t.id != Some(6)));
    }

    #[test]
    fn test_that_records_without_description_never_match() {
        let data: Vec<Transaction> = vec![
            serde_json::from_str(r#"{"id": 1}"#).unwrap(),
            serde_json::from_str(r#"{"id": 2, "description": null}"#).unwrap(),
        ];
        assert!(search_by_description(&data, "перевод").is_empty());
    }

    #[test]
    fn test_that_categories_are_counted() {
        let counts = count_categories(&sample(), &["Перевод", "Оплата"]);
        assert_eq!(counts.get("Перевод"), Some(&3));
        assert_eq!(counts.get("Оплата"), Some(&1));
    }

    #[test]
    fn test_that_unmatched_categories_stay_at_zero() {
        let counts = count_categories(&sample(), &["еда"]);
        assert_eq!(counts.get("еда"), Some(&0));
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_that_one_record_can_count_under_many_categories() {
        let data = vec![with_description(1, "Перевод на карту")];
        let counts = count_categories(&data, &["Перевод", "карту", "Оплата"]);
        assert_eq!(counts.get("Перевод"), Some(&1));
        assert_eq!(counts.get("карту"), Some(&1));
        assert_eq!(counts.get("Оплата"), Some(&0));
    }

    #[test]
    fn test_that_category_matching_is_case_insensitive() {
        let counts = count_categories(&sample(), &["ПЕРЕВОД"]);
        assert_eq!(counts.get("ПЕРЕВОД"), Some(&3));
    }

    #[test]
    fn test_that_empty_input_keeps_all_categories_at_zero() {
        let counts = count_categories(&[], &["Перевод", "Оплата"]);
        assert_eq!(counts.get("Перевод"), Some(&0));
        assert_eq!(counts.get("Оплата"), Some(&0));
    }
}
