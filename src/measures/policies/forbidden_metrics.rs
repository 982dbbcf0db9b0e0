use crate::measures::domain::{Metric, ValueType};

/// Value types that cannot be requested through the component tree
pub const FORBIDDEN_TREE_VALUE_TYPES: [ValueType; 2] = [ValueType::Data, ValueType::Distrib];

pub fn is_forbidden_in_tree(metric: &Metric) -> bool {
    FORBIDDEN_TREE_VALUE_TYPES.contains(&metric.value_type)
}

/// Sorted keys of the forbidden metrics among `metrics`
pub fn forbidden_tree_metric_keys(metrics: &[Metric]) -> Vec<String> {
    let mut keys: Vec<String> = metrics
        .iter()
        .filter(|m| is_forbidden_in_tree(m))
        .map(|m| m.key.clone())
        .collect();
    keys.sort();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_keys_are_sorted() {
        let metrics = vec![
            Metric::new(1, "ncloc_language_distribution", ValueType::Data),
            Metric::new(2, "complexity", ValueType::Int),
            Metric::new(3, "function_complexity_distribution", ValueType::Distrib),
        ];

        assert_eq!(
            forbidden_tree_metric_keys(&metrics),
            vec!["function_complexity_distribution", "ncloc_language_distribution"]
        );
    }

    #[test]
    fn test_level_and_string_are_allowed() {
        assert!(!is_forbidden_in_tree(&Metric::new(1, "alert_status", ValueType::Level)));
        assert!(!is_forbidden_in_tree(&Metric::new(2, "last_commit", ValueType::String)));
    }
}
