use crate::measures::domain::{Component, MeasureTable, Metric};
use crate::measures::policies::{is_eligible_for_best_value, BestValueSynthesizer};

/// Fills the gaps left by the best-value storage optimization
///
/// For every eligible component and every optimized metric without an
/// association, a synthetic measure is stored. Existing associations are
/// never replaced.
///
/// # Returns
/// The number of synthesized measures
pub fn backfill_best_values(
    table: &mut MeasureTable,
    components: &[Component],
    metrics: &[Metric],
) -> usize {
    let optimized = BestValueSynthesizer::optimized_metrics(metrics);
    if optimized.is_empty() {
        return 0;
    }

    let mut synthesized = 0;
    for component in components.iter().filter(|c| is_eligible_for_best_value(c)) {
        for metric in &optimized {
            if table.contains(component.uuid, metric.id) {
                continue;
            }
            if let Some(measure) = BestValueSynthesizer::synthesize(metric) {
                table.put(component.uuid, metric.id, measure);
                synthesized += 1;
            }
        }
    }
    synthesized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measures::domain::{Measure, MeasureOrigin, Qualifier, ValueType};
    use uuid::Uuid;

    #[test]
    fn test_backfill_only_fills_gaps_on_files() {
        let project = Component::root(Uuid::from_u128(1), "my_app", Qualifier::Project);
        let dir = Component::child_of(&project, Uuid::from_u128(2), "my_app:src", Qualifier::Directory);
        let a = Component::child_of(&dir, Uuid::from_u128(3), "my_app:src/A", Qualifier::File);
        let b = Component::child_of(&dir, Uuid::from_u128(4), "my_app:src/B", Qualifier::File);
        let complexity = Metric::new(1, "complexity", ValueType::Int).with_optimized_best_value(0.0);
        let ncloc = Metric::new(2, "ncloc", ValueType::Int);

        let mut table = MeasureTable::new();
        table.put(b.uuid, complexity.id, Measure::with_value(12.0));

        let count = backfill_best_values(
            &mut table,
            &[project.clone(), dir.clone(), a.clone(), b.clone()],
            &[complexity.clone(), ncloc.clone()],
        );

        assert_eq!(count, 1);
        let synthesized = table.get(a.uuid, complexity.id).unwrap();
        assert_eq!(synthesized.value(), Some(0.0));
        assert_eq!(synthesized.origin(), MeasureOrigin::BestValue);
        assert_eq!(table.get(b.uuid, complexity.id).unwrap().value(), Some(12.0));
        assert!(!table.contains(dir.uuid, complexity.id));
        assert!(!table.contains(project.uuid, complexity.id));
        assert!(!table.contains(a.uuid, ncloc.id));
    }

    #[test]
    fn test_backfill_new_code_metric_uses_zero_variation() {
        let project = Component::root(Uuid::from_u128(1), "my_app", Qualifier::Project);
        let test_file = Component::child_of(&project, Uuid::from_u128(2), "my_app:ATest", Qualifier::UnitTestFile);
        let new_violations = Metric::new(7, "new_violations", ValueType::Int).with_optimized_best_value(0.0);

        let mut table = MeasureTable::new();
        backfill_best_values(&mut table, &[test_file.clone()], &[new_violations.clone()]);

        let measure = table.get(test_file.uuid, new_violations.id).unwrap();
        assert_eq!(measure.value(), None);
        assert_eq!(measure.variation(), Some(0.0));
    }
}
