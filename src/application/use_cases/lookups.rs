use crate::measures::domain::{Component, ComponentUuid, Metric};
use crate::ports::outbound::{ComponentRepository, MetricCatalog};
use crate::shared::{MeasuresError, Result};
use std::collections::HashMap;

/// Requested keys that no metric matches, deduplicated, in request order
pub fn missing_metric_keys(requested: &[String], found: &[Metric]) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for key in requested {
        if !found.iter().any(|m| m.key == *key) && !missing.contains(key) {
            missing.push(key.clone());
        }
    }
    missing
}

/// Fetches `keys_to_fetch` and checks that every requested key resolved
///
/// Keys added on top of the request (branch counterparts) are allowed to be
/// missing.
///
/// # Returns
/// The metrics found, ordered as `keys_to_fetch`
///
/// # Errors
/// Not found naming every missing requested key
pub fn resolve_metrics<C: MetricCatalog>(
    catalog: &C,
    keys_to_fetch: &[String],
    requested: &[String],
) -> Result<Vec<Metric>> {
    let found = catalog.metrics_by_keys(keys_to_fetch)?;
    let missing = missing_metric_keys(requested, &found);
    if !missing.is_empty() {
        return Err(MeasuresError::not_found(format!(
            "The following metric keys are not found: {}",
            missing.join(", ")
        ))
        .into());
    }

    let mut ordered: Vec<Metric> = Vec::with_capacity(found.len());
    for key in keys_to_fetch {
        if ordered.iter().any(|m| m.key == *key) {
            continue;
        }
        if let Some(metric) = found.iter().find(|m| m.key == *key) {
            ordered.push(metric.clone());
        }
    }
    Ok(ordered)
}

/// Bulk lookup of the components the given copies stand for
pub fn reference_components<R: ComponentRepository>(
    repository: &R,
    components: &[Component],
) -> Result<HashMap<ComponentUuid, Component>> {
    let mut uuids: Vec<ComponentUuid> = components
        .iter()
        .filter_map(|c| c.copy_component_uuid)
        .collect();
    uuids.sort();
    uuids.dedup();
    if uuids.is_empty() {
        return Ok(HashMap::new());
    }

    Ok(repository
        .components_by_uuids(&uuids)?
        .into_iter()
        .map(|c| (c.uuid, c))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measures::domain::ValueType;
    use crate::shared::status_code_of;

    struct FixedCatalog(Vec<Metric>);

    impl MetricCatalog for FixedCatalog {
        fn metrics_by_keys(&self, keys: &[String]) -> Result<Vec<Metric>> {
            Ok(self
                .0
                .iter()
                .filter(|m| keys.contains(&m.key))
                .cloned()
                .collect())
        }
    }

    fn keys(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    fn catalog() -> FixedCatalog {
        FixedCatalog(vec![
            Metric::new(1, "ncloc", ValueType::Int),
            Metric::new(2, "violations", ValueType::Int),
            Metric::new(3, "new_violations", ValueType::Int),
        ])
    }

    #[test]
    fn test_every_missing_key_is_named_in_request_order() {
        let err = resolve_metrics(
            &catalog(),
            &keys(&["zeta", "ncloc", "alpha", "zeta"]),
            &keys(&["zeta", "ncloc", "alpha", "zeta"]),
        )
        .unwrap_err();

        assert_eq!(status_code_of(&err), 404);
        assert_eq!(
            err.to_string(),
            "The following metric keys are not found: zeta, alpha"
        );
    }

    #[test]
    fn test_missing_counterpart_is_tolerated() {
        let metrics = resolve_metrics(
            &catalog(),
            &keys(&["new_violations", "violations", "new_bugs"]),
            &keys(&["new_violations"]),
        )
        .unwrap();

        let resolved: Vec<_> = metrics.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(resolved, vec!["new_violations", "violations"]);
    }
}
