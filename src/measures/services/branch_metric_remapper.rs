use crate::measures::domain::{Branch, Measure, MeasureOrigin, MeasureTable, Metric, MetricId};
use crate::measures::policies::{counterpart, new_code_counterpart};
use std::collections::HashMap;
use tracing::debug;

/// BranchMetricRemapper - Serves new code metrics on short-lived branches
///
/// Short-lived branches and pull requests only compute absolute metrics.
/// When active, the remapper widens the fetched metric set with the mapped
/// counterparts, copies each absolute value onto the requested new code
/// metric as its leak period variation, then drops whatever the caller did
/// not ask for.
#[derive(Debug, Clone)]
pub struct BranchMetricRemapper {
    requested_keys: Vec<String>,
    active: bool,
}

impl BranchMetricRemapper {
    /// Creates a remapper, active only on short-lived branches and pull requests
    pub fn new(requested_keys: &[String], branch: Option<&Branch>) -> Self {
        Self {
            requested_keys: requested_keys.to_vec(),
            active: branch.is_some_and(Branch::is_short_lived_or_pull_request),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn requested_keys(&self) -> &[String] {
        &self.requested_keys
    }

    /// Requested keys followed by the counterparts needed for the remap
    pub fn metric_keys_to_fetch(&self) -> Vec<String> {
        let mut keys = self.requested_keys.clone();
        if !self.active {
            return keys;
        }
        for key in &self.requested_keys {
            if let Some(mapped) = counterpart(key) {
                if !keys.iter().any(|k| k == mapped) {
                    keys.push(mapped.to_string());
                }
            }
        }
        keys
    }

    /// Remaps absolute values onto new code metrics, then drops unrequested metrics
    ///
    /// Must run after the measures are fetched and before they are filtered
    /// or sorted.
    ///
    /// # Returns
    /// The requested metrics, in fetch order
    pub fn apply(&self, table: &mut MeasureTable, metrics: Vec<Metric>) -> Vec<Metric> {
        if !self.active {
            return metrics;
        }

        let by_key: HashMap<&str, MetricId> =
            metrics.iter().map(|m| (m.key.as_str(), m.id)).collect();

        let mut remapped = Vec::new();
        for metric in &metrics {
            let Some(new_code_key) = new_code_counterpart(&metric.key) else {
                continue;
            };
            if !self.is_requested(new_code_key) {
                continue;
            }
            let Some(&new_code_id) = by_key.get(new_code_key) else {
                continue;
            };
            for (component, measure) in table.column(metric.id) {
                if let Some(value) = measure.value() {
                    remapped.push((component, new_code_id, value));
                }
            }
        }

        debug!(count = remapped.len(), "Remapped absolute measures onto new code metrics");
        for (component, metric, value) in remapped {
            table.put(
                component,
                metric,
                Measure::synthesized(None, Some(value), MeasureOrigin::BranchRemap),
            );
        }

        let requested: Vec<MetricId> = metrics
            .iter()
            .filter(|m| self.is_requested(&m.key))
            .map(|m| m.id)
            .collect();
        table.retain_metrics(|id| requested.contains(&id));

        metrics
            .into_iter()
            .filter(|m| self.is_requested(&m.key))
            .collect()
    }

    fn is_requested(&self, key: &str) -> bool {
        self.requested_keys.iter().any(|k| k == key)
    }
}
