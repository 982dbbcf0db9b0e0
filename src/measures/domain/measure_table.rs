use super::component::ComponentUuid;
use super::measure::Measure;
use super::metric::MetricId;
use std::collections::HashMap;

/// Composite key of a measure association
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeasureKey {
    pub component: ComponentUuid,
    pub metric: MetricId,
}

impl MeasureKey {
    pub fn new(component: ComponentUuid, metric: MetricId) -> Self {
        Self { component, metric }
    }
}

/// Measures of a request, at most one per (component, metric) pair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasureTable {
    entries: HashMap<MeasureKey, Measure>,
}

impl MeasureTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, component: ComponentUuid, metric: MetricId) -> Option<&Measure> {
        self.entries.get(&MeasureKey::new(component, metric))
    }

    pub fn contains(&self, component: ComponentUuid, metric: MetricId) -> bool {
        self.entries.contains_key(&MeasureKey::new(component, metric))
    }

    /// Stores a measure, replacing any previous one for the same pair
    pub fn put(&mut self, component: ComponentUuid, metric: MetricId, measure: Measure) {
        self.entries.insert(MeasureKey::new(component, metric), measure);
    }

    /// Stores a measure only when the pair has none yet; returns whether it was stored
    pub fn put_if_absent(&mut self, component: ComponentUuid, metric: MetricId, measure: Measure) -> bool {
        match self.entries.entry(MeasureKey::new(component, metric)) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(measure);
                true
            }
        }
    }

    /// Drops every association whose metric does not satisfy `keep`
    pub fn retain_metrics(&mut self, keep: impl Fn(MetricId) -> bool) {
        self.entries.retain(|key, _| keep(key.metric));
    }

    /// Associations of one metric, in no particular order
    pub fn column(&self, metric: MetricId) -> impl Iterator<Item = (ComponentUuid, &Measure)> {
        self.entries
            .iter()
            .filter(move |(key, _)| key.metric == metric)
            .map(|(key, measure)| (key.component, measure))
    }

    /// Associations of one component, sorted by metric id
    pub fn row(&self, component: ComponentUuid) -> Vec<(MetricId, &Measure)> {
        let mut row: Vec<_> = self
            .entries
            .iter()
            .filter(|(key, _)| key.component == component)
            .map(|(key, measure)| (key.metric, measure))
            .collect();
        row.sort_by_key(|(metric, _)| *metric);
        row
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
