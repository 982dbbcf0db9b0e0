use measures_ws::measures::domain::{
    AnalysisRange, BranchSelector, ComponentTreeQuery, MeasureTable, PastMeasure,
};
use measures_ws::prelude::*;
use std::cell::RefCell;
use uuid::Uuid;

/// Mock database delegating to an [`InMemoryDatabase`] and recording which
/// queries were made, in order
pub struct RecordingDatabase {
    inner: InMemoryDatabase,
    calls: RefCell<Vec<&'static str>>,
}

impl RecordingDatabase {
    pub fn new(inner: InMemoryDatabase) -> Self {
        Self {
            inner,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn was_called(&self, query: &str) -> bool {
        self.calls.borrow().iter().any(|c| *c == query)
    }

    fn record(&self, query: &'static str) {
        self.calls.borrow_mut().push(query);
    }
}

impl ComponentRepository for RecordingDatabase {
    fn component_by_key(&self, key: &str, selector: &BranchSelector) -> Result<Option<Component>> {
        self.record("component_by_key");
        self.inner.component_by_key(key, selector)
    }

    fn component_by_uuid(&self, uuid: ComponentUuid) -> Result<Option<Component>> {
        self.record("component_by_uuid");
        self.inner.component_by_uuid(uuid)
    }

    fn components_by_uuids(&self, uuids: &[ComponentUuid]) -> Result<Vec<Component>> {
        self.record("components_by_uuids");
        self.inner.components_by_uuids(uuids)
    }

    fn components_by_keys(&self, keys: &[String]) -> Result<Vec<Component>> {
        self.record("components_by_keys");
        self.inner.components_by_keys(keys)
    }

    fn descendants(&self, query: &ComponentTreeQuery) -> Result<Vec<Component>> {
        self.record("descendants");
        self.inner.descendants(query)
    }

    fn branch_by_uuid(&self, uuid: ComponentUuid) -> Result<Option<Branch>> {
        self.record("branch_by_uuid");
        self.inner.branch_by_uuid(uuid)
    }
}

impl MetricCatalog for RecordingDatabase {
    fn metrics_by_keys(&self, keys: &[String]) -> Result<Vec<Metric>> {
        self.record("metrics_by_keys");
        self.inner.metrics_by_keys(keys)
    }
}

impl MeasureStore for RecordingDatabase {
    fn live_measures(&self, components: &[ComponentUuid], metrics: &[Metric]) -> Result<MeasureTable> {
        self.record("live_measures");
        self.inner.live_measures(components, metrics)
    }

    fn past_measures(
        &self,
        component: ComponentUuid,
        analyses: &[Uuid],
        metrics: &[Metric],
    ) -> Result<Vec<PastMeasure>> {
        self.record("past_measures");
        self.inner.past_measures(component, analyses, metrics)
    }
}

impl AnalysisRepository for RecordingDatabase {
    fn last_analysis(&self, root_uuid: ComponentUuid) -> Result<Option<Analysis>> {
        self.record("last_analysis");
        self.inner.last_analysis(root_uuid)
    }

    fn analyses(&self, root_uuid: ComponentUuid, range: &AnalysisRange) -> Result<Vec<Analysis>> {
        self.record("analyses");
        self.inner.analyses(root_uuid, range)
    }
}
