use super::dataset::Dataset;
use crate::measures::domain::{
    Analysis, AnalysisRange, Branch, BranchSelector, Component, ComponentTreeQuery, ComponentUuid,
    Measure, MeasureTable, Metric, MetricId, PastMeasure, Strategy,
};
use crate::ports::outbound::{AnalysisRepository, ComponentRepository, MeasureStore, MetricCatalog};
use crate::shared::Result;
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::warn;
use uuid::Uuid;

/// InMemoryDatabase adapter serving every data port from a loaded dataset
///
/// Lookups go through indexes built once at construction; the dataset is
/// never mutated afterwards.
pub struct InMemoryDatabase {
    dataset: Dataset,
    component_index: HashMap<ComponentUuid, usize>,
    children_index: HashMap<ComponentUuid, Vec<usize>>,
    branch_index: HashMap<ComponentUuid, usize>,
    metric_ids: HashMap<String, MetricId>,
}

impl InMemoryDatabase {
    pub fn new(dataset: Dataset) -> Self {
        let mut component_index = HashMap::new();
        let mut children_index: HashMap<ComponentUuid, Vec<usize>> = HashMap::new();
        for (position, component) in dataset.components.iter().enumerate() {
            component_index.insert(component.uuid, position);
            if let Some(parent) = component.parent_uuid {
                children_index.entry(parent).or_default().push(position);
            }
        }
        let branch_index = dataset
            .branches
            .iter()
            .enumerate()
            .map(|(position, branch)| (branch.uuid, position))
            .collect();
        let metric_ids = dataset
            .metrics
            .iter()
            .map(|m| (m.key.clone(), m.id))
            .collect();

        Self {
            dataset,
            component_index,
            children_index,
            branch_index,
            metric_ids,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    fn component_at(&self, uuid: &ComponentUuid) -> Option<&Component> {
        self.component_index
            .get(uuid)
            .map(|&position| &self.dataset.components[position])
            .filter(|c| c.enabled)
    }

    fn branch_of(&self, component: &Component) -> Option<&Branch> {
        self.branch_index
            .get(&component.branch_uuid)
            .map(|&position| &self.dataset.branches[position])
    }

    /// Components without a branch record are considered on the main branch
    fn is_on(&self, component: &Component, selector: &BranchSelector) -> bool {
        match self.branch_of(component) {
            Some(branch) => selector.matches(branch),
            None => *selector == BranchSelector::Main,
        }
    }

    fn children_of(&self, uuid: &ComponentUuid) -> impl Iterator<Item = &Component> {
        self.children_index
            .get(uuid)
            .into_iter()
            .flatten()
            .map(|&position| &self.dataset.components[position])
            .filter(|c| c.enabled)
    }

    fn wanted_metric_ids(&self, metrics: &[Metric]) -> HashSet<MetricId> {
        metrics.iter().map(|m| m.id).collect()
    }

    fn metric_id(&self, key: &str) -> Option<MetricId> {
        let id = self.metric_ids.get(key).copied();
        if id.is_none() {
            warn!(metric = key, "Stored measure refers to an unknown metric");
        }
        id
    }
}

impl MetricCatalog for InMemoryDatabase {
    fn metrics_by_keys(&self, keys: &[String]) -> Result<Vec<Metric>> {
        Ok(self
            .dataset
            .metrics
            .iter()
            .filter(|m| keys.contains(&m.key))
            .cloned()
            .collect())
    }
}

impl ComponentRepository for InMemoryDatabase {
    fn component_by_key(&self, key: &str, selector: &BranchSelector) -> Result<Option<Component>> {
        Ok(self
            .dataset
            .components
            .iter()
            .find(|c| c.enabled && c.key == key && self.is_on(c, selector))
            .cloned())
    }

    fn component_by_uuid(&self, uuid: ComponentUuid) -> Result<Option<Component>> {
        Ok(self.component_at(&uuid).cloned())
    }

    fn components_by_uuids(&self, uuids: &[ComponentUuid]) -> Result<Vec<Component>> {
        Ok(uuids
            .iter()
            .filter_map(|uuid| self.component_at(uuid))
            .cloned()
            .collect())
    }

    fn components_by_keys(&self, keys: &[String]) -> Result<Vec<Component>> {
        Ok(self
            .dataset
            .components
            .iter()
            .filter(|c| c.enabled && keys.contains(&c.key) && self.is_on(c, &BranchSelector::Main))
            .cloned()
            .collect())
    }

    fn descendants(&self, query: &ComponentTreeQuery) -> Result<Vec<Component>> {
        if query.matches_nothing() {
            return Ok(vec![]);
        }

        let mut found = Vec::new();
        if query.strategy() == Strategy::Children {
            found.extend(self.children_of(&query.base_uuid()));
        } else {
            // Breadth first, so parents come before their children
            let mut queue = VecDeque::from([query.base_uuid()]);
            while let Some(uuid) = queue.pop_front() {
                for child in self.children_of(&uuid) {
                    queue.push_back(child.uuid);
                    found.push(child);
                }
            }
        }

        Ok(found
            .into_iter()
            .filter(|c| query.accepts(c))
            .cloned()
            .collect())
    }

    fn branch_by_uuid(&self, uuid: ComponentUuid) -> Result<Option<Branch>> {
        Ok(self
            .branch_index
            .get(&uuid)
            .map(|&position| self.dataset.branches[position].clone()))
    }
}

impl AnalysisRepository for InMemoryDatabase {
    fn last_analysis(&self, root_uuid: ComponentUuid) -> Result<Option<Analysis>> {
        Ok(self
            .dataset
            .analyses
            .iter()
            .filter(|a| a.component_uuid == root_uuid && a.is_processed())
            .max_by_key(|a| a.created_at)
            .cloned())
    }

    fn analyses(&self, root_uuid: ComponentUuid, range: &AnalysisRange) -> Result<Vec<Analysis>> {
        let mut analyses: Vec<Analysis> = self
            .dataset
            .analyses
            .iter()
            .filter(|a| a.component_uuid == root_uuid && a.is_processed())
            .filter(|a| range.contains(&a.created_at))
            .cloned()
            .collect();
        analyses.sort_by_key(|a| a.created_at);
        Ok(analyses)
    }
}

impl MeasureStore for InMemoryDatabase {
    fn live_measures(&self, components: &[ComponentUuid], metrics: &[Metric]) -> Result<MeasureTable> {
        let components: HashSet<Uuid> = components.iter().map(|c| c.0).collect();
        let wanted = self.wanted_metric_ids(metrics);

        let mut table = MeasureTable::new();
        for stored in &self.dataset.measures {
            if !components.contains(&stored.component_uuid) {
                continue;
            }
            let Some(metric_id) = self.metric_id(&stored.metric_key) else {
                continue;
            };
            if wanted.contains(&metric_id) {
                table.put(ComponentUuid(stored.component_uuid), metric_id, stored.to_measure());
            }
        }
        Ok(table)
    }

    fn past_measures(
        &self,
        component: ComponentUuid,
        analyses: &[Uuid],
        metrics: &[Metric],
    ) -> Result<Vec<PastMeasure>> {
        let wanted = self.wanted_metric_ids(metrics);

        let mut measures = Vec::new();
        for stored in &self.dataset.history {
            if stored.component_uuid != component.0 || !analyses.contains(&stored.analysis_uuid) {
                continue;
            }
            let Some(metric_id) = self.metric_id(&stored.metric_key) else {
                continue;
            };
            if wanted.contains(&metric_id) {
                measures.push(PastMeasure {
                    analysis_uuid: stored.analysis_uuid,
                    metric_id,
                    measure: Measure::new(
                        stored.value,
                        stored.variation,
                        stored.data.clone(),
                    ),
                });
            }
        }
        Ok(measures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measures::domain::{
        AnalysisStatus, BranchType, Qualifier, StoredMeasure, ValueType,
    };
    use chrono::{TimeZone, Utc};

    fn uuid(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    fn analysis(n: u128, root: &Component, day: u32, status: AnalysisStatus) -> Analysis {
        Analysis {
            uuid: uuid(n),
            component_uuid: root.uuid,
            created_at: Utc.with_ymd_and_hms(2024, 1, day, 10, 0, 0).unwrap(),
            status,
            period: None,
        }
    }

    fn database() -> InMemoryDatabase {
        let project = Component::root(uuid(1), "p", Qualifier::Project).with_name("Project");
        let src = Component::child_of(&project, uuid(2), "p:src", Qualifier::Directory).with_name("src");
        let main = Component::child_of(&src, uuid(3), "p:src/Main.java", Qualifier::File).with_name("Main.java");
        let mut removed = Component::child_of(&src, uuid(4), "p:src/Old.java", Qualifier::File).with_name("Old.java");
        removed.enabled = false;
        let feature = Component::root(uuid(10), "p", Qualifier::Project).with_name("Project");

        InMemoryDatabase::new(Dataset {
            metrics: vec![
                Metric::new(1, "ncloc", ValueType::Int),
                Metric::new(2, "coverage", ValueType::Percent),
            ],
            branches: vec![
                Branch {
                    uuid: project.uuid,
                    project_uuid: project.uuid,
                    key: "master".to_string(),
                    branch_type: BranchType::Long,
                    is_main: true,
                },
                Branch {
                    uuid: feature.uuid,
                    project_uuid: project.uuid,
                    key: "feature/x".to_string(),
                    branch_type: BranchType::Short,
                    is_main: false,
                },
            ],
            analyses: vec![
                analysis(100, &project, 3, AnalysisStatus::Processed),
                analysis(101, &project, 1, AnalysisStatus::Processed),
                analysis(102, &project, 5, AnalysisStatus::Unprocessed),
            ],
            measures: vec![
                StoredMeasure {
                    component_uuid: uuid(3),
                    metric_key: "ncloc".to_string(),
                    value: Some(12.0),
                    variation: None,
                    data: None,
                },
                StoredMeasure {
                    component_uuid: uuid(3),
                    metric_key: "gone".to_string(),
                    value: Some(1.0),
                    variation: None,
                    data: None,
                },
            ],
            components: vec![project, src, main, removed, feature],
            history: vec![],
        })
    }

    #[test]
    fn test_component_by_key_respects_branch() {
        let db = database();
        let main = db.component_by_key("p", &BranchSelector::Main).unwrap().unwrap();
        let feature = db
            .component_by_key("p", &BranchSelector::Branch("feature/x".to_string()))
            .unwrap()
            .unwrap();

        assert_eq!(main.uuid, ComponentUuid(uuid(1)));
        assert_eq!(feature.uuid, ComponentUuid(uuid(10)));
        assert!(db
            .component_by_key("p", &BranchSelector::PullRequest("feature/x".to_string()))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_descendants_by_strategy() {
        let db = database();
        let base = ComponentUuid(uuid(1));

        let children = db
            .descendants(&ComponentTreeQuery::new(base, Strategy::Children, None, None))
            .unwrap();
        let all = db
            .descendants(&ComponentTreeQuery::new(base, Strategy::All, None, None))
            .unwrap();
        let files = db
            .descendants(&ComponentTreeQuery::new(
                base,
                Strategy::All,
                None,
                Some(vec![Qualifier::File]),
            ))
            .unwrap();

        let keys = |components: &[Component]| -> Vec<String> {
            components.iter().map(|c| c.key.clone()).collect()
        };
        assert_eq!(keys(&children), vec!["p:src"]);
        assert_eq!(keys(&all), vec!["p:src", "p:src/Main.java"]);
        assert_eq!(keys(&files), vec!["p:src/Main.java"]);
    }

    #[test]
    fn test_last_analysis_ignores_unprocessed() {
        let db = database();
        let last = db.last_analysis(ComponentUuid(uuid(1))).unwrap().unwrap();
        assert_eq!(last.uuid, uuid(100));

        let all = db
            .analyses(ComponentUuid(uuid(1)), &AnalysisRange::default())
            .unwrap();
        let order: Vec<Uuid> = all.iter().map(|a| a.uuid).collect();
        assert_eq!(order, vec![uuid(101), uuid(100)]);
    }

    #[test]
    fn test_live_measures_skip_unknown_metrics() {
        let db = database();
        let metrics = db
            .metrics_by_keys(&["ncloc".to_string(), "coverage".to_string()])
            .unwrap();

        let table = db
            .live_measures(&[ComponentUuid(uuid(3))], &metrics)
            .unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get(ComponentUuid(uuid(3)), MetricId(1)),
            Some(&Measure::with_value(12.0))
        );
    }
}
