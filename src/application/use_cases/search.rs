use super::lookups::missing_metric_keys;
use crate::application::dto::SearchRequest;
use crate::application::read_models::{MeasureView, ResponseBuilder, SearchResponse};
use crate::measures::domain::{Component, ComponentUuid, Qualifier};
use crate::ports::outbound::{ComponentRepository, MeasureStore, MetricCatalog};
use crate::shared::{check_request, MeasuresError, Result};
use tracing::{debug, info_span};

/// Qualifiers of the components `search` accepts
pub const SEARCHABLE_QUALIFIERS: [Qualifier; 4] = [
    Qualifier::Project,
    Qualifier::Application,
    Qualifier::View,
    Qualifier::SubView,
];

/// SearchUseCase - Measures of several projects at once
///
/// # Type Parameters
/// * `R` - ComponentRepository implementation
/// * `C` - MetricCatalog implementation
/// * `S` - MeasureStore implementation
pub struct SearchUseCase<R, C, S> {
    repository: R,
    catalog: C,
    store: S,
}

impl<R, C, S> SearchUseCase<R, C, S>
where
    R: ComponentRepository,
    C: MetricCatalog,
    S: MeasureStore,
{
    pub fn new(repository: R, catalog: C, store: S) -> Self {
        Self {
            repository,
            catalog,
            store,
        }
    }

    /// Executes the search use case
    ///
    /// # Returns
    /// One flat measure per (metric, project) pair that has a stored value,
    /// ordered by metric key and then by project name
    ///
    /// # Errors
    /// - Not found: unknown metric keys
    /// - Bad request: a project key designates a component that is not a
    ///   project, application or portfolio
    pub fn execute(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let _span = info_span!("search", projects = request.project_keys.len()).entered();

        // Step 1: Resolve the metrics
        let mut metrics = self.catalog.metrics_by_keys(&request.metric_keys)?;
        let mut missing = missing_metric_keys(&request.metric_keys, &metrics);
        if !missing.is_empty() {
            missing.sort();
            return Err(MeasuresError::not_found(format!(
                "The following metrics are not found: {}",
                missing.join(", ")
            ))
            .into());
        }
        metrics.sort_by(|a, b| a.key.cmp(&b.key));

        // Step 2: Resolve the projects, unknown keys are skipped
        let mut projects = self.repository.components_by_keys(&request.project_keys)?;
        check_request(
            projects
                .iter()
                .all(|p| SEARCHABLE_QUALIFIERS.contains(&p.qualifier)),
            || {
                let codes: Vec<&str> = SEARCHABLE_QUALIFIERS.iter().map(|q| q.code()).collect();
                format!(
                    "Only component of qualifiers [{}] are allowed",
                    codes.join(", ")
                )
            },
        )?;
        projects.sort_by_cached_key(sort_name);

        // Step 3: Load the measures
        let uuids: Vec<ComponentUuid> = projects.iter().map(|p| p.uuid).collect();
        let measures = self.store.live_measures(&uuids, &metrics)?;
        debug!(measures = measures.len(), "Loaded project measures");

        // Step 4: Flatten per metric, then per project
        let mut views: Vec<MeasureView> = Vec::new();
        for metric in &metrics {
            for project in &projects {
                if let Some(measure) = measures.get(project.uuid, metric.id) {
                    let mut view = ResponseBuilder::measure(metric, measure);
                    view.component = Some(project.key.clone());
                    views.push(view);
                }
            }
        }

        Ok(SearchResponse { measures: views })
    }
}

fn sort_name(component: &Component) -> String {
    component.name.to_lowercase()
}
