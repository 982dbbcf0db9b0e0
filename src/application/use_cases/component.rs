use super::lookups::resolve_metrics;
use crate::application::dto::{AdditionalField, ComponentRequest};
use crate::application::read_models::{ComponentResponse, ResponseBuilder};
use crate::measures::domain::BranchSelector;
use crate::measures::services::{backfill_best_values, BranchMetricRemapper, ComponentFinder};
use crate::ports::outbound::{AnalysisRepository, ComponentRepository, MeasureStore, MetricCatalog};
use crate::shared::Result;
use tracing::{debug, info_span};

/// ComponentUseCase - Measures of a single component
///
/// # Type Parameters
/// * `R` - ComponentRepository implementation
/// * `C` - MetricCatalog implementation
/// * `S` - MeasureStore implementation
/// * `A` - AnalysisRepository implementation
pub struct ComponentUseCase<R, C, S, A> {
    repository: R,
    catalog: C,
    store: S,
    analyses: A,
}

impl<R, C, S, A> ComponentUseCase<R, C, S, A>
where
    R: ComponentRepository,
    C: MetricCatalog,
    S: MeasureStore,
    A: AnalysisRepository,
{
    pub fn new(repository: R, catalog: C, store: S, analyses: A) -> Self {
        Self {
            repository,
            catalog,
            store,
            analyses,
        }
    }

    /// Executes the component use case
    ///
    /// Unlike the tree action, data metrics may be requested here.
    pub fn execute(&self, request: &ComponentRequest) -> Result<ComponentResponse> {
        let _span = info_span!("component").entered();

        // Step 1: Resolve the component and its branch
        let component = ComponentFinder::new(&self.repository).find(&request.component)?;
        let branch = self.repository.branch_by_uuid(component.branch_uuid)?;
        let analysis = self.analyses.last_analysis(component.branch_uuid)?;

        // Step 2: Resolve the metrics
        let remapper = BranchMetricRemapper::new(&request.metric_keys, branch.as_ref());
        let metrics = resolve_metrics(
            &self.catalog,
            &remapper.metric_keys_to_fetch(),
            remapper.requested_keys(),
        )?;

        // Step 3: Load, complete and remap the measures
        let mut measures = self
            .store
            .live_measures(std::slice::from_ref(&component.uuid), &metrics)?;
        let synthesized = backfill_best_values(&mut measures, std::slice::from_ref(&component), &metrics);
        let mut metrics = remapper.apply(&mut measures, metrics);
        metrics.sort_by(|a, b| a.key.cmp(&b.key));
        debug!(
            component = %component.key,
            measures = measures.len(),
            synthesized,
            "Loaded component measures"
        );

        // Step 4: Resolve the component a copy stands for
        let reference = match component.copy_component_uuid {
            Some(uuid) => self.repository.component_by_uuid(uuid)?,
            None => None,
        };

        // Step 5: Build the response
        let selector = match &branch {
            Some(b) if b.is_main => BranchSelector::Main,
            _ => request.component.selector(),
        };
        Ok(ComponentResponse {
            component: ResponseBuilder::component(
                &component,
                reference.as_ref(),
                &selector,
                &metrics,
                &measures,
            ),
            metrics: request
                .wants(AdditionalField::Metrics)
                .then(|| ResponseBuilder::metrics(&metrics)),
            period: if request.wants(AdditionalField::Periods) {
                analysis
                    .as_ref()
                    .and_then(|a| a.period.as_ref())
                    .map(ResponseBuilder::period)
            } else {
                None
            },
        })
    }
}
