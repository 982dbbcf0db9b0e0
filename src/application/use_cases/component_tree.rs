use super::lookups::{reference_components, resolve_metrics};
use crate::application::dto::{AdditionalField, ComponentTreeRequest, MetricSortFilter};
use crate::application::read_models::{ComponentTreeResponse, ResponseBuilder};
use crate::measures::domain::{
    Analysis, Branch, Component, ComponentTreeQuery, ComponentUuid, MeasureTable, Metric,
    Qualifier, Strategy,
};
use crate::measures::policies::forbidden_tree_metric_keys;
use crate::measures::services::{
    backfill_best_values, paginate, with_measures_only, BranchMetricRemapper, ComponentFinder,
    ComponentTreeSort, Paging,
};
use crate::ports::outbound::{
    AnalysisRepository, ComponentRepository, ComponentTypes, MeasureStore, MetricCatalog,
};
use crate::shared::{check_request, MeasuresError, Result};
use std::collections::HashMap;
use tracing::{debug, info, info_span};

/// Assembled tree before it is mapped onto the response
struct AssembledTree {
    components: Vec<Component>,
    total: usize,
    metrics: Vec<Metric>,
    measures: MeasureTable,
    references: HashMap<ComponentUuid, Component>,
}

/// ComponentTreeUseCase - Measures of the descendants of a component
///
/// Reconstructs a complete, sorted and paginated view of the measures of a
/// component tree out of partially stored measures.
///
/// # Type Parameters
/// * `R` - ComponentRepository implementation
/// * `C` - MetricCatalog implementation
/// * `S` - MeasureStore implementation
/// * `A` - AnalysisRepository implementation
/// * `T` - ComponentTypes implementation
pub struct ComponentTreeUseCase<R, C, S, A, T> {
    repository: R,
    catalog: C,
    store: S,
    analyses: A,
    component_types: T,
}

impl<R, C, S, A, T> ComponentTreeUseCase<R, C, S, A, T>
where
    R: ComponentRepository,
    C: MetricCatalog,
    S: MeasureStore,
    A: AnalysisRepository,
    T: ComponentTypes,
{
    pub fn new(repository: R, catalog: C, store: S, analyses: A, component_types: T) -> Self {
        Self {
            repository,
            catalog,
            store,
            analyses,
            component_types,
        }
    }

    /// Executes the component tree use case
    ///
    /// # Arguments
    /// * `request` - Validated component tree request
    ///
    /// # Returns
    /// The requested page of the tree with its measures
    ///
    /// # Errors
    /// - Not found: unknown component or metric keys
    /// - Bad request: metric types that cannot be served by this action
    /// - Illegal state: sort metric missing after validation
    pub fn execute(&self, request: &ComponentTreeRequest) -> Result<ComponentTreeResponse> {
        let _span = info_span!("component_tree", strategy = %request.strategy).entered();

        // Step 1: Resolve the base component and its branch
        let base = ComponentFinder::new(&self.repository).find(&request.component)?;
        let branch = self.repository.branch_by_uuid(base.branch_uuid)?;
        let selector = request.component.selector();

        // Step 2: Never analysed, nothing to show
        let Some(analysis) = self.analyses.last_analysis(base.branch_uuid)? else {
            info!(component = %base.key, "Component has never been analysed");
            let paging = Paging::new(request.page.page, request.page.page_size, 0);
            return Ok(ComponentTreeResponse {
                paging,
                base_component: ResponseBuilder::component(
                    &base,
                    None,
                    &selector,
                    &[],
                    &MeasureTable::new(),
                ),
                components: vec![],
                metrics: None,
                period: None,
            });
        };

        // Step 3: Resolve the metrics, widened on short-lived branches
        let remapper = BranchMetricRemapper::new(&request.metric_keys, branch.as_ref());
        let metrics = self.resolve_tree_metrics(&remapper)?;

        // Step 4: Assemble the tree
        let tree = self.assemble(request, &base, metrics, &remapper)?;
        info!(
            component = %base.key,
            total = tree.total,
            returned = tree.components.len(),
            "Component tree assembled"
        );

        // Step 5: Map onto the response
        Ok(self.build_response(request, &base, branch.as_ref(), &analysis, tree))
    }

    fn resolve_tree_metrics(&self, remapper: &BranchMetricRemapper) -> Result<Vec<Metric>> {
        let metrics = resolve_metrics(
            &self.catalog,
            &remapper.metric_keys_to_fetch(),
            remapper.requested_keys(),
        )?;
        let forbidden = forbidden_tree_metric_keys(&metrics);
        check_request(forbidden.is_empty(), || {
            format!(
                "Metrics {} can't be requested in this web service. Please use api/measures/component",
                forbidden.join(", ")
            )
        })?;
        Ok(metrics)
    }

    fn assemble(
        &self,
        request: &ComponentTreeRequest,
        base: &Component,
        metrics: Vec<Metric>,
        remapper: &BranchMetricRemapper,
    ) -> Result<AssembledTree> {
        // Descendants per strategy and filters
        let query = ComponentTreeQuery::new(
            base.uuid,
            request.strategy,
            request.query.clone(),
            self.child_qualifiers(request, base.qualifier),
        );
        let components = if query.matches_nothing() {
            vec![]
        } else {
            self.repository.descendants(&query)?
        };
        debug!(count = components.len(), "Fetched descendants");

        // One bulk fetch for the base component and its descendants
        let mut uuids: Vec<ComponentUuid> = Vec::with_capacity(components.len() + 1);
        uuids.push(base.uuid);
        uuids.extend(components.iter().map(|c| c.uuid));
        let mut measures = self.store.live_measures(&uuids, &metrics)?;

        let synthesized = backfill_best_values(&mut measures, &components, &metrics);
        debug!(synthesized, "Filled best value gaps");

        let metrics = remapper.apply(&mut measures, metrics);

        let sort_metric = match &request.metric_sort {
            Some(key) => Some(
                metrics
                    .iter()
                    .find(|m| m.key == *key)
                    .ok_or_else(|| MeasuresError::illegal_state(format!("Metric '{}' not found", key)))?,
            ),
            None => None,
        };

        let components = match (request.metric_sort_filter, sort_metric) {
            (MetricSortFilter::WithMeasuresOnly, Some(metric)) => {
                with_measures_only(components, metric, &measures, request.sorts_by_period())
            }
            _ => components,
        };

        let components = ComponentTreeSort::new(&request.sort, request.asc, sort_metric, &measures)
            .sort(components);
        let total = components.len();
        let components = paginate(components, request.page.page, request.page.page_size);
        let references = reference_components(&self.repository, &components)?;

        Ok(AssembledTree {
            components,
            total,
            metrics,
            measures,
            references,
        })
    }

    /// Qualifier whitelist implied by the strategy and the request
    ///
    /// `None` means any qualifier; an empty intersection yields an empty list.
    fn child_qualifiers(&self, request: &ComponentTreeRequest, base: Qualifier) -> Option<Vec<Qualifier>> {
        let leaves = (request.strategy == Strategy::Leaves)
            .then(|| self.component_types.leaf_qualifiers(base));
        match (leaves, &request.qualifiers) {
            (None, None) => None,
            (Some(leaves), None) => Some(leaves),
            (None, Some(requested)) => Some(requested.clone()),
            (Some(leaves), Some(requested)) => Some(
                requested
                    .iter()
                    .copied()
                    .filter(|q| leaves.contains(q))
                    .collect(),
            ),
        }
    }

    fn build_response(
        &self,
        request: &ComponentTreeRequest,
        base: &Component,
        branch: Option<&Branch>,
        analysis: &Analysis,
        tree: AssembledTree,
    ) -> ComponentTreeResponse {
        let selector = match branch {
            Some(b) if b.is_main => Default::default(),
            _ => request.component.selector(),
        };
        let mut metrics = tree.metrics;
        metrics.sort_by(|a, b| a.key.cmp(&b.key));

        let components = tree
            .components
            .iter()
            .map(|component| {
                let reference = component
                    .copy_component_uuid
                    .and_then(|uuid| tree.references.get(&uuid));
                ResponseBuilder::component(component, reference, &selector, &metrics, &tree.measures)
            })
            .collect();

        ComponentTreeResponse {
            paging: Paging::new(request.page.page, request.page.page_size, tree.total),
            base_component: ResponseBuilder::component(base, None, &selector, &metrics, &tree.measures),
            components,
            metrics: request
                .wants(AdditionalField::Metrics)
                .then(|| ResponseBuilder::metrics(&metrics)),
            period: if request.wants(AdditionalField::Periods) {
                analysis.period.as_ref().map(ResponseBuilder::period)
            } else {
                None
            },
        }
    }
}
