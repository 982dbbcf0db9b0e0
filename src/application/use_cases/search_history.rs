use super::lookups::missing_metric_keys;
use crate::application::dto::SearchHistoryRequest;
use crate::application::read_models::{
    HistoryMeasureView, HistoryValueView, ResponseBuilder, SearchHistoryResponse,
};
use crate::measures::domain::{Analysis, Measure, Metric, MetricId};
use crate::measures::policies::{is_eligible_for_best_value, BestValueSynthesizer};
use crate::measures::services::{paginate, ComponentFinder, Paging};
use crate::ports::outbound::{AnalysisRepository, ComponentRepository, MeasureStore, MetricCatalog};
use crate::shared::{MeasuresError, Result};
use std::collections::HashMap;
use tracing::{debug, info_span};
use uuid::Uuid;

const HISTORY_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// SearchHistoryUseCase - Time series of measures over past analyses
///
/// # Type Parameters
/// * `R` - ComponentRepository implementation
/// * `C` - MetricCatalog implementation
/// * `S` - MeasureStore implementation
/// * `A` - AnalysisRepository implementation
pub struct SearchHistoryUseCase<R, C, S, A> {
    repository: R,
    catalog: C,
    store: S,
    analyses: A,
}

impl<R, C, S, A> SearchHistoryUseCase<R, C, S, A>
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

    /// Executes the search history use case
    ///
    /// Paging applies to the analyses: every series of the response covers
    /// the same page of analyses, oldest first.
    pub fn execute(&self, request: &SearchHistoryRequest) -> Result<SearchHistoryResponse> {
        let _span = info_span!("search_history").entered();

        // Step 1: Resolve the component
        let component = ComponentFinder::new(&self.repository).find(&request.component)?;

        // Step 2: Resolve the metrics
        let mut metrics = self.catalog.metrics_by_keys(&request.metrics)?;
        let missing = missing_metric_keys(&request.metrics, &metrics);
        if !missing.is_empty() {
            return Err(MeasuresError::not_found(format!(
                "Metrics {} are not found",
                missing.join(", ")
            ))
            .into());
        }
        metrics.sort_by(|a, b| a.key.cmp(&b.key));

        // Step 3: Page the analyses of the range
        let analyses = self.analyses.analyses(component.branch_uuid, &request.range)?;
        let total = analyses.len();
        let analyses = paginate(analyses, request.page.page, request.page.page_size);

        // Step 4: Load the past measures of the page
        let analysis_uuids: Vec<Uuid> = analyses.iter().map(|a| a.uuid).collect();
        let past = if analysis_uuids.is_empty() {
            vec![]
        } else {
            self.store
                .past_measures(component.uuid, &analysis_uuids, &metrics)?
        };
        debug!(
            component = %component.key,
            analyses = analyses.len(),
            measures = past.len(),
            "Loaded past measures"
        );
        let mut by_analysis: HashMap<(Uuid, MetricId), Measure> = past
            .into_iter()
            .map(|p| ((p.analysis_uuid, p.metric_id), p.measure))
            .collect();

        // Step 5: Files omit best values, restore them per analysis
        if is_eligible_for_best_value(&component) {
            for analysis in &analyses {
                for metric in BestValueSynthesizer::optimized_metrics(&metrics) {
                    if let Some(measure) = BestValueSynthesizer::synthesize(metric) {
                        by_analysis.entry((analysis.uuid, metric.id)).or_insert(measure);
                    }
                }
            }
        }

        // Step 6: One series per metric
        let measures = metrics
            .iter()
            .map(|metric| HistoryMeasureView {
                metric: metric.key.clone(),
                history: analyses
                    .iter()
                    .map(|analysis| history_value(metric, analysis, by_analysis.get(&(analysis.uuid, metric.id))))
                    .collect(),
            })
            .collect();

        Ok(SearchHistoryResponse {
            paging: Paging::new(request.page.page, request.page.page_size, total),
            measures,
        })
    }
}

/// New code metrics report their variation, others their value or data
fn history_value(metric: &Metric, analysis: &Analysis, measure: Option<&Measure>) -> HistoryValueView {
    let value = measure.and_then(|measure| {
        if metric.is_on_new_code() {
            measure
                .variation()
                .map(|variation| ResponseBuilder::format_value(metric, variation))
        } else {
            ResponseBuilder::measure_value(metric, measure)
        }
    });
    HistoryValueView {
        date: analysis.created_at.format(HISTORY_DATE_FORMAT).to_string(),
        value,
    }
}
