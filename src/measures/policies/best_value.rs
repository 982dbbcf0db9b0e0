use crate::measures::domain::{Component, Measure, MeasureOrigin, Metric, Qualifier};

/// Qualifiers whose measures may be omitted from storage when equal to the best value
pub const QUALIFIERS_ELIGIBLE_FOR_BEST_VALUE: [Qualifier; 2] =
    [Qualifier::File, Qualifier::UnitTestFile];

/// True for file and unit-test file components
pub fn is_eligible_for_best_value(component: &Component) -> bool {
    QUALIFIERS_ELIGIBLE_FOR_BEST_VALUE.contains(&component.qualifier)
}

/// BestValueSynthesizer policy for materializing measures omitted by storage
///
/// A metric flagged "optimized for best value" is not persisted on file
/// components when the computed value equals the metric's best value. The
/// synthesizer rebuilds the in-memory measure for such a gap:
///
/// - metrics on new code (`new_` prefix, any case): zero variation on the
///   leak period, no absolute value
/// - any other metric: the registered best value, no variation
pub struct BestValueSynthesizer;

impl BestValueSynthesizer {
    /// Builds the synthetic measure for `metric`
    ///
    /// # Returns
    /// `None` when the metric is not optimized for best value
    pub fn synthesize(metric: &Metric) -> Option<Measure> {
        if !metric.is_optimized_for_best_value() {
            return None;
        }
        if metric.is_on_new_code() {
            return Some(Measure::synthesized(None, Some(0.0), MeasureOrigin::BestValue));
        }
        metric
            .best_value
            .map(|best| Measure::synthesized(Some(best), None, MeasureOrigin::BestValue))
    }

    /// Metrics of `metrics` for which a gap can be filled
    pub fn optimized_metrics(metrics: &[Metric]) -> Vec<&Metric> {
        metrics
            .iter()
            .filter(|m| m.is_optimized_for_best_value())
            .collect()
    }

    /// Whether `value` equals the metric's best value, `None` when it has none
    pub fn is_best_value(metric: &Metric, value: Option<f64>) -> Option<bool> {
        let best = metric.best_value?;
        Some(value.is_some_and(|v| v == best))
    }
}
