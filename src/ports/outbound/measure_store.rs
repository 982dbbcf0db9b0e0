use crate::measures::domain::{ComponentUuid, MeasureTable, Metric, PastMeasure};
use crate::shared::Result;
use uuid::Uuid;

/// MeasureStore port for reading persisted measures
///
/// The store may have gaps: measures equal to the best value of
/// an optimized metric are not persisted on file components.
pub trait MeasureStore {
    /// Bulk fetch of the live measures of (components × metrics)
    ///
    /// # Arguments
    /// * `components` - Components whose measures are wanted
    /// * `metrics` - Metrics whose measures are wanted
    ///
    /// # Returns
    /// A table holding one entry per persisted (component, metric) pair
    ///
    /// # Errors
    /// Returns an error if the underlying store cannot be queried
    fn live_measures(&self, components: &[ComponentUuid], metrics: &[Metric]) -> Result<MeasureTable>;

    /// Measures of one component at the given past analyses
    fn past_measures(
        &self,
        component: ComponentUuid,
        analyses: &[Uuid],
        metrics: &[Metric],
    ) -> Result<Vec<PastMeasure>>;
}

impl<T: MeasureStore + ?Sized> MeasureStore for &T {
    fn live_measures(&self, components: &[ComponentUuid], metrics: &[Metric]) -> Result<MeasureTable> {
        (**self).live_measures(components, metrics)
    }

    fn past_measures(
        &self,
        component: ComponentUuid,
        analyses: &[Uuid],
        metrics: &[Metric],
    ) -> Result<Vec<PastMeasure>> {
        (**self).past_measures(component, analyses, metrics)
    }
}
