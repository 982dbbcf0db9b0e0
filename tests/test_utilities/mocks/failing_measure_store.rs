use measures_ws::measures::domain::{ComponentUuid, MeasureTable, Metric, PastMeasure};
use measures_ws::prelude::*;
use uuid::Uuid;

/// Mock MeasureStore whose every query fails
pub struct FailingMeasureStore;

impl MeasureStore for FailingMeasureStore {
    fn live_measures(&self, _components: &[ComponentUuid], _metrics: &[Metric]) -> Result<MeasureTable> {
        anyhow::bail!("Mock measure store failure");
    }

    fn past_measures(
        &self,
        _component: ComponentUuid,
        _analyses: &[Uuid],
        _metrics: &[Metric],
    ) -> Result<Vec<PastMeasure>> {
        anyhow::bail!("Mock measure store failure");
    }
}
