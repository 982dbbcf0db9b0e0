use crate::measures::domain::{Component, MeasureTable, Metric};

/// Keeps the components carrying a measure on the sort metric
///
/// When sorting by period, the measure must carry a leak period variation;
/// otherwise an absolute value or a data payload.
pub fn with_measures_only(
    components: Vec<Component>,
    sort_metric: &Metric,
    measures: &MeasureTable,
    by_period: bool,
) -> Vec<Component> {
    components
        .into_iter()
        .filter(|component| {
            measures
                .get(component.uuid, sort_metric.id)
                .is_some_and(|m| {
                    if by_period {
                        m.has_variation()
                    } else {
                        m.has_value_or_data()
                    }
                })
        })
        .collect()
}
