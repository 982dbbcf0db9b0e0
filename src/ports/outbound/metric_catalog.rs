use crate::measures::domain::Metric;
use crate::shared::Result;

/// MetricCatalog port for resolving metric definitions
///
/// This port abstracts the store owning metric definitions. The measures
/// layer only reads them.
pub trait MetricCatalog {
    /// Resolves metric keys to their definitions
    ///
    /// # Arguments
    /// * `keys` - Metric keys to resolve
    ///
    /// # Returns
    /// The metrics found, in no particular order; unknown keys are skipped
    ///
    /// # Errors
    /// Returns an error if the underlying store cannot be queried
    fn metrics_by_keys(&self, keys: &[String]) -> Result<Vec<Metric>>;
}

impl<T: MetricCatalog + ?Sized> MetricCatalog for &T {
    fn metrics_by_keys(&self, keys: &[String]) -> Result<Vec<Metric>> {
        (**self).metrics_by_keys(keys)
    }
}
