use crate::measures::domain::{Analysis, AnalysisRange, ComponentUuid};
use crate::shared::Result;

/// AnalysisRepository port for reading analysis snapshots of branch roots
pub trait AnalysisRepository {
    /// Most recent processed analysis of a branch root
    ///
    /// # Returns
    /// `None` when the branch has never been analysed
    fn last_analysis(&self, root_uuid: ComponentUuid) -> Result<Option<Analysis>>;

    /// Processed analyses of a branch root created within `range`, oldest first
    fn analyses(&self, root_uuid: ComponentUuid, range: &AnalysisRange) -> Result<Vec<Analysis>>;
}

impl<T: AnalysisRepository + ?Sized> AnalysisRepository for &T {
    fn last_analysis(&self, root_uuid: ComponentUuid) -> Result<Option<Analysis>> {
        (**self).last_analysis(root_uuid)
    }

    fn analyses(&self, root_uuid: ComponentUuid, range: &AnalysisRange) -> Result<Vec<Analysis>> {
        (**self).analyses(root_uuid, range)
    }
}
