pub mod analysis;
pub mod branch;
pub mod component;
pub mod measure;
pub mod measure_table;
pub mod metric;
pub mod period;
pub mod tree_query;

pub use analysis::{Analysis, AnalysisRange, AnalysisStatus};
pub use branch::{Branch, BranchSelector, BranchType};
pub use component::{Component, ComponentUuid, Qualifier};
pub use measure::{Measure, MeasureOrigin, PastMeasure, StoredMeasure, StoredPastMeasure};
pub use measure_table::{MeasureKey, MeasureTable};
pub use metric::{is_new_code_key, Direction, Metric, MetricId, ValueType};
pub use period::{Period, LEAK_PERIOD_INDEX};
pub use tree_query::{ComponentTreeQuery, Strategy};
