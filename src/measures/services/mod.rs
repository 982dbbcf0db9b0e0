mod best_value_backfill;
mod branch_metric_remapper;
mod component_finder;
mod component_tree_sort;
mod measure_filter;
mod pagination;

pub use best_value_backfill::backfill_best_values;
pub use branch_metric_remapper::BranchMetricRemapper;
pub use component_finder::{ComponentFinder, ComponentRef};
pub use component_tree_sort::{ComponentTreeSort, SortField};
pub use measure_filter::with_measures_only;
pub use pagination::{offset, paginate, Paging};
